use serde::Serialize;

pub trait MaskPolicy {
    fn mask(value: &str) -> String;
}

/// Keeps the last 4 characters.
pub struct Masked;

impl MaskPolicy for Masked {
    fn mask(value: &str) -> String {
        let len = value.chars().count();
        if len > 4 {
            let tail: String = value.chars().skip(len - 4).collect();
            "*".repeat(len - 4) + &tail
        } else {
            "*".repeat(len)
        }
    }
}

/// Keeps the first character of the mailbox and the whole domain.
pub struct MaskedEmail;

impl MaskPolicy for MaskedEmail {
    fn mask(value: &str) -> String {
        match value.split_once('@') {
            Some((local, domain)) => {
                let mut chars = local.chars();
                let first = chars.next().map(String::from).unwrap_or_default();
                format!("{first}{}@{domain}", "*".repeat(chars.count()))
            }
            None => Masked::mask(value),
        }
    }
}

/// Return true if a key name holds account credentials.
fn is_secret_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k == "api_key" || k == "secret_key" || k.contains("secret") || k.contains("apikey")
}

fn is_phone_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("phone") || k == "msisdn"
}

fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    match serde_json::to_value(v) {
        Ok(value) => secure_value(&value),
        Err(e) => serde_json::Value::String(format!("<unserializable: {e}>")),
    }
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_secret_key(k) || is_phone_key(k) => {
                        Value::String(Masked::mask(s))
                    }
                    Value::String(s) if is_email_key(k) => Value::String(MaskedEmail::mask(s)),
                    Value::Number(n) if is_phone_key(k) => {
                        Value::String(Masked::mask(&n.to_string()))
                    }
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
