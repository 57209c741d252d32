//! Input predicates used before building a gateway request.

pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Loose `local@domain.tld` check. Rejects whitespace, missing parts and
/// a top level domain shorter than two letters.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') || local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    labels_ok && is_tld(labels[labels.len() - 1])
}

/// Alphabetic, or an IDN in punycode form (`xn--p1ai`).
fn is_tld(label: &str) -> bool {
    match label.strip_prefix("xn--") {
        Some(encoded) => {
            !encoded.is_empty() && encoded.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => label.chars().count() >= 2 && label.chars().all(char::is_alphabetic),
    }
}

/// Phone numbers are 10 (local) or 12 (international, no `+`) characters long.
pub fn has_phone_length(value: &str) -> bool {
    matches!(value.chars().count(), 10 | 12)
}

pub fn is_numeric(value: f64) -> bool {
    value.is_finite()
}
