use std::fmt::Display;

use serde::de::Error;

/// Caller input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    CustomerNameRequired,
    CustomerEmailRequired,
    CustomerEmailInvalid,
    CustomerPhoneRequired,
    CustomerPhoneLength,
    AmountNotANumber,
    AmountNotPositive,
    OrderIdRequired,
}

impl std::error::Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::CustomerNameRequired => "Customer name is required",
            Self::CustomerEmailRequired => "Customer email is required",
            Self::CustomerEmailInvalid => "Customer email is not valid",
            Self::CustomerPhoneRequired => "Customer phone number is required",
            Self::CustomerPhoneLength => "Customer phone number must have 10 or 12 characters",
            Self::AmountNotANumber => "Amount to charge must be a valid number",
            Self::AmountNotPositive => "Amount to charge cannot be less than or equal to 0",
            Self::OrderIdRequired => "Order ID is required",
        };
        f.write_str(reason)
    }
}

#[derive(Debug)]
pub enum GatewayError {
    Validation(ValidationError),
    RequestError(reqwest::Error),
    GatewayDeserialization(serde_json::Error),
    /// Gateway answered with a non-success status. Holds its `message` field as sent.
    GatewayResponse(serde_json::Value),
}

impl GatewayError {
    /// Text or value surfaced to callers of the flat API.
    pub fn into_message(self) -> serde_json::Value {
        match self {
            GatewayError::GatewayResponse(message) => message,
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::GatewayDeserialization(serde_json::Error::custom(format!(
                "failed to decode response body: {value}"
            )));
        }
        Self::RequestError(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::GatewayDeserialization(value)
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Validation(e) => Some(e),
            GatewayError::RequestError(e) => Some(e),
            GatewayError::GatewayDeserialization(e) => Some(e),
            GatewayError::GatewayResponse(_) => None,
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Validation(e) => e.fmt(f),
            GatewayError::RequestError(e) => write!(f, "http request error: {e}"),
            GatewayError::GatewayDeserialization(e) => {
                write!(f, "gateway response deserialization: {e}")
            }
            GatewayError::GatewayResponse(message) => match message {
                serde_json::Value::String(s) => write!(f, "gateway response: {s}"),
                other => write!(f, "gateway response: {other}"),
            },
        }
    }
}
