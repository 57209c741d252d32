use serde::{Deserialize, Serialize};

use crate::gateway::error::GatewayError;

/// Uniform outcome of every public client call.
///
/// On success `message` is the decoded gateway payload. On failure it is the
/// reason: a validation or transport error as text, or whatever the gateway
/// put in its own `message` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResult {
    pub success: bool,
    pub message: serde_json::Value,
}

impl RequestResult {
    pub fn success(payload: serde_json::Value) -> Self {
        Self {
            success: true,
            message: payload,
        }
    }

    pub fn failure(message: impl Into<serde_json::Value>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<std::result::Result<serde_json::Value, GatewayError>> for RequestResult {
    fn from(value: std::result::Result<serde_json::Value, GatewayError>) -> Self {
        match value {
            Ok(payload) => Self::success(payload),
            Err(e) => Self::failure(e.into_message()),
        }
    }
}
