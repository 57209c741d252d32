use serde::Deserialize;
use tracing::instrument;

use crate::{
    gateway::{
        error::GatewayError,
        form::FormBody,
        mask::MaskPolicy,
        transport::{HttpTransport, Transport},
    },
    result::RequestResult,
};

pub mod error;
pub mod form;
pub mod headers;
/// Secret and PII masking for log output
pub mod mask;
pub mod payin;
/// Order status lookup
pub mod status;
pub mod transport;
pub mod validate;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Value of the `status` field the gateway uses to signal success.
const SUCCESS_STATUS: &str = "success";

/// Account credentials issued by ZenoPay.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    #[serde(rename = "apiKey")]
    api_key: String,
    #[serde(rename = "secretKey")]
    secret_key: String,
    #[serde(rename = "accountID")]
    account_id: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            account_id: account_id.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask::Masked::mask(&self.api_key))
            .field("secret_key", &mask::Masked::mask(&self.secret_key))
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// ZenoPay API client.
///
/// Holds no mutable state, so a single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ZenoPay<T = HttpTransport> {
    credentials: Credentials,
    transport: T,
}

impl ZenoPay {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, HttpTransport::new())
    }
}

impl<T: Transport> ZenoPay<T> {
    pub const BASE_URL: &str = "https://api.zeno.africa";

    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Creates a payment order. Never fails: every outcome is a [`RequestResult`].
    pub async fn pay(&self, payment: &payin::PaymentRequest) -> RequestResult {
        self.try_pay(payment).await.into()
    }

    /// Same as [`ZenoPay::pay`] but keeps the error kind.
    #[instrument(skip_all)]
    pub async fn try_pay(&self, payment: &payin::PaymentRequest) -> Result<serde_json::Value> {
        if let Err(e) = payment.validate() {
            tracing::warn!("Rejected payment request: {e}");
            return Err(e.into());
        }
        let body = payment.form_body(&self.credentials);
        match self.post_request("", &body).await {
            Ok(response) => {
                tracing::info!(order_id = ?response.get("order_id"), "Created payment order");
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Failed to create a payment: {e}");
                Err(e)
            }
        }
    }

    /// Posts `body` to `route` and turns the gateway answer into a result.
    async fn post_request(&self, route: &str, body: &FormBody) -> Result<serde_json::Value> {
        let url = format!("{}/{}", Self::BASE_URL, route);
        let response = self.transport.post_form(&url, body).await?;
        normalize(response)
    }
}

fn normalize(response: serde_json::Value) -> Result<serde_json::Value> {
    if response.get("status").and_then(|s| s.as_str()) == Some(SUCCESS_STATUS) {
        return Ok(response);
    }
    tracing::warn!(
        status = ?response.get("status"),
        "Gateway reported failure"
    );
    let message = response
        .get("message")
        .cloned()
        .unwrap_or(serde_json::Value::Null);
    Err(GatewayError::GatewayResponse(message))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::gateway::{payin::PaymentRequest, transport::stub::StubTransport};

    fn client(stub: &Arc<StubTransport>) -> ZenoPay<Arc<StubTransport>> {
        ZenoPay::with_transport(
            Credentials::new("e043615fdc83bac5", "173752605b098535", "zp51004"),
            Arc::clone(stub),
        )
    }

    fn hekima() -> PaymentRequest {
        PaymentRequest {
            customer_name: "Hekima Peter".into(),
            customer_email: "info@hekima.pro".into(),
            customer_phone_number: "0752628215".into(),
            amount_to_charge: 500.0,
        }
    }

    #[tokio::test]
    async fn successful_payment_returns_whole_payload() {
        let stub = Arc::new(StubTransport::new(
            json!({ "status": "success", "order_id": "abc" }),
        ));
        let result = client(&stub).pay(&hekima()).await;
        assert_eq!(
            result,
            RequestResult::success(json!({ "status": "success", "order_id": "abc" }))
        );

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let (url, body) = &calls[0];
        assert_eq!(url, "https://api.zeno.africa/");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "create_order": "1",
                "api_key": "e043615fdc83bac5",
                "account_id": "zp51004",
                "secret_key": "173752605b098535",
                "amount": "500",
                "buyer_name": "Hekima Peter",
                "buyer_email": "info@hekima.pro",
                "buyer_phone": "0752628215",
            })
        );
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_its_message() {
        let stub = Arc::new(StubTransport::new(
            json!({ "status": "failed", "message": "insufficient funds" }),
        ));
        let result = client(&stub).pay(&hekima()).await;
        assert_eq!(result, RequestResult::failure("insufficient funds"));
    }

    #[tokio::test]
    async fn missing_name_never_hits_network() {
        let stub = Arc::new(StubTransport::new(json!({ "status": "success" })));
        let payment = PaymentRequest {
            customer_name: String::new(),
            ..hekima()
        };
        let result = client(&stub).pay(&payment).await;
        assert_eq!(result, RequestResult::failure("Customer name is required"));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn bad_phone_lengths_fail() {
        let stub = Arc::new(StubTransport::new(json!({ "status": "success" })));
        let zeno = client(&stub);
        for phone in ["1", "075262821", "07526282150", "0752628215000"] {
            let payment = PaymentRequest {
                customer_phone_number: phone.into(),
                ..hekima()
            };
            let result = zeno.pay(&payment).await;
            assert_eq!(
                result,
                RequestResult::failure("Customer phone number must have 10 or 12 characters")
            );
        }
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn non_positive_amounts_fail() {
        let stub = Arc::new(StubTransport::new(json!({ "status": "success" })));
        let zeno = client(&stub);
        for amount in [0.0, -0.0, -1.0, -500.5] {
            let payment = PaymentRequest {
                amount_to_charge: amount,
                ..hekima()
            };
            let result = zeno.pay(&payment).await;
            assert_eq!(
                result,
                RequestResult::failure("Amount to charge cannot be less than or equal to 0")
            );
        }
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn garbled_response_is_reported_not_raised() {
        let stub = Arc::new(StubTransport::garbled());
        let result = client(&stub).pay(&hekima()).await;
        assert!(!result.success);
        let message = result.message.as_str().unwrap();
        assert!(message.starts_with("gateway response deserialization"));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn typed_errors_keep_their_kind() {
        let stub = Arc::new(StubTransport::new(json!({ "status": "success" })));
        let payment = PaymentRequest {
            customer_email: "info@hekima".into(),
            ..hekima()
        };
        let err = client(&stub).try_pay(&payment).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Validation(error::ValidationError::CustomerEmailInvalid)
        ));
    }

    #[test]
    fn status_must_be_the_exact_string() {
        assert!(normalize(json!({ "status": "success" })).is_ok());
        for response in [
            json!({ "status": "SUCCESS" }),
            json!({ "status": true }),
            json!({ "result": "success" }),
            json!([]),
        ] {
            let err = normalize(response).unwrap_err();
            assert_eq!(err.into_message(), serde_json::Value::Null);
        }
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let credentials = Credentials::new("e043615fdc83bac5", "173752605b098535", "zp51004");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("e043615fdc83bac5"));
        assert!(!debug.contains("173752605b098535"));
        assert!(debug.contains("zp51004"));
    }

    #[test]
    fn credentials_deserialize_from_account_config() {
        let credentials: Credentials = serde_json::from_value(json!({
            "accountID": "zp51004",
            "apiKey": "key",
            "secretKey": "secret",
        }))
        .unwrap();
        assert_eq!(credentials.account_id, "zp51004");
        assert_eq!(credentials.api_key, "key");
        assert_eq!(credentials.secret_key, "secret");
    }
}
