use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    gateway::{Result, ZenoPay, error::ValidationError, form::FormBody, transport::Transport},
    result::RequestResult,
};

const ORDER_STATUS_ROUTE: &str = "order-status";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    pub order_id: String,
}

impl OrderStatusRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if crate::gateway::validate::is_empty(&self.order_id) {
            return Err(ValidationError::OrderIdRequired);
        }
        Ok(())
    }

    pub(crate) fn form_body(&self) -> FormBody {
        FormBody::new()
            .field("check_status", 1_i64)
            .field("order_id", self.order_id.as_str())
    }
}

impl<T: Transport> ZenoPay<T> {
    /// Looks up the state of an order previously created with [`ZenoPay::pay`].
    pub async fn check_payment_status(&self, order_id: &str) -> RequestResult {
        self.try_check_payment_status(order_id).await.into()
    }

    #[instrument(skip_all, fields(order_id = %order_id))]
    pub async fn try_check_payment_status(&self, order_id: &str) -> Result<serde_json::Value> {
        let request = OrderStatusRequest::new(order_id);
        if let Err(e) = request.validate() {
            tracing::warn!("Rejected status request: {e}");
            return Err(e.into());
        }
        match self
            .post_request(ORDER_STATUS_ROUTE, &request.form_body())
            .await
        {
            Ok(response) => {
                tracing::info!(
                    payment_status = ?response.get("payment_status"),
                    "Fetched order status"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Failed to fetch order status: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::gateway::{Credentials, transport::stub::StubTransport};

    fn client(stub: &Arc<StubTransport>) -> ZenoPay<Arc<StubTransport>> {
        ZenoPay::with_transport(
            Credentials::new("key", "secret", "zp51004"),
            Arc::clone(stub),
        )
    }

    #[tokio::test]
    async fn empty_order_id_never_hits_network() {
        let stub = Arc::new(StubTransport::new(json!({ "status": "success" })));
        let result = client(&stub).check_payment_status("").await;
        assert_eq!(result, RequestResult::failure("Order ID is required"));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn completed_order() {
        let payload = json!({ "status": "success", "payment_status": "COMPLETED" });
        let stub = Arc::new(StubTransport::new(payload.clone()));
        let result = client(&stub).check_payment_status("674c0d32b09dd").await;
        assert_eq!(result, RequestResult::success(payload));

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let (url, body) = &calls[0];
        assert_eq!(url, "https://api.zeno.africa/order-status");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "check_status": "1", "order_id": "674c0d32b09dd" })
        );
    }

    #[tokio::test]
    async fn repeated_checks_are_identical() {
        let stub = Arc::new(StubTransport::new(
            json!({ "status": "success", "payment_status": "PENDING" }),
        ));
        let zeno = client(&stub);
        let first = zeno.check_payment_status("674c0d32b09dd").await;
        let second = zeno.check_payment_status("674c0d32b09dd").await;
        assert_eq!(first, second);
        assert_eq!(stub.calls().len(), 2);
        assert_eq!(stub.calls()[0], stub.calls()[1]);
    }

    #[tokio::test]
    async fn unknown_order_surfaces_gateway_message() {
        let stub = Arc::new(StubTransport::new(
            json!({ "status": "error", "message": "Order not found" }),
        ));
        let err = client(&stub)
            .try_check_payment_status("missing")
            .await
            .unwrap_err();
        assert_eq!(err.into_message(), json!("Order not found"));
    }
}
