use serde::{Deserialize, Serialize};

use crate::gateway::{Credentials, error::ValidationError, form::FormBody, validate};

/// Customer and amount for a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: String,
    pub amount_to_charge: f64,
}

impl PaymentRequest {
    /// Checks run in a fixed order and stop at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if validate::is_empty(&self.customer_name) {
            return Err(ValidationError::CustomerNameRequired);
        }
        if validate::is_empty(&self.customer_email) {
            return Err(ValidationError::CustomerEmailRequired);
        }
        if !validate::is_email(&self.customer_email) {
            return Err(ValidationError::CustomerEmailInvalid);
        }
        if validate::is_empty(&self.customer_phone_number) {
            return Err(ValidationError::CustomerPhoneRequired);
        }
        if !validate::has_phone_length(&self.customer_phone_number) {
            return Err(ValidationError::CustomerPhoneLength);
        }
        if !validate::is_numeric(self.amount_to_charge) {
            return Err(ValidationError::AmountNotANumber);
        }
        if self.amount_to_charge <= 0.0 {
            return Err(ValidationError::AmountNotPositive);
        }
        Ok(())
    }

    pub(crate) fn form_body(&self, credentials: &Credentials) -> FormBody {
        FormBody::new()
            .field("create_order", 1_i64)
            .field("api_key", credentials.api_key.as_str())
            .field("account_id", credentials.account_id.as_str())
            .field("secret_key", credentials.secret_key.as_str())
            .field("amount", self.amount_to_charge)
            .field("buyer_name", self.customer_name.as_str())
            .field("buyer_email", self.customer_email.as_str())
            .field("buyer_phone", self.customer_phone_number.as_str())
    }
}
