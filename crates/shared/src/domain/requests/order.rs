use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const ORDER_STATUSES: &[&str] = &["pending", "processing", "shipped", "delivered", "cancelled"];

pub fn valid_order_status(value: &str) -> Result<(), ValidationError> {
    if ORDER_STATUSES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("order_status"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,

    #[validate(range(min = 0, message = "Total must not be negative"))]
    pub total_amount: i64,

    #[validate(custom(function = valid_order_status))]
    pub status: Option<String>,

    pub shipping_address: Option<String>,

    pub billing_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 0, message = "Total must not be negative"))]
    pub total_amount: Option<i64>,

    #[validate(custom(function = valid_order_status))]
    pub status: Option<String>,

    pub shipping_address: Option<String>,

    pub billing_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_accepts_known_values() {
        for status in ORDER_STATUSES {
            assert!(valid_order_status(status).is_ok());
        }
    }

    #[test]
    fn test_order_status_rejects_unknown_values() {
        assert!(valid_order_status("refunded").is_err());
    }
}
