use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use crate::server::model::cart::{CartItem, CartTotals};
use crate::server::model::Notice;

pub(crate) const ESTIMATED_DELIVERY: &str = "30-45 minutes";

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum CheckoutError {
    #[display("missing required fields: {}", fields.join(", "))]
    MissingInformation {
        fields: Vec<&'static str>,
    },
    #[display("cart is empty")]
    EmptyCart,
}

impl CheckoutError {
    pub fn notice(&self) -> Notice {
        match self {
            CheckoutError::MissingInformation { .. } => {
                Notice::destructive("Missing Information", "Please fill in all required fields.")
            }
            CheckoutError::EmptyCart => {
                Notice::destructive("Cart is empty", "Add some delicious items to get started!")
            }
        }
    }
}

/// Absent keys deserialize as empty so `validate` reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
}

impl CustomerInfo {
    /// Name, phone and address must be present. Whitespace alone doesn't count.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect::<Vec<_>>();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingInformation { fields })
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostCheckoutRequest {
    pub customer: CustomerInfo,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrderConfirmation {
    pub order_id: u64,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub customer: CustomerInfo,
    pub estimated_delivery: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostCheckoutResponse {
    pub order: OrderConfirmation,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetOrdersResponse {
    pub orders: Vec<OrderConfirmation>,
}
