use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Customer;

/// A line item as requested by the caller: which product, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub id: String,
    pub quantity: u32,
}

impl RequestedItem {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self { id: id.into(), quantity }
    }
}

/// Input of the order creation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub products: Vec<RequestedItem>,
}

/// A persisted line item. The price is the product's unit price at the
/// moment the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}

/// Payload for persisting a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_sums_price_times_quantity() {
        let order = Order {
            id: "order_1".into(),
            customer: Customer {
                id: "customer_1".into(),
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
            items: vec![
                OrderItem { product_id: "p1".into(), price: dec!(10.50), quantity: 2 },
                OrderItem { product_id: "p2".into(), price: dec!(3), quantity: 3 },
            ],
            created_at: Utc::now(),
        };
        assert_eq!(order.total(), dec!(30.00));
    }
}
