use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{DELAY_STATUS_DELAYED, DELAY_STATUS_ON_TIME};

/// An order as recorded by the transactional system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub status: String,
    pub purchased_at: NaiveDateTime,
    pub estimated_delivery_at: NaiveDateTime,
    /// Absent until the carrier confirms delivery
    pub delivered_at: Option<NaiveDateTime>,
    pub customer_id: String,
}

/// The customer an order was placed by
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    /// Stable identifier across a customer's order-scoped records
    pub customer_unique_id: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
}

/// A single payment against an order; an order may have zero or many
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub amount: f64,
    pub method: String,
}

/// One line item of an order; an order may have zero or many
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub price: f64,
    pub freight_value: f64,
}

/// A review left for an order; an order may have zero or many
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub order_id: String,
    pub score: i32,
}

/// Immutable set of input relations for one pipeline run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub payments: Vec<Payment>,
    pub order_items: Vec<OrderItem>,
    pub reviews: Vec<Review>,
}

/// Whether an order arrived within its promised delivery window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayStatus {
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "On Time")]
    OnTime,
}

impl std::fmt::Display for DelayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DelayStatus::Delayed => DELAY_STATUS_DELAYED,
            DelayStatus::OnTime => DELAY_STATUS_ON_TIME,
        };
        write!(f, "{}", label)
    }
}

/// One denormalized analytics row per qualifying order, in the shape the
/// downstream reporting layer consumes. The four renamed fields keep the
/// reporting contract's canonical column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAnalyticsRecord {
    pub order_id: String,
    pub customer_unique_id: String,
    pub status: String,
    pub customer_city: String,
    pub customer_state: String,
    /// Region label derived from the customer's state code
    pub region: String,
    pub purchased_at: NaiveDateTime,
    pub delivered_at: NaiveDateTime,
    pub estimated_delivery_at: NaiveDateTime,
    /// Calendar days between purchase and actual delivery
    pub delivery_days: i64,
    /// Calendar days between purchase and the promised estimate
    pub promised_days: i64,
    pub delay_status: DelayStatus,
    /// Sum of all payment amounts; 0 when the order has no payment rows
    #[serde(rename = "valor_total_pagamento")]
    pub total_payment: f64,
    /// Sum of all line item prices; 0 when the order has no item rows
    #[serde(rename = "valor_total_produtos")]
    pub total_products: f64,
    /// Sum of all line item freight values; 0 when the order has no item rows
    #[serde(rename = "valor_total_frete")]
    pub total_freight: f64,
    /// Distinct payment method labels rendered as a delimited string
    #[serde(rename = "metodos_pagamento")]
    pub payment_methods: String,
    /// Mean review score; absent when the order was never reviewed
    pub review_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_status_labels() {
        assert_eq!(DelayStatus::Delayed.to_string(), "Delayed");
        assert_eq!(DelayStatus::OnTime.to_string(), "On Time");
    }

    #[test]
    fn test_delay_status_serializes_to_reporting_labels() {
        assert_eq!(
            serde_json::to_string(&DelayStatus::OnTime).unwrap(),
            "\"On Time\""
        );
        assert_eq!(
            serde_json::to_string(&DelayStatus::Delayed).unwrap(),
            "\"Delayed\""
        );
    }
}
