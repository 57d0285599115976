use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase order for a pet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The ordered pet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
    /// Number of pets ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// When the order ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,
    /// Order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Whether the order has been fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, not yet approved.
    Placed,
    /// Order approved, awaiting delivery.
    Approved,
    /// Order delivered.
    Delivered,
}
