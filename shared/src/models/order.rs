//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// Order entity (a single transport job)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Price in currency unit, an exact JSON number (digits kept as sent)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub start_city: String,
    pub destination: String,
    /// Employee reference, always resolves to an existing employee
    pub employee_id: i64,
}

/// Order with its employee resolved (list responses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub employee: Employee,
}

/// Create order payload
///
/// All fields are required; they are optional here so that a missing field
/// surfaces as a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub employee_id: Option<i64>,
    pub start_city: Option<String>,
    pub destination: Option<String>,
}

/// Update order payload (sparse patch)
///
/// Absent or blank fields leave the stored value untouched. A supplied
/// `employee_id` must resolve to an existing employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub employee_id: Option<i64>,
    pub start_city: Option<String>,
    pub destination: Option<String>,
}
