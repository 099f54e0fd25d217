//! Week ledger records and request bodies.

use serde::{Deserialize, Serialize};

/// Points recorded for a single week.
///
/// `week_number` is the unique key; `id` is a storage surrogate only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub id: i64,
    pub week_number: i64,
    pub points: i64,
}

/// Request body for setting the points of a week.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWeekRequest {
    #[serde(default)]
    pub points: Option<i64>,
    /// Optional echo of the path week number; must match when present
    #[serde(default)]
    pub week_number: Option<i64>,
}

/// Response body for clearing the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResult {
    pub cleared: u64,
}
