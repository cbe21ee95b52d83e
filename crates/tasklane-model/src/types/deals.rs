//! CRM pipeline types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{DealId, UserId};

/// Deal in the sales pipeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub stage: String,
    #[serde(default)]
    pub company: Option<String>,
    pub value: f64,
    pub probability: u8, // 0-100
    pub owner_id: UserId,
    #[serde(default)]
    pub expected_close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// Pipeline value weighted by win probability.
    pub fn weighted_value(&self) -> f64 {
        self.value * f64::from(self.probability.min(100)) / 100.0
    }
}
