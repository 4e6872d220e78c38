//! Typed records for the three persisted tables.
//!
//! The generated query result is schema-free (see [`crate::ResultTable`]);
//! these types only describe data entering the store and the journey rows
//! it derives.

use serde::{Deserialize, Serialize};

/// One ad impression/touch. Externally sourced, never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpressionRecord {
    pub user_id: String,
    pub campaign: String,
    /// Ordinal of this touch within the user's journey.
    pub click_pos: i64,
    /// 1 when the user converted, else 0.
    pub conversion: i64,
    pub revenue: f64,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Externally computed Markov attribution for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkovRecord {
    pub channel_name: String,
    pub click: i64,
    pub original_conversions: f64,
    pub original_conversion_rate: f64,
    pub total_conversions: f64,
    pub attributed_conversion_rate: f64,
    pub total_revenue: f64,
}

/// Aggregate for one journey length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyRow {
    pub touches: i64,
    pub users: i64,
    pub converters: i64,
    pub conversion_rate_pct: f64,
    pub avg_ltv: f64,
}
