//! Display formatting for result tables.
//!
//! Columns are recognized purely by name; anything unrecognized is shown
//! as the engine returned it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::table::ResultTable;

/// Semantic role of a result column, derived from its exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// `conversion_rate_pct`: two decimals with a percent sign.
    ConversionRate,
    /// `avg_ltv`: whole dollars, thousands separators.
    AverageLtv,
    /// `revenue`: whole dollars, thousands separators.
    Revenue,
    /// `conversions`: whole number, thousands separators.
    Conversions,
}

impl ColumnRole {
    #[must_use]
    pub fn from_column_name(name: &str) -> Option<Self> {
        match name {
            "conversion_rate_pct" => Some(Self::ConversionRate),
            "avg_ltv" => Some(Self::AverageLtv),
            "revenue" => Some(Self::Revenue),
            "conversions" => Some(Self::Conversions),
            _ => None,
        }
    }

    fn render(self, number: f64) -> String {
        match self {
            Self::ConversionRate => format!("{number:.2}%"),
            Self::AverageLtv | Self::Revenue => format!("${}", grouped(number)),
            Self::Conversions => grouped(number),
        }
    }
}

/// A result table with every cell already rendered to display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render one cell according to its column's role.
///
/// Role columns only reformat numeric values; text that happens to land
/// in such a column is shown unchanged.
#[must_use]
pub fn format_cell(column: &str, value: &Value) -> String {
    match (ColumnRole::from_column_name(column), value.as_f64()) {
        (Some(role), Some(number)) => role.render(number),
        _ => raw_cell(value),
    }
}

#[must_use]
pub fn format_table(table: &ResultTable) -> FormattedTable {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| format_cell(column, row.get(index).unwrap_or(&Value::Null)))
                .collect()
        })
        .collect();
    FormattedTable { columns: table.columns.clone(), rows }
}

/// Insert `,` every three digits of an unsigned integer string.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Zero-decimal rendering with thousands separators, sign kept in front.
fn grouped(number: f64) -> String {
    let rounded = format!("{number:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&rounded),
    }
}

fn raw_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
