//! Chart selection by column-name heuristics.
//!
//! The renderer only draws what [`select_charts`] returns. Matching is on
//! exact column names, so open-ended answers whose aliases differ simply
//! get no chart.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{CHART_MAX_ROWS, CHART_TICK_ANGLE};
use crate::table::ResultTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Converters per journey length as bars, conversion rate as a line on a second axis.
    JourneyCombo,
    /// Revenue or conversions per campaign.
    CampaignBar,
}

/// Renderer switches. The journey chart ships disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub journey_chart: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub tick_angle: i32,
    pub points: Vec<ChartPoint>,
}

/// Pick the charts to draw for a result table, in display order.
#[must_use]
pub fn select_charts(table: &ResultTable, options: &ChartOptions) -> Vec<ChartSpec> {
    let mut charts = Vec::new();
    if options.journey_chart {
        charts.extend(journey_chart(table));
    }
    charts.extend(campaign_chart(table));
    charts
}

fn journey_chart(table: &ResultTable) -> Option<ChartSpec> {
    let touches = table.column_index("touches")?;
    let converters = table.column_index("converters")?;
    let rate = table.column_index("conversion_rate_pct");

    let mut rows: Vec<&Vec<Value>> = table.rows.iter().collect();
    rows.sort_by(|left, right| compare_numeric(left.get(touches), right.get(touches)));

    let points = rows
        .into_iter()
        .filter_map(|row| {
            Some(ChartPoint {
                label: label_of(row.get(touches)?),
                value: row.get(converters)?.as_f64()?,
                line_value: rate.and_then(|index| row.get(index)).and_then(Value::as_f64),
                group: None,
            })
        })
        .collect();

    Some(ChartSpec {
        kind: ChartKind::JourneyCombo,
        title: "Conversions by Journey Length".to_owned(),
        x: "touches".to_owned(),
        y: "converters".to_owned(),
        line: rate.map(|_| "conversion_rate_pct".to_owned()),
        color: None,
        tick_angle: 0,
        points,
    })
}

fn campaign_chart(table: &ResultTable) -> Option<ChartSpec> {
    let campaign = table.column_index("campaign")?;
    let y = if table.has_column("revenue") { "revenue" } else { "conversions" };
    let value = table.column_index(y)?;
    let plan = table.column_index("plan");

    let points = table
        .rows
        .iter()
        .take(CHART_MAX_ROWS)
        .filter_map(|row| {
            Some(ChartPoint {
                label: label_of(row.get(campaign)?),
                value: row.get(value)?.as_f64()?,
                line_value: None,
                group: plan.and_then(|index| row.get(index)).map(label_of),
            })
        })
        .collect();

    Some(ChartSpec {
        kind: ChartKind::CampaignBar,
        title: format!("Top Campaigns – {}", title_case(y)),
        x: "campaign".to_owned(),
        y: y.to_owned(),
        line: None,
        color: plan.map(|_| "plan".to_owned()),
        tick_angle: CHART_TICK_ANGLE,
        points,
    })
}

fn compare_numeric(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let left = left.and_then(Value::as_f64).unwrap_or(f64::NAN);
    let right = right.and_then(Value::as_f64).unwrap_or(f64::NAN);
    left.total_cmp(&right)
}

fn label_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(columns: &[&str], rows: Vec<Vec<Value>>) -> ResultTable {
        ResultTable::new(columns.iter().map(|c| (*c).to_owned()).collect(), rows)
    }

    #[test]
    fn campaign_revenue_chart_prefers_revenue() {
        let result = table(
            &["campaign", "conversions", "revenue"],
            vec![vec![json!("brand"), json!(10), json!(990.0)]],
        );
        let charts = select_charts(&result, &ChartOptions::default());
        assert_eq!(charts.len(), 1);
        let chart = &charts[0];
        assert_eq!(chart.kind, ChartKind::CampaignBar);
        assert_eq!(chart.y, "revenue");
        assert_eq!(chart.title, "Top Campaigns – Revenue");
        assert_eq!(chart.tick_angle, 45);
        assert_eq!(chart.points[0].label, "brand");
        assert!((chart.points[0].value - 990.0).abs() < f64::EPSILON);
    }

    #[test]
    fn campaign_chart_falls_back_to_conversions() {
        let result = table(&["campaign", "conversions"], vec![vec![json!("brand"), json!(10)]]);
        let charts = select_charts(&result, &ChartOptions::default());
        assert_eq!(charts[0].y, "conversions");
        assert_eq!(charts[0].title, "Top Campaigns – Conversions");
        assert!(charts[0].color.is_none());
    }

    #[test]
    fn campaign_chart_is_colored_by_plan() {
        let result = table(
            &["campaign", "plan", "revenue"],
            vec![vec![json!("brand"), json!("annual"), json!(120)]],
        );
        let charts = select_charts(&result, &ChartOptions::default());
        assert_eq!(charts[0].color.as_deref(), Some("plan"));
        assert_eq!(charts[0].points[0].group.as_deref(), Some("annual"));
    }

    #[test]
    fn campaign_chart_is_capped_at_twenty_rows() {
        let rows = (0..30).map(|i| vec![json!(format!("c{i}")), json!(i)]).collect();
        let result = table(&["campaign", "conversions"], rows);
        let charts = select_charts(&result, &ChartOptions::default());
        assert_eq!(charts[0].points.len(), CHART_MAX_ROWS);
        assert_eq!(charts[0].points[0].label, "c0");
    }

    #[test]
    fn campaign_without_value_column_gets_no_chart() {
        let result = table(&["campaign", "users"], vec![vec![json!("brand"), json!(4)]]);
        assert!(select_charts(&result, &ChartOptions::default()).is_empty());
    }

    #[test]
    fn journey_chart_is_off_by_default() {
        let result = table(
            &["touches", "converters", "conversion_rate_pct"],
            vec![vec![json!(1), json!(3), json!(30.0)]],
        );
        assert!(select_charts(&result, &ChartOptions::default()).is_empty());
    }

    #[test]
    fn journey_chart_sorts_by_touches_when_enabled() {
        let result = table(
            &["touches", "converters", "conversion_rate_pct"],
            vec![
                vec![json!(3), json!(1), json!(50.0)],
                vec![json!(1), json!(4), json!(20.0)],
                vec![json!(2), json!(2), json!(25.0)],
            ],
        );
        let charts = select_charts(&result, &ChartOptions { journey_chart: true });
        assert_eq!(charts.len(), 1);
        let chart = &charts[0];
        assert_eq!(chart.kind, ChartKind::JourneyCombo);
        assert_eq!(chart.line.as_deref(), Some("conversion_rate_pct"));
        let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(chart.points[0].line_value, Some(20.0));
    }

    #[test]
    fn unrelated_columns_get_no_chart() {
        let result = table(&["channel_name", "total_revenue"], vec![vec![json!("a"), json!(1)]]);
        assert!(select_charts(&result, &ChartOptions { journey_chart: true }).is_empty());
    }
}
