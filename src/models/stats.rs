//! Derived dashboard statistics and chart hand-off series.
//!
//! Several figures are named placeholder constants standing in for a future
//! metrics source; they are configuration, not computed aggregates.

use serde::{Deserialize, Serialize};

/// Expense-entry count shown on the dashboard until real aggregation lands.
pub const TOTAL_EXPENSE_ENTRIES: u32 = 342;

/// Platform error rate (percent) shown on the dashboard.
pub const ERROR_RATE_PERCENT: f64 = 1.2;

/// Estimate of shops active today: `max(1, floor(total * 0.65))`.
///
/// A deterministic heuristic, not a measurement. The floor of 1 holds even
/// for an empty platform.
pub fn active_today_estimate(total_shops: usize) -> usize {
    ((total_shops as f64 * 0.65).floor() as usize).max(1)
}

/// One slice of the manual-vs-voice entry split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySplitSlice {
    pub name: String,
    pub value: u32,
}

/// One point of the hourly activity series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    /// Hour label, e.g. "09:00".
    pub name: String,
    pub sales: u32,
    pub voice: u32,
}

/// Entry-type split sample series for the pie chart.
pub fn entry_type_split() -> Vec<EntrySplitSlice> {
    vec![
        EntrySplitSlice {
            name: "Manual Entry".to_string(),
            value: 65,
        },
        EntrySplitSlice {
            name: "Voice (Rush Mode)".to_string(),
            value: 35,
        },
    ]
}

/// Hourly activity sample series for the bar chart.
pub fn hourly_activity() -> Vec<ActivityPoint> {
    let points = [
        ("09:00", 40, 10),
        ("11:00", 120, 45),
        ("13:00", 90, 30),
        ("15:00", 85, 25),
        ("17:00", 150, 80),
        ("19:00", 180, 100),
        ("21:00", 60, 20),
    ];
    points
        .into_iter()
        .map(|(name, sales, voice)| ActivityPoint {
            name: name.to_string(),
            sales,
            voice,
        })
        .collect()
}

/// Everything the Overview tab needs, in one hand-off payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_shops: usize,
    pub active_shops_today: usize,
    pub total_expense_entries: u32,
    pub error_rate_percent: f64,
    pub entry_type_split: Vec<EntrySplitSlice>,
    pub hourly_activity: Vec<ActivityPoint>,
}

impl DashboardStats {
    /// Compute the dashboard figures for a platform of `total_shops` shops.
    pub fn for_shop_count(total_shops: usize) -> Self {
        Self {
            total_shops,
            active_shops_today: active_today_estimate(total_shops),
            total_expense_entries: TOTAL_EXPENSE_ENTRIES,
            error_rate_percent: ERROR_RATE_PERCENT,
            entry_type_split: entry_type_split(),
            hourly_activity: hourly_activity(),
        }
    }
}
