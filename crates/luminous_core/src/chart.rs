//! Labelled series for the overview charts.

use serde::{Deserialize, Serialize};

/// One labelled value in a chart series.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ChartPoint {
    /// Axis or legend label
    #[new(into)]
    label: String,
    /// Plotted value
    value: u64,
}

/// Share of `point` in the sum of `series`, as a whole percentage.
///
/// An empty or all-zero series yields 0.
pub fn share_percent(point: &ChartPoint, series: &[ChartPoint]) -> u64 {
    let total: u64 = series.iter().map(|p| p.value).sum();
    if total == 0 {
        return 0;
    }
    ((point.value as f64 / total as f64) * 100.0).round() as u64
}
