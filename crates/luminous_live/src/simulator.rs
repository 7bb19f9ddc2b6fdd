//! Per-tick metric mutation rules.
//!
//! Every rule only ever increases a value; the feed exists to make a demo
//! dashboard look alive and is not a model of real metric movement.

use luminous_core::{MetricSnapshot, MetricValue, Trend};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::{debug, instrument};

/// Rupees added to a currency metric per tick.
pub const CURRENCY_INCREMENT: Range<f64> = 2_000.0..5_000.0;
/// Percentage points added to a plain percentage per tick.
pub const PERCENTAGE_INCREMENT: Range<f64> = 0.0..0.2;
/// Percentage points added to a growth percentage per tick.
pub const GROWTH_INCREMENT: Range<f64> = 0.0..0.3;
/// Smallest and largest amount added to a count per tick.
pub const COUNT_INCREMENT: (u64, u64) = (1, 3);

/// Produces the next metric snapshot from the current one.
#[derive(Debug, Clone)]
pub struct LiveMetricSimulator<R = StdRng> {
    rng: R,
}

impl LiveMetricSimulator<StdRng> {
    /// Simulator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Simulator with a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LiveMetricSimulator<R> {
    /// Simulator drawing increments from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Compute the next snapshot for every metric.
    ///
    /// Labels and order are preserved. The returned set replaces `current`
    /// wholesale.
    #[instrument(skip_all, fields(metrics = current.len()))]
    pub fn tick(&mut self, current: &[MetricSnapshot]) -> Vec<MetricSnapshot> {
        current.iter().map(|metric| self.update(metric)).collect()
    }

    /// Compute the next value of a single metric.
    pub fn update(&mut self, metric: &MetricSnapshot) -> MetricSnapshot {
        let (value, raw_change) = self.mutate(metric.value());
        let change = finite_change(metric.label(), raw_change);
        let trend = if change > 0.0 { Trend::Up } else { Trend::Neutral };
        metric.with_update(value, round_change(change), trend)
    }

    fn mutate(&mut self, value: &MetricValue) -> (MetricValue, f64) {
        match value {
            MetricValue::Currency { amount, unit } => {
                let increment = self.rng.gen_range(CURRENCY_INCREMENT);
                (
                    MetricValue::Currency {
                        amount: amount + increment,
                        unit: *unit,
                    },
                    increment / amount * 100.0,
                )
            }
            MetricValue::Percentage { value } => {
                let increment = self.rng.gen_range(PERCENTAGE_INCREMENT);
                (
                    MetricValue::Percentage {
                        value: (value + increment).max(0.0),
                    },
                    increment / value * 100.0,
                )
            }
            MetricValue::Count { value } => {
                let (low, high) = COUNT_INCREMENT;
                let increment = self.rng.gen_range(low..=high);
                (
                    MetricValue::Count {
                        value: value.saturating_add(increment),
                    },
                    increment as f64 / *value as f64 * 100.0,
                )
            }
            MetricValue::Growth { value } => {
                let increment = self.rng.gen_range(GROWTH_INCREMENT);
                (
                    MetricValue::Growth {
                        value: (value + increment).max(0.0),
                    },
                    increment / value * 100.0,
                )
            }
            MetricValue::Other { .. } => (value.clone(), 0.0),
        }
    }
}

/// Coerce a non-finite change to zero.
fn finite_change(label: &str, change: f64) -> f64 {
    if change.is_finite() {
        change
    } else {
        debug!(label, change, "Non-finite change coerced to zero");
        0.0
    }
}

fn round_change(change: f64) -> f64 {
    (change * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_change() {
        assert_eq!(round_change(2.345_6), 2.35);
        assert_eq!(round_change(1.0 / 3.0), 0.33);
        assert_eq!(round_change(0.003_9), 0.0);
    }

    #[test]
    fn test_finite_change_coerces() {
        assert_eq!(finite_change("x", f64::INFINITY), 0.0);
        assert_eq!(finite_change("x", f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_change("x", f64::NAN), 0.0);
    }
}
