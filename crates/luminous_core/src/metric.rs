//! Metric card data model.
//!
//! A metric's unit is decided once, when its value is created, and carried as
//! the [`MetricValue`] variant. Display strings are only ever produced from the
//! typed value, never inspected again after parsing.

use serde::{Deserialize, Serialize};

const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Direction indicator shown next to a metric's change.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    /// Value went up
    Up,
    /// Value went down
    Down,
    /// No meaningful movement
    #[default]
    Neutral,
}

/// Scale used when rendering a currency amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyUnit {
    /// Rendered in lakhs with an `L` suffix, e.g. `₹1.25L`
    #[default]
    Lakh,
    /// Rendered as whole rupees, e.g. `₹250,000`
    Rupee,
}

/// A metric value tagged with its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, strum::EnumDiscriminants)]
#[strum_discriminants(name(MetricKind), derive(Hash, strum::Display))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricValue {
    /// Money amount in rupees
    Currency {
        /// Amount in base units (rupees)
        amount: f64,
        /// Display scale
        unit: CurrencyUnit,
    },
    /// Plain percentage, e.g. a conversion rate
    Percentage {
        /// Percentage points
        value: f64,
    },
    /// Whole-number count rendered with thousands separators
    Count {
        /// Current count
        value: u64,
    },
    /// Growth percentage rendered with an up arrow
    Growth {
        /// Percentage points
        value: f64,
    },
    /// Any value without a recognised unit; never mutated
    Other {
        /// Original display text
        text: String,
    },
}

impl MetricValue {
    /// Classify a formatted display value.
    ///
    /// Markers are checked in a fixed order: currency symbol, percent sign
    /// without a growth arrow, thousands separator, growth arrow. Text whose
    /// number cannot be read falls back to [`MetricValue::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use luminous_core::{MetricKind, MetricValue};
    ///
    /// assert_eq!(MetricValue::parse("₹1.2L").kind(), MetricKind::Currency);
    /// assert_eq!(MetricValue::parse("3.24%").kind(), MetricKind::Percentage);
    /// assert_eq!(MetricValue::parse("25,658").kind(), MetricKind::Count);
    /// assert_eq!(MetricValue::parse("↑12.30%").kind(), MetricKind::Growth);
    /// assert_eq!(MetricValue::parse("n/a").kind(), MetricKind::Other);
    /// ```
    pub fn parse(text: &str) -> Self {
        let parsed = if text.contains('₹') {
            Self::parse_currency(text)
        } else if text.contains('%') && !text.contains('↑') {
            strip_number(text, &['%']).map(|value| MetricValue::Percentage { value })
        } else if text.contains(',') {
            text.replace(',', "")
                .trim()
                .parse::<u64>()
                .ok()
                .map(|value| MetricValue::Count { value })
        } else if text.contains('↑') {
            strip_number(text, &['↑', '%']).map(|value| MetricValue::Growth { value })
        } else {
            None
        };

        parsed.unwrap_or_else(|| MetricValue::Other {
            text: text.to_string(),
        })
    }

    fn parse_currency(text: &str) -> Option<Self> {
        if text.trim_end().ends_with('L') {
            strip_number(text, &['₹', 'L']).map(|lakhs| MetricValue::Currency {
                amount: lakhs * RUPEES_PER_LAKH,
                unit: CurrencyUnit::Lakh,
            })
        } else {
            strip_number(text, &['₹', ',']).map(|amount| MetricValue::Currency {
                amount,
                unit: CurrencyUnit::Rupee,
            })
        }
    }

    /// The unit tag of this value.
    pub fn kind(&self) -> MetricKind {
        MetricKind::from(self)
    }

    /// Underlying number, if the value has one.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            MetricValue::Currency { amount, .. } => Some(*amount),
            MetricValue::Percentage { value } | MetricValue::Growth { value } => Some(*value),
            MetricValue::Count { value } => Some(*value as f64),
            MetricValue::Other { .. } => None,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Currency {
                amount,
                unit: CurrencyUnit::Lakh,
            } => write!(f, "₹{:.2}L", amount / RUPEES_PER_LAKH),
            MetricValue::Currency {
                amount,
                unit: CurrencyUnit::Rupee,
            } => write!(f, "₹{}", group_thousands(amount.max(0.0).round() as u64)),
            MetricValue::Percentage { value } => write!(f, "{:.2}%", value),
            MetricValue::Count { value } => write!(f, "{}", group_thousands(*value)),
            MetricValue::Growth { value } => write!(f, "↑{:.2}%", value),
            MetricValue::Other { text } => write!(f, "{}", text),
        }
    }
}

fn strip_number(text: &str, markers: &[char]) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| !markers.contains(c)).collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One labelled metric as shown on a dashboard card.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct MetricSnapshot {
    /// Stable identifier, e.g. "Total Revenue"
    #[new(into)]
    label: String,
    /// Current value
    value: MetricValue,
    /// Percentage change since the previous snapshot
    change: f64,
    /// Direction indicator
    trend: Trend,
}

impl MetricSnapshot {
    /// Create a snapshot from a formatted display value.
    pub fn parse(label: impl Into<String>, display: &str, change: f64, trend: Trend) -> Self {
        Self::new(label, MetricValue::parse(display), change, trend)
    }

    /// Replace value, change and trend while keeping the label.
    pub fn with_update(&self, value: MetricValue, change: f64, trend: Trend) -> Self {
        Self {
            label: self.label.clone(),
            value,
            change,
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lakh_parse() {
        let value = MetricValue::parse("₹1.2L");
        assert_eq!(
            value,
            MetricValue::Currency {
                amount: 120_000.0,
                unit: CurrencyUnit::Lakh
            }
        );
        assert_eq!(value.to_string(), "₹1.20L");
    }

    #[test]
    fn test_currency_rupee_parse() {
        let value = MetricValue::parse("₹250,000");
        assert_eq!(value.kind(), MetricKind::Currency);
        assert_eq!(value.to_string(), "₹250,000");
    }

    #[test]
    fn test_percentage_takes_precedence_over_growth_without_arrow() {
        assert_eq!(
            MetricValue::parse("3.24%"),
            MetricValue::Percentage { value: 3.24 }
        );
        assert_eq!(
            MetricValue::parse("↑12.30%"),
            MetricValue::Growth { value: 12.30 }
        );
    }

    #[test]
    fn test_count_requires_separator() {
        assert_eq!(MetricValue::parse("25,658"), MetricValue::Count { value: 25_658 });
        assert_eq!(MetricValue::parse("999").kind(), MetricKind::Other);
    }

    #[test]
    fn test_unreadable_number_is_other() {
        assert_eq!(MetricValue::parse("₹abcL").kind(), MetricKind::Other);
        assert_eq!(MetricValue::parse("₹abcL").to_string(), "₹abcL");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(25_661), "25,661");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_display_shapes() {
        assert_eq!(MetricValue::Percentage { value: 3.3 }.to_string(), "3.30%");
        assert_eq!(MetricValue::Growth { value: 12.5 }.to_string(), "↑12.50%");
        assert_eq!(MetricValue::Count { value: 25_660 }.to_string(), "25,660");
    }

    #[test]
    fn test_snapshot_with_update_keeps_label() {
        let snapshot = MetricSnapshot::parse("Active Users", "25,658", 8.2, Trend::Up);
        let next = snapshot.with_update(MetricValue::Count { value: 25_660 }, 0.01, Trend::Up);
        assert_eq!(next.label(), "Active Users");
        assert_eq!(*next.change(), 0.01);
    }
}
