use luminous_core::{MetricKind, MetricSnapshot, MetricValue, Trend, mock};
use luminous_live::LiveMetricSimulator;

fn by_label<'a>(metrics: &'a [MetricSnapshot], label: &str) -> &'a MetricSnapshot {
    metrics
        .iter()
        .find(|m| m.label() == label)
        .expect("metric present")
}

#[test]
fn test_tick_preserves_labels_and_order() {
    let initial = mock::metrics();
    let next = LiveMetricSimulator::seeded(1).tick(&initial);

    let before: Vec<_> = initial.iter().map(|m| m.label().clone()).collect();
    let after: Vec<_> = next.iter().map(|m| m.label().clone()).collect();
    assert_eq!(before, after);
    for (old, new) in initial.iter().zip(&next) {
        assert_eq!(old.value().kind(), new.value().kind());
    }
}

#[test]
fn test_revenue_tick_adds_between_two_and_five_thousand() {
    let initial = mock::metrics();
    let mut simulator = LiveMetricSimulator::seeded(7);

    for _ in 0..20 {
        let next = simulator.tick(&initial);
        let revenue = by_label(&next, "Total Revenue");
        let MetricValue::Currency { amount, .. } = revenue.value() else {
            panic!("revenue should stay a currency value");
        };
        assert!((122_000.0..125_000.0).contains(amount), "amount {amount}");
        // 2000/120000 and 5000/120000 as percentages
        assert!((1.66..=4.17).contains(revenue.change()), "change {}", revenue.change());
        assert_eq!(*revenue.trend(), Trend::Up);
    }
}

#[test]
fn test_count_moves_by_one_to_three() {
    let initial = mock::metrics();
    let mut simulator = LiveMetricSimulator::seeded(3);

    for _ in 0..20 {
        let next = simulator.tick(&initial);
        let users = by_label(&next, "Active Users");
        let MetricValue::Count { value } = users.value() else {
            panic!("users should stay a count");
        };
        assert!((25_659..=25_661).contains(value), "value {value}");
        assert_eq!(*users.trend(), Trend::Up);
        assert_eq!(users.value().to_string(), luminous_core::group_thousands(*value));
    }
}

#[test]
fn test_values_never_decrease() {
    let mut simulator = LiveMetricSimulator::seeded(11);
    let mut current = mock::metrics();

    for _ in 0..50 {
        let next = simulator.tick(&current);
        for (old, new) in current.iter().zip(&next) {
            let (Some(old), Some(new)) = (old.value().numeric(), new.value().numeric()) else {
                continue;
            };
            assert!(new >= old, "{new} < {old}");
        }
        for metric in &next {
            assert!(*metric.change() >= 0.0);
            assert_ne!(*metric.trend(), Trend::Down);
        }
        current = next;
    }
}

#[test]
fn test_zero_previous_value_reports_no_change() {
    let initial = vec![
        MetricSnapshot::new("Signups", MetricValue::Count { value: 0 }, 0.0, Trend::Neutral),
        MetricSnapshot::new("Bounce", MetricValue::Percentage { value: 0.0 }, 0.0, Trend::Neutral),
    ];

    let next = LiveMetricSimulator::seeded(5).tick(&initial);

    for metric in &next {
        assert_eq!(*metric.change(), 0.0);
        assert_eq!(*metric.trend(), Trend::Neutral);
    }
    assert!(matches!(next[0].value(), MetricValue::Count { value: 1..=3 }));
}

#[test]
fn test_unrecognised_metric_is_left_alone() {
    let initial = vec![MetricSnapshot::parse("Status", "Healthy", 4.0, Trend::Down)];

    let next = LiveMetricSimulator::seeded(9).tick(&initial);

    assert_eq!(next[0].value().kind(), MetricKind::Other);
    assert_eq!(next[0].value().to_string(), "Healthy");
    assert_eq!(*next[0].change(), 0.0);
    assert_eq!(*next[0].trend(), Trend::Neutral);
}

#[test]
fn test_change_is_rounded_to_two_decimals() {
    let mut simulator = LiveMetricSimulator::seeded(21);
    let next = simulator.tick(&mock::metrics());

    for metric in &next {
        let scaled = metric.change() * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "change {}", metric.change());
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let initial = mock::metrics();
    let mut a = LiveMetricSimulator::seeded(42);
    let mut b = LiveMetricSimulator::seeded(42);

    assert_eq!(a.tick(&initial), b.tick(&initial));
    assert_eq!(a.tick(&initial), b.tick(&initial));
}

fn numeric(metrics: &[MetricSnapshot], label: &str) -> f64 {
    by_label(metrics, label)
        .value()
        .numeric()
        .expect("numeric metric")
}

#[test]
fn test_percentage_and_growth_increments_stay_in_range() {
    let mut simulator = LiveMetricSimulator::seeded(13);
    let mut current = mock::metrics();

    for _ in 0..100 {
        let next = simulator.tick(&current);
        let rate = numeric(&next, "Conversion Rate") - numeric(&current, "Conversion Rate");
        let growth = numeric(&next, "Growth Rate") - numeric(&current, "Growth Rate");
        assert!((0.0..0.2 + 1e-9).contains(&rate), "rate delta {rate}");
        assert!((0.0..0.3 + 1e-9).contains(&growth), "growth delta {growth}");
        current = next;
    }
}

#[test]
fn test_negative_percentages_are_floored_at_zero() {
    let initial = vec![
        MetricSnapshot::new("Margin", MetricValue::Percentage { value: -5.0 }, 0.0, Trend::Down),
        MetricSnapshot::new("Momentum", MetricValue::Growth { value: -1.0 }, 0.0, Trend::Down),
    ];

    let next = LiveMetricSimulator::seeded(17).tick(&initial);

    assert_eq!(next[0].value(), &MetricValue::Percentage { value: 0.0 });
    assert_eq!(next[1].value(), &MetricValue::Growth { value: 0.0 });
    for metric in &next {
        assert_ne!(*metric.trend(), Trend::Up);
    }
}

#[test]
fn test_revenue_display_grows_in_lakhs() {
    let initial = mock::metrics();
    assert_eq!(by_label(&initial, "Total Revenue").value().to_string(), "₹1.20L");

    let next = LiveMetricSimulator::seeded(29).tick(&initial);
    let shown = by_label(&next, "Total Revenue").value().to_string();

    let lakhs: f64 = shown
        .strip_prefix('₹')
        .and_then(|rest| rest.strip_suffix('L'))
        .and_then(|amount| amount.parse().ok())
        .unwrap_or_else(|| panic!("unexpected revenue display {shown}"));
    assert!((1.22..=1.25).contains(&lakhs), "shown {shown}");
}
