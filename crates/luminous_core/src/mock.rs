//! Static sample data for the dashboard.

use crate::{Campaign, CampaignStatus, ChartPoint, MetricSnapshot, Trend};

/// Sample campaign list shown on the campaigns page.
#[rustfmt::skip]
pub fn campaigns() -> Vec<Campaign> {
    use CampaignStatus::*;
    vec![
        Campaign::new("1", "Summer Fashion Collection", Active, 50_000, 35_750, 1_250_000, 15_600, 1.25, 485, 73.71, "2024-06-01", "2024-08-31"),
        Campaign::new("2", "Tech Product Launch", Active, 75_000, 45_200, 890_000, 12_100, 1.36, 325, 139.08, "2024-07-15", "2024-09-15"),
        Campaign::new("3", "Holiday Special Offers", Paused, 30_000, 28_900, 750_000, 9_500, 1.27, 285, 101.40, "2024-05-01", "2024-07-31"),
        Campaign::new("4", "Brand Awareness Campaign", Completed, 40_000, 39_800, 2_100_000, 18_900, 0.90, 156, 255.13, "2024-04-01", "2024-06-30"),
        Campaign::new("5", "Mobile App Promotion", Draft, 60_000, 0, 0, 0, 0.0, 0, 0.0, "2024-08-01", "2024-10-31"),
        Campaign::new("6", "Back to School Deals", Active, 45_000, 21_300, 640_000, 8_700, 1.36, 262, 81.30, "2024-07-20", "2024-09-10"),
        Campaign::new("7", "Festive Season Sale", Active, 120_000, 64_500, 2_480_000, 34_200, 1.38, 912, 70.72, "2024-09-15", "2024-11-15"),
        Campaign::new("8", "Fitness Gear Retargeting", Paused, 25_000, 12_800, 410_000, 4_350, 1.06, 118, 108.47, "2024-06-10", "2024-08-10"),
        Campaign::new("9", "Spring Clearance", Completed, 35_000, 34_600, 1_020_000, 11_900, 1.17, 340, 101.76, "2024-03-01", "2024-04-30"),
        Campaign::new("10", "Loyalty Rewards Push", Active, 55_000, 18_900, 530_000, 7_950, 1.50, 301, 62.79, "2024-08-05", "2024-10-05"),
        Campaign::new("11", "Video Awareness Series", Paused, 80_000, 41_000, 3_150_000, 22_050, 0.70, 190, 215.79, "2024-05-15", "2024-08-15"),
        Campaign::new("12", "New Year Kickoff", Completed, 65_000, 64_200, 1_760_000, 21_400, 1.22, 598, 107.36, "2024-01-01", "2024-02-15"),
    ]
}

/// Headline metrics shown on the overview cards.
pub fn metrics() -> Vec<MetricSnapshot> {
    vec![
        MetricSnapshot::parse("Total Revenue", "₹1.2L", 12.50, Trend::Up),
        MetricSnapshot::parse("Active Users", "25,658", 8.20, Trend::Up),
        MetricSnapshot::parse("Conversion Rate", "3.24%", -2.10, Trend::Down),
        MetricSnapshot::parse("Growth Rate", "↑12.30%", 15.30, Trend::Up),
    ]
}

/// Monthly revenue in rupees for the last twelve months.
pub fn revenue_series() -> Vec<ChartPoint> {
    [
        ("Jan", 850_000),
        ("Feb", 920_000),
        ("Mar", 1_100_000),
        ("Apr", 980_000),
        ("May", 1_150_000),
        ("Jun", 1_320_000),
        ("Jul", 1_250_000),
        ("Aug", 1_400_000),
        ("Sep", 1_280_000),
        ("Oct", 1_450_000),
        ("Nov", 1_380_000),
        ("Dec", 1_500_000),
    ]
    .into_iter()
    .map(|(month, revenue)| ChartPoint::new(month, revenue))
    .collect()
}

/// Traffic share per acquisition channel, in percent.
pub fn traffic_sources() -> Vec<ChartPoint> {
    [
        ("Google Ads", 45),
        ("Facebook", 25),
        ("Instagram", 15),
        ("LinkedIn", 10),
        ("Others", 5),
    ]
    .into_iter()
    .map(|(source, share)| ChartPoint::new(source, share))
    .collect()
}
