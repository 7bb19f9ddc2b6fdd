//! Marketing campaign records.

use crate::{FieldValue, Record, group_thousands};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lifecycle state of a campaign.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CampaignStatus {
    /// Currently running
    Active,
    /// Temporarily halted
    Paused,
    /// Finished
    Completed,
    /// Not yet launched
    Draft,
}

/// Columns of the campaign table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CampaignField {
    /// Campaign identifier
    Id,
    /// Campaign name
    Name,
    /// Lifecycle state
    Status,
    /// Allocated budget
    Budget,
    /// Amount spent so far
    Spent,
    /// Ad impressions
    Impressions,
    /// Ad clicks
    Clicks,
    /// Click-through rate (percent)
    Ctr,
    /// Conversions
    Conversions,
    /// Cost per acquisition
    Cpa,
    /// First day (ISO date)
    StartDate,
    /// Last day (ISO date)
    EndDate,
}

impl CampaignField {
    /// Column header label.
    pub fn title(self) -> &'static str {
        match self {
            CampaignField::Id => "ID",
            CampaignField::Name => "Campaign",
            CampaignField::Status => "Status",
            CampaignField::Budget => "Budget",
            CampaignField::Spent => "Spent",
            CampaignField::Impressions => "Impressions",
            CampaignField::Clicks => "Clicks",
            CampaignField::Ctr => "CTR",
            CampaignField::Conversions => "Conversions",
            CampaignField::Cpa => "CPA",
            CampaignField::StartDate => "Start",
            CampaignField::EndDate => "End",
        }
    }
}

const CAMPAIGN_FIELDS: &[CampaignField] = &[
    CampaignField::Id,
    CampaignField::Name,
    CampaignField::Status,
    CampaignField::Budget,
    CampaignField::Spent,
    CampaignField::Impressions,
    CampaignField::Clicks,
    CampaignField::Ctr,
    CampaignField::Conversions,
    CampaignField::Cpa,
    CampaignField::StartDate,
    CampaignField::EndDate,
];

/// One advertising campaign.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign identifier
    #[new(into)]
    id: String,
    /// Campaign name
    #[new(into)]
    name: String,
    /// Lifecycle state
    status: CampaignStatus,
    /// Allocated budget in rupees
    budget: u64,
    /// Amount spent in rupees
    spent: u64,
    /// Ad impressions
    impressions: u64,
    /// Ad clicks
    clicks: u64,
    /// Click-through rate in percent
    ctr: f64,
    /// Conversions
    conversions: u64,
    /// Cost per acquisition in rupees
    cpa: f64,
    /// First day, ISO formatted
    #[new(into)]
    start_date: String,
    /// Last day, ISO formatted
    #[new(into)]
    end_date: String,
}

impl Campaign {
    /// Human-readable cell text for a column.
    ///
    /// Money is shown in rupees with thousands separators, CTR as a
    /// percentage.
    pub fn display_cell(&self, field: CampaignField) -> String {
        match field {
            CampaignField::Id => self.id.clone(),
            CampaignField::Name => self.name.clone(),
            CampaignField::Status => self.status.to_string(),
            CampaignField::Budget => format!("₹{}", group_thousands(self.budget)),
            CampaignField::Spent => format!("₹{}", group_thousands(self.spent)),
            CampaignField::Impressions => group_thousands(self.impressions),
            CampaignField::Clicks => group_thousands(self.clicks),
            CampaignField::Ctr => format!("{:.2}%", self.ctr),
            CampaignField::Conversions => group_thousands(self.conversions),
            CampaignField::Cpa => format!("₹{:.2}", self.cpa),
            CampaignField::StartDate => self.start_date.clone(),
            CampaignField::EndDate => self.end_date.clone(),
        }
    }
}

impl Record for Campaign {
    type Field = CampaignField;

    fn fields() -> &'static [CampaignField] {
        CAMPAIGN_FIELDS
    }

    fn field(&self, field: CampaignField) -> Option<FieldValue<'_>> {
        let value = match field {
            CampaignField::Id => FieldValue::text(&self.id),
            CampaignField::Name => FieldValue::text(&self.name),
            CampaignField::Status => FieldValue::text(self.status.as_ref()),
            CampaignField::Budget => self.budget.into(),
            CampaignField::Spent => self.spent.into(),
            CampaignField::Impressions => self.impressions.into(),
            CampaignField::Clicks => self.clicks.into(),
            CampaignField::Ctr => self.ctr.into(),
            CampaignField::Conversions => self.conversions.into(),
            CampaignField::Cpa => self.cpa.into(),
            CampaignField::StartDate => FieldValue::text(&self.start_date),
            CampaignField::EndDate => FieldValue::text(&self.end_date),
        };
        Some(value)
    }

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}
