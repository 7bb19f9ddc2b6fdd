//! Sort direction shared by table views and configuration.

use serde::{Deserialize, Serialize};

/// Direction applied to the active sort column.
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
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[strum(to_string = "asc", serialize = "ascending")]
    #[serde(alias = "ascending")]
    Asc,
    /// Largest first
    #[strum(to_string = "desc", serialize = "descending")]
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow glyph for column headers.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(SortDirection::from_str("descending").ok(), Some(SortDirection::Desc));
        assert_eq!(SortDirection::from_str("asc").ok(), Some(SortDirection::Asc));
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert!(SortDirection::from_str("sideways").is_err());
    }
}
