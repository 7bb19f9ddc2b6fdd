//! Shared fixtures for table view tests.

#![allow(dead_code)]

use luminous_core::{FieldValue, Record};
use std::fmt;
use std::str::FromStr;

/// A record whose score may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub score: Option<i64>,
    pub group: &'static str,
}

impl Row {
    pub fn new(id: u32, score: Option<i64>, group: &'static str) -> Self {
        Self { id, score, group }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Id,
    Score,
    Group,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowField::Id => "id",
            RowField::Score => "score",
            RowField::Group => "group",
        };
        write!(f, "{name}")
    }
}

impl FromStr for RowField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(RowField::Id),
            "score" => Ok(RowField::Score),
            "group" => Ok(RowField::Group),
            other => Err(format!("unknown field {other}")),
        }
    }
}

impl Record for Row {
    type Field = RowField;

    fn fields() -> &'static [RowField] {
        &[RowField::Id, RowField::Score, RowField::Group]
    }

    fn field(&self, field: RowField) -> Option<FieldValue<'_>> {
        match field {
            RowField::Id => Some(FieldValue::Integer(i64::from(self.id))),
            RowField::Score => self.score.map(FieldValue::Integer),
            RowField::Group => Some(FieldValue::text(self.group)),
        }
    }
}

/// `count` rows with sequential ids and scores equal to their id.
pub fn numbered_rows(count: u32) -> Vec<Row> {
    (1..=count)
        .map(|id| Row::new(id, Some(i64::from(id)), "a"))
        .collect()
}

pub fn ids(rows: &[&Row]) -> Vec<u32> {
    rows.iter().map(|row| row.id).collect()
}
