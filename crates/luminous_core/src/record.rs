//! Record abstraction shared by the table engine, exporters and renderers.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// A single comparable field value read from a record.
///
/// A record that has no value for a field returns `None` from
/// [`Record::field`]; that absence is what sorts last.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum FieldValue<'a> {
    /// Free text
    #[display("{_0}")]
    Text(Cow<'a, str>),
    /// Whole number
    #[display("{_0}")]
    Integer(i64),
    /// Floating point number
    #[display("{_0}")]
    Number(f64),
    /// Boolean flag
    #[display("{_0}")]
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Integer(_) | FieldValue::Number(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Integers and numbers compare numerically with each other. NaN is
    /// greater than every other number and equal to itself. Values of
    /// unrelated variants are ordered by variant.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.as_ref().cmp(b.as_ref()),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => compare_f64(*a, *b),
            (FieldValue::Integer(a), FieldValue::Number(b)) => compare_f64(*a as f64, *b),
            (FieldValue::Number(a), FieldValue::Integer(b)) => compare_f64(*a, *b as f64),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Whether this value carries no usable data (a NaN number).
    ///
    /// Table views sort such values like absent ones.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Number(n) if n.is_nan())
    }

    /// Case-sensitive textual form, used for equality filters and export.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text.as_ref()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        FieldValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::text(value)
    }
}

/// A row of a tabular collection with named, comparable fields.
pub trait Record {
    /// Column identifier for this record type.
    type Field: Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static;

    /// Every column, in display order.
    fn fields() -> &'static [Self::Field];

    /// Value of a column, or `None` when the record has no value for it.
    fn field(&self, field: Self::Field) -> Option<FieldValue<'_>>;

    /// Text matched by free-text search.
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    /// Resolve a column from its name.
    fn field_named(name: &str) -> Option<Self::Field> {
        Self::Field::from_str(name.trim()).ok()
    }
}
