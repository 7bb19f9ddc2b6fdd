//! Record predicates and the textual filter language.

use luminous_core::{Campaign, CampaignStatus, Record};
use luminous_error::{TableError, TableErrorKind};
use std::str::FromStr;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The active predicate of a table view.
pub enum RecordFilter<T> {
    /// Every record passes
    AcceptAll,
    /// Records pass when the function returns `true`
    Predicate(Predicate<T>),
}

impl<T> RecordFilter<T> {
    /// A filter that accepts every record.
    pub fn accept_all() -> Self {
        RecordFilter::AcceptAll
    }

    /// Wrap a predicate function.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        RecordFilter::Predicate(Arc::new(predicate))
    }

    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &T) -> bool {
        match self {
            RecordFilter::AcceptAll => true,
            RecordFilter::Predicate(predicate) => predicate(record),
        }
    }

    /// Whether this filter accepts everything without inspecting records.
    pub fn is_accept_all(&self) -> bool {
        matches!(self, RecordFilter::AcceptAll)
    }
}

impl<T: 'static> RecordFilter<T> {
    /// Records must pass both filters.
    pub fn and(self, other: RecordFilter<T>) -> Self {
        match (self, other) {
            (RecordFilter::AcceptAll, other) | (other, RecordFilter::AcceptAll) => other,
            (RecordFilter::Predicate(a), RecordFilter::Predicate(b)) => {
                RecordFilter::from_fn(move |record| a(record) && b(record))
            }
        }
    }
}

impl<T> Clone for RecordFilter<T> {
    fn clone(&self) -> Self {
        match self {
            RecordFilter::AcceptAll => RecordFilter::AcceptAll,
            RecordFilter::Predicate(predicate) => RecordFilter::Predicate(Arc::clone(predicate)),
        }
    }
}

impl<T> Default for RecordFilter<T> {
    fn default() -> Self {
        RecordFilter::AcceptAll
    }
}

impl<T> std::fmt::Debug for RecordFilter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFilter::AcceptAll => write!(f, "RecordFilter::AcceptAll"),
            RecordFilter::Predicate(_) => write!(f, "RecordFilter::Predicate(..)"),
        }
    }
}

/// One condition of a [`FilterExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause<F> {
    /// `field=value`: case-insensitive equality
    Equals {
        /// Column to compare
        field: F,
        /// Expected value
        value: String,
    },
    /// `field~text`: case-insensitive substring
    Contains {
        /// Column to search
        field: F,
        /// Lower-cased needle
        needle: String,
    },
    /// bare text: substring of the record's search text
    Search(String),
}

/// A parsed textual filter such as `status=Active & name~summer`.
///
/// Grammar: clauses separated by `&`; each clause is `field=value`,
/// `field~text`, or bare search text. An empty expression or `*` accepts
/// every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr<F> {
    clauses: Vec<FilterClause<F>>,
}

impl<F> FilterExpr<F>
where
    F: Copy + FromStr + Send + Sync + 'static,
{
    /// Parse a filter expression.
    ///
    /// # Errors
    ///
    /// Returns [`TableErrorKind::UnknownField`] when a clause names a column
    /// that does not exist and [`TableErrorKind::InvalidFilter`] when a clause
    /// is missing its field name.
    pub fn parse(input: &str) -> Result<Self, TableError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(Self {
                clauses: Vec::new(),
            });
        }

        let mut clauses = Vec::new();
        for raw in trimmed.split('&') {
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(TableError::new(TableErrorKind::InvalidFilter(
                    input.to_string(),
                )));
            }
            clauses.push(Self::parse_clause(raw, input)?);
        }
        Ok(Self { clauses })
    }

    fn parse_clause(raw: &str, input: &str) -> Result<FilterClause<F>, TableError> {
        let Some(split_at) = raw.find(['=', '~']) else {
            return Ok(FilterClause::Search(raw.to_lowercase()));
        };
        let (name, rest) = raw.split_at(split_at);
        let name = name.trim();
        if name.is_empty() {
            return Err(TableError::new(TableErrorKind::InvalidFilter(
                input.to_string(),
            )));
        }
        let field = F::from_str(name)
            .map_err(|_| TableError::new(TableErrorKind::UnknownField(name.to_string())))?;
        let operand = rest[1..].trim();
        if rest.starts_with('=') {
            Ok(FilterClause::Equals {
                field,
                value: operand.to_string(),
            })
        } else {
            Ok(FilterClause::Contains {
                field,
                needle: operand.to_lowercase(),
            })
        }
    }

    /// Parsed clauses.
    pub fn clauses(&self) -> &[FilterClause<F>] {
        &self.clauses
    }

    /// Build the predicate this expression describes.
    pub fn to_filter<R>(&self) -> RecordFilter<R>
    where
        R: Record<Field = F> + 'static,
    {
        if self.clauses.is_empty() {
            return RecordFilter::accept_all();
        }
        let clauses = self.clauses.clone();
        RecordFilter::from_fn(move |record: &R| {
            clauses.iter().all(|clause| clause_matches(clause, record))
        })
    }
}

fn clause_matches<R: Record>(clause: &FilterClause<R::Field>, record: &R) -> bool {
    match clause {
        FilterClause::Equals { field, value } => record
            .field(*field)
            .is_some_and(|actual| actual.as_text().eq_ignore_ascii_case(value)),
        FilterClause::Contains { field, needle } => record
            .field(*field)
            .is_some_and(|actual| actual.as_text().to_lowercase().contains(needle.as_str())),
        FilterClause::Search(needle) => record.search_text().to_lowercase().contains(needle.as_str()),
    }
}

/// The campaigns page predicate.
///
/// A campaign passes when its name contains the trimmed search term
/// (case-insensitive) and its status equals `status`, or any status when
/// `status` is `None`.
pub fn campaign_filter(search: &str, status: Option<CampaignStatus>) -> RecordFilter<Campaign> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() && status.is_none() {
        return RecordFilter::accept_all();
    }
    RecordFilter::from_fn(move |campaign: &Campaign| {
        let matches_name = campaign.name().to_lowercase().contains(&needle);
        let matches_status = status.is_none_or(|wanted| *campaign.status() == wanted);
        matches_name && matches_status
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use luminous_core::{CampaignField, mock};

    #[test]
    fn test_and_short_circuits_accept_all() {
        let filter: RecordFilter<u32> = RecordFilter::accept_all().and(RecordFilter::accept_all());
        assert!(filter.is_accept_all());

        let even = RecordFilter::from_fn(|n: &u32| n % 2 == 0);
        let small = RecordFilter::from_fn(|n: &u32| *n < 10);
        let both = even.and(small);
        assert!(both.matches(&4));
        assert!(!both.matches(&5));
        assert!(!both.matches(&12));
    }

    #[test]
    fn test_parse_equals_and_contains() {
        let expr = FilterExpr::<CampaignField>::parse("status=Active & name~LAUNCH").unwrap();
        assert_eq!(
            expr.clauses(),
            &[
                FilterClause::Equals {
                    field: CampaignField::Status,
                    value: "Active".to_string()
                },
                FilterClause::Contains {
                    field: CampaignField::Name,
                    needle: "launch".to_string()
                },
            ]
        );

        let filter: RecordFilter<Campaign> = expr.to_filter();
        let names: Vec<_> = mock::campaigns()
            .into_iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.name().clone())
            .collect();
        assert_eq!(names, vec!["Tech Product Launch".to_string()]);
    }

    #[test]
    fn test_parse_wildcard_and_empty() {
        assert!(FilterExpr::<CampaignField>::parse("*").unwrap().clauses().is_empty());
        assert!(FilterExpr::<CampaignField>::parse("   ").unwrap().clauses().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        let err = FilterExpr::<CampaignField>::parse("colour=red").unwrap_err();
        assert_eq!(err.kind(), &TableErrorKind::UnknownField("colour".to_string()));

        let err = FilterExpr::<CampaignField>::parse("=red").unwrap_err();
        assert!(matches!(err.kind(), TableErrorKind::InvalidFilter(_)));

        let err = FilterExpr::<CampaignField>::parse("status=Active & ").unwrap_err();
        assert!(matches!(err.kind(), TableErrorKind::InvalidFilter(_)));
    }

    #[test]
    fn test_bare_text_searches_name() {
        let filter: RecordFilter<Campaign> = FilterExpr::<CampaignField>::parse("fashion").unwrap().to_filter();
        let hits = mock::campaigns().iter().filter(|c| filter.matches(c)).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_campaign_filter() {
        let campaigns = mock::campaigns();
        let active = campaign_filter("", Some(CampaignStatus::Active));
        assert_eq!(campaigns.iter().filter(|c| active.matches(c)).count(), 5);

        let searched = campaign_filter("  SALE ", None);
        assert_eq!(campaigns.iter().filter(|c| searched.matches(c)).count(), 1);

        let none = campaign_filter("sale", Some(CampaignStatus::Draft));
        assert_eq!(campaigns.iter().filter(|c| none.matches(c)).count(), 0);

        assert!(campaign_filter(" ", None).is_accept_all());
    }
}
