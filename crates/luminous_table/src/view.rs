//! The table view engine.

use crate::{FilterExpr, RecordFilter, RecordStore, TableOptions};
use luminous_core::{Record, SortDirection};
use luminous_error::{TableError, TableErrorKind};
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

/// Sort, filter and pagination state over a record store.
///
/// Only the store, the predicate, the sort column/direction and the page
/// number are stored. Filtered, sorted and paginated results are recomputed
/// from scratch on every read.
///
/// # Examples
///
/// ```
/// use luminous_core::{mock, Campaign, CampaignField};
/// use luminous_table::{TableOptions, TableView};
///
/// let mut view = TableView::new(
///     mock::campaigns(),
///     TableOptions::<Campaign>::new().with_page_size(8),
/// )?;
/// view.set_sort(CampaignField::Budget);
/// assert_eq!(view.total_pages(), 2);
/// assert_eq!(view.page_data().len(), 8);
/// # Ok::<(), luminous_error::TableError>(())
/// ```
pub struct TableView<T: Record> {
    store: RecordStore<T>,
    page: usize,
    page_size: usize,
    sort_key: Option<T::Field>,
    sort_direction: SortDirection,
    filter: RecordFilter<T>,
}

impl<T: Record + 'static> TableView<T> {
    /// Build a view over `store`.
    ///
    /// # Errors
    ///
    /// Returns [`TableErrorKind::InvalidPageSize`] when the page size is zero.
    #[instrument(skip_all, fields(page_size = options.page_size))]
    pub fn new(
        store: impl Into<RecordStore<T>>,
        options: TableOptions<T>,
    ) -> Result<Self, TableError> {
        if options.page_size == 0 {
            return Err(TableError::new(TableErrorKind::InvalidPageSize(0)));
        }

        let mut filter = options.filter.unwrap_or_default();
        if let Some(expr) = options.filter_expr.as_deref() {
            filter = filter.and(Self::filter_from_expr(expr));
        }

        let (sort_key, sort_direction) = match options.initial_sort {
            Some(spec) => (Some(*spec.key()), *spec.direction()),
            None => (None, SortDirection::Asc),
        };

        let view = Self {
            store: store.into(),
            page: 1,
            page_size: options.page_size,
            sort_key,
            sort_direction,
            filter,
        };
        debug!(records = view.store.len(), ?sort_key, "Table view created");
        Ok(view)
    }

    /// Build a view with default options.
    pub fn with_defaults(store: impl Into<RecordStore<T>>) -> Self {
        Self {
            store: store.into(),
            page: 1,
            page_size: crate::DEFAULT_PAGE_SIZE,
            sort_key: None,
            sort_direction: SortDirection::Asc,
            filter: RecordFilter::accept_all(),
        }
    }

    fn filter_from_expr(expr: &str) -> RecordFilter<T> {
        match FilterExpr::<T::Field>::parse(expr) {
            Ok(parsed) => parsed.to_filter(),
            Err(e) => {
                warn!(expr, error = %e, "Unusable filter, accepting all records");
                RecordFilter::accept_all()
            }
        }
    }

    /// Sort by `key`.
    ///
    /// Selecting the active column flips the direction; selecting a new
    /// column sorts it ascending. Either way the view returns to page 1.
    #[instrument(skip(self))]
    pub fn set_sort(&mut self, key: T::Field) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.toggle();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
        debug!(direction = %self.sort_direction, "Sort changed");
    }

    /// Sort by a column given by name.
    ///
    /// # Errors
    ///
    /// Returns [`TableErrorKind::UnknownField`] when no column has that name.
    pub fn set_sort_by_name(&mut self, name: &str) -> Result<(), TableError> {
        let key = T::field_named(name)
            .ok_or_else(|| TableError::new(TableErrorKind::UnknownField(name.to_string())))?;
        self.set_sort(key);
        Ok(())
    }

    /// Go back to insertion order.
    pub fn clear_sort(&mut self) {
        self.sort_key = None;
        self.sort_direction = SortDirection::Asc;
        self.page = 1;
    }

    /// Replace the active predicate.
    ///
    /// Unlike [`set_sort`](Self::set_sort) this does not unconditionally
    /// return to page 1: the current page is kept while it still exists and
    /// collapses to page 1 when the new result set no longer reaches it.
    #[instrument(skip_all)]
    pub fn set_filter(&mut self, filter: RecordFilter<T>) {
        self.filter = filter;
        self.collapse_page();
        debug!(page = self.page, "Filter replaced");
    }

    /// Replace the active predicate with a closure.
    pub fn set_filter_fn<F>(&mut self, predicate: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.set_filter(RecordFilter::from_fn(predicate));
    }

    /// Replace the active predicate with a textual filter.
    ///
    /// An expression that fails to parse is not an error: the view falls back
    /// to accepting every record and logs a warning.
    pub fn set_filter_expr(&mut self, expr: &str) {
        let filter = Self::filter_from_expr(expr);
        self.set_filter(filter);
    }

    /// Jump to page `page` (1-based).
    ///
    /// The page is not clamped; a page outside `1..=total_pages` yields an
    /// empty [`page_data`](Self::page_data).
    #[instrument(skip(self))]
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Advance one page, stopping at the last page.
    pub fn next_page(&mut self) {
        let last = self.total_pages();
        self.page = self.page.saturating_add(1).clamp(1, last);
    }

    /// Go back one page, stopping at page 1.
    pub fn prev_page(&mut self) {
        let last = self.total_pages();
        self.page = self.page.saturating_sub(1).clamp(1, last);
    }

    /// Replace the underlying records.
    #[instrument(skip_all)]
    pub fn set_data(&mut self, store: impl Into<RecordStore<T>>) {
        self.store = store.into();
        self.collapse_page();
        debug!(records = self.store.len(), "Records replaced");
    }

    fn collapse_page(&mut self) {
        if self.page > self.total_pages() {
            self.page = 1;
        }
    }

    /// Current page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active sort column, `None` for insertion order.
    pub fn sort_key(&self) -> Option<T::Field> {
        self.sort_key
    }

    /// Active sort direction.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The underlying records.
    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// Records passing the predicate, in insertion order.
    pub fn filtered(&self) -> Vec<&T> {
        self.store
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    /// Filtered records in sort order.
    ///
    /// The sort is stable. Records without a value for the sort column, or
    /// with a NaN number, come after every record that has one, in both
    /// directions.
    pub fn sorted(&self) -> Vec<&T> {
        let mut records = self.filtered();
        if let Some(key) = self.sort_key {
            let direction = self.sort_direction;
            records.sort_by(|a, b| compare_records(*a, *b, key, direction));
        }
        records
    }

    /// Number of records passing the predicate.
    pub fn total(&self) -> usize {
        self.store
            .iter()
            .filter(|record| self.filter.matches(record))
            .count()
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn total_pages(&self) -> usize {
        page_count(self.total(), self.page_size)
    }

    /// Records on the current page.
    pub fn page_data(&self) -> Vec<&T> {
        paginate(self.sorted(), self.page, self.page_size)
    }

    /// Compute every derived value once.
    pub fn snapshot(&self) -> TablePage<'_, T> {
        let sorted = self.sorted();
        let total = sorted.len();
        TablePage {
            page_data: paginate(sorted, self.page, self.page_size),
            page: self.page,
            page_size: self.page_size,
            total,
            total_pages: page_count(total, self.page_size),
            sort_key: self.sort_key,
            sort_direction: self.sort_direction,
        }
    }
}

impl<T: Record> std::fmt::Debug for TableView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("records", &self.store.len())
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("sort_key", &self.sort_key)
            .field("sort_direction", &self.sort_direction)
            .field("filter", &self.filter)
            .finish()
    }
}

fn compare_records<T: Record>(
    a: &T,
    b: &T,
    key: T::Field,
    direction: SortDirection,
) -> Ordering {
    let a = a.field(key).filter(|value| !value.is_missing());
    let b = b.field(key).filter(|value| !value.is_missing());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.compare(&b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

fn paginate<'a, T>(records: Vec<&'a T>, page: usize, page_size: usize) -> Vec<&'a T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return Vec::new();
    };
    records.into_iter().skip(start).take(page_size).collect()
}

/// Every derived value of a [`TableView`] computed at one point in time.
#[derive(Debug)]
pub struct TablePage<'a, T: Record> {
    page_data: Vec<&'a T>,
    page: usize,
    page_size: usize,
    total: usize,
    total_pages: usize,
    sort_key: Option<T::Field>,
    sort_direction: SortDirection,
}

impl<'a, T: Record> TablePage<'a, T> {
    /// Records on the page.
    pub fn page_data(&self) -> &[&'a T] {
        &self.page_data
    }

    /// Page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Records passing the predicate.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Active sort column.
    pub fn sort_key(&self) -> Option<T::Field> {
        self.sort_key
    }

    /// Active sort direction.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Whether the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.page_data.is_empty()
    }
}
