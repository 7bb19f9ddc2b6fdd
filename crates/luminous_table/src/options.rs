//! Construction options for table views.

use crate::RecordFilter;
use luminous_core::{Record, SortDirection};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A sort column together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters, derive_new::new)]
pub struct SortSpec<F> {
    /// Column to sort by
    key: F,
    /// Sort direction
    direction: SortDirection,
}

/// Options accepted by [`TableView::new`](crate::TableView::new).
pub struct TableOptions<T: Record> {
    pub(crate) initial_sort: Option<SortSpec<T::Field>>,
    pub(crate) filter: Option<RecordFilter<T>>,
    pub(crate) filter_expr: Option<String>,
    pub(crate) page_size: usize,
}

impl<T: Record> TableOptions<T> {
    /// Options with no sort, no filter and the default page size.
    pub fn new() -> Self {
        Self {
            initial_sort: None,
            filter: None,
            filter_expr: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sort by `key` in `direction` from the start.
    pub fn with_initial_sort(mut self, key: T::Field, direction: SortDirection) -> Self {
        self.initial_sort = Some(SortSpec::new(key, direction));
        self
    }

    /// Initial predicate.
    pub fn with_filter(mut self, filter: RecordFilter<T>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Initial predicate given as a closure.
    pub fn with_filter_fn<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.with_filter(RecordFilter::from_fn(predicate))
    }

    /// Initial predicate given as a [`FilterExpr`](crate::FilterExpr) string.
    ///
    /// An expression that does not parse is replaced by accept-all when the
    /// view is built.
    pub fn with_filter_expr(mut self, expr: impl Into<String>) -> Self {
        self.filter_expr = Some(expr.into());
        self
    }

    /// Records per page; fixed for the lifetime of the view.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<T: Record> Default for TableOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> std::fmt::Debug for TableOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableOptions")
            .field("initial_sort", &self.initial_sort)
            .field("filter", &self.filter)
            .field("filter_expr", &self.filter_expr)
            .field("page_size", &self.page_size)
            .finish()
    }
}
