//! State for one filterable, paginated, sortable list page.
//!
//! The page's query key is derived from everything that shapes the request:
//! filters, cursor, page size, sort. Any change yields a new key, so a
//! response to an older parameter set lands on its own key and never on the
//! one currently shown.

use serde::Serialize;

use crate::pagination::Pagination;
use crate::query::{Collection, QueryCache, QueryKey, QueryStatus};
use crate::sort::SortState;

#[derive(Debug, Clone)]
pub struct PageState<F, S> {
    collection: Collection,
    filters: F,
    pagination: Pagination,
    sort: SortState<S>,
    expanded: Option<i64>,
}

impl<F, S> PageState<F, S>
where
    F: Serialize + PartialEq + Clone,
    S: Serialize + Copy + PartialEq,
{
    #[must_use]
    pub fn new(collection: Collection, filters: F, per_page: u32, sort_field: S) -> Self {
        Self {
            collection,
            filters,
            pagination: Pagination::new(per_page),
            sort: SortState::new(sort_field),
            expanded: None,
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &F {
        &self.filters
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub const fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    #[must_use]
    pub const fn sort(&self) -> &SortState<S> {
        &self.sort
    }

    #[must_use]
    pub const fn expanded(&self) -> Option<i64> {
        self.expanded
    }

    /// Replace the filters. A real change sends the cursor back to page 1 and
    /// collapses the expanded row. Returns whether anything changed.
    pub fn set_filters(&mut self, filters: F) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.pagination.reset();
        self.expanded = None;
        true
    }

    /// Edit the filters in place; see [`Self::set_filters`].
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut F)) -> bool {
        let mut next = self.filters.clone();
        edit(&mut next);
        self.set_filters(next)
    }

    /// Select a sort column. Resets the cursor like a filter change.
    pub fn select_sort(&mut self, field: S) {
        self.sort.select(field);
        self.pagination.reset();
    }

    /// Expand row `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Feed back the row count from a fetched page.
    pub fn apply_total(&mut self, total: u64) {
        self.pagination.set_total(total);
    }

    /// Cache key for the list request this state describes.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        self.query_key_for(self.pagination.page())
    }

    /// Cache key for `page` under the current filters and sort, for requests
    /// issued before the row count is known.
    #[must_use]
    pub fn query_key_for(&self, page: u32) -> QueryKey {
        QueryKey::new(self.collection)
            .with("list")
            .with(json_segment(&self.filters))
            .with(page.to_string())
            .with(self.pagination.per_page().to_string())
            .with(json_segment(&self.sort.field()))
            .with(self.sort.order().as_str())
    }

    /// Where this page's current request stands in `cache`.
    #[must_use]
    pub fn status(&self, cache: &QueryCache) -> QueryStatus {
        cache.status(&self.query_key())
    }
}

fn json_segment<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
