//! View settings and the derivation pipeline.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::entry::DirectoryEntry;
use crate::options::{SortDirection, SortKey, StatusFilter};
use crate::page::Page;

/// Default number of records shown per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// UI-driven list settings.
///
/// The state lives as long as the list page is mounted and resets to its
/// defaults on remount; nothing here is persisted. Mutation happens only
/// through the explicit setters, and [`ViewState::derive`] is a pure
/// function of the state and the record set, so callers re-run it on every
/// change.
///
/// The page size is fixed at construction; there is deliberately no setter
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    search_text: String,
    status_filter: StatusFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page_number: usize,
    page_size: NonZeroUsize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh state with default filters and the given page size.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_text: String::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::Id,
            sort_direction: SortDirection::Ascending,
            page_number: 1,
            page_size,
        }
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current status filter.
    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Column the list is sorted by.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Direction of the active sort.
    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Currently selected page, starting at 1.
    #[must_use]
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Fixed page size.
    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Replace the search text.
    ///
    /// The current page is intentionally left alone: the original UI does
    /// not jump back to page one when the search changes, and that
    /// behaviour is preserved here rather than silently corrected.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Replace the status filter. The current page is kept, as with
    /// [`ViewState::set_search_text`].
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Sort by `key`, flipping the direction when `key` is already the
    /// active column and resetting to ascending otherwise.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Sort by `key` in the given direction.
    ///
    /// Non-interactive callers receive the sort as input rather than as a
    /// sequence of column clicks; this sets both fields at once.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Select a page.
    ///
    /// The value is stored verbatim; pages beyond the filtered set derive
    /// an empty slice rather than an error, and clamping is the caller's
    /// concern. Zero behaves like page one.
    pub fn set_page(&mut self, page: usize) {
        self.page_number = page;
    }

    /// Run the pipeline: search filter, status filter, stable sort,
    /// paginate.
    ///
    /// Pure and synchronous; identical inputs always derive an identical
    /// page. Records whose lower-cased name contains the lower-cased search
    /// text survive the first step (empty search keeps everything), the
    /// status filter is applied second, and the survivors are sorted with a
    /// stable sort whose comparator is reversed for descending order, so
    /// ties keep their input order in both directions. The page slice is
    /// clamped to the filtered set's bounds.
    #[must_use]
    pub fn derive<'a, T: DirectoryEntry>(&self, records: &'a [T]) -> Page<'a, T> {
        let needle = self.search_text.to_lowercase();
        let mut hits: Vec<&'a T> = records
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&needle))
            .filter(|record| self.status_filter.matches(record.active()))
            .collect();

        hits.sort_by(|a, b| {
            let ordering = match self.sort_key {
                SortKey::Id => a.id().cmp(&b.id()),
                SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            };
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let total_filtered = hits.len();
        let page_size = self.page_size.get();
        let total_pages = total_filtered.div_ceil(page_size);
        let start = self.page_number.saturating_sub(1).saturating_mul(page_size);
        let items = hits.into_iter().skip(start).take(page_size).collect();

        Page {
            items,
            total_pages,
            total_filtered,
        }
    }
}
