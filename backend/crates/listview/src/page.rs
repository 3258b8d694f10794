//! Derived page slice and pagination metadata.

/// Output of one derivation pass: the visible slice plus the counts the
/// pagination controls need.
///
/// Items borrow from the record set handed to [`crate::ViewState::derive`];
/// the page is a view, not a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on the requested page, already filtered and sorted.
    pub items: Vec<&'a T>,
    /// Number of pages the filtered set spans; zero when nothing matched.
    pub total_pages: usize,
    /// Size of the filtered set before pagination.
    pub total_filtered: usize,
}

impl<T> Page<'_, T> {
    /// Page count for display purposes.
    ///
    /// An empty result has zero real pages but controls still render
    /// "page 1 of 1", so this never returns less than one.
    #[must_use]
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Whether the requested page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
