//! Client-side list derivation for directory views.
//!
//! The directory UI fetches the full record set once and shapes it locally:
//! a case-insensitive name search, a three-valued status filter, a stable
//! sort on id or name, and fixed-size pagination. [`ViewState`] owns the
//! UI-driven settings and [`ViewState::derive`] runs the pipeline as a pure
//! function of the settings and the records, so every state change simply
//! re-derives the visible page.
//!
//! Records stay opaque: anything implementing [`DirectoryEntry`] can be
//! listed, which keeps this crate free of the backend's domain types.
//!
//! # Examples
//! ```
//! use listview::{DirectoryEntry, StatusFilter, ViewState};
//!
//! struct Row {
//!     id: i64,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl DirectoryEntry for Row {
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!     fn active(&self) -> bool {
//!         self.active
//!     }
//! }
//!
//! let rows = vec![
//!     Row { id: 1, name: "alice".into(), active: true },
//!     Row { id: 2, name: "Bob".into(), active: false },
//! ];
//!
//! let mut view = ViewState::default();
//! view.set_status_filter(StatusFilter::Active);
//! let page = view.derive(&rows);
//! assert_eq!(page.total_filtered, 1);
//! assert_eq!(page.items[0].id(), 1);
//! ```

mod entry;
mod options;
mod page;
mod state;

pub use entry::DirectoryEntry;
pub use options::{ParseFilterError, SortDirection, SortKey, StatusFilter};
pub use page::Page;
pub use state::{DEFAULT_PAGE_SIZE, ViewState};
