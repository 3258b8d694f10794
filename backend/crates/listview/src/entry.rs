//! Abstraction over the records a directory view can list.

/// Read-only view of a directory record.
///
/// The derivation pipeline only ever inspects the identifier, the display
/// name, and the active flag; everything else on the record passes through
/// untouched.
pub trait DirectoryEntry {
    /// Stable numeric identifier assigned by the record store.
    fn id(&self) -> i64;

    /// Display name matched by the search filter and the name sort.
    fn name(&self) -> &str;

    /// Whether the record is currently active.
    fn active(&self) -> bool;
}

impl<T: DirectoryEntry> DirectoryEntry for &T {
    fn id(&self) -> i64 {
        T::id(self)
    }

    fn name(&self) -> &str {
        T::name(self)
    }

    fn active(&self) -> bool {
        T::active(self)
    }
}
