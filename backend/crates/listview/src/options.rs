//! Enumerated view settings and their textual forms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failure raised when parsing a view setting from text.
///
/// Transport layers (query parameters, CLI flags) parse user-supplied
/// strings into the enums below; this error names the setting and echoes the
/// rejected value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {setting} value: {value}")]
pub struct ParseFilterError {
    /// The setting being parsed, e.g. `"status"`.
    pub setting: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseFilterError {
    fn new(setting: &'static str, value: &str) -> Self {
        Self {
            setting,
            value: value.to_owned(),
        }
    }
}

/// Three-valued activity filter applied after the search filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Keep every record regardless of its active flag.
    #[default]
    All,
    /// Keep only records whose active flag is set.
    Active,
    /// Keep only records whose active flag is cleared.
    Inactive,
}

impl StatusFilter {
    /// Whether a record with the given active flag passes this filter.
    #[must_use]
    pub const fn matches(self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseFilterError::new("status", other)),
        }
    }
}

/// Column the list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric order on the record identifier.
    #[default]
    Id,
    /// Case-insensitive lexicographic order on the display name.
    Name,
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            other => Err(ParseFilterError::new("sort", other)),
        }
    }
}

/// Direction applied to the active sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ParseFilterError::new("order", other)),
        }
    }
}
