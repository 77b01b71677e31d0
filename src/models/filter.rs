//! User-selected filter and sort state for the project grid.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::project::ProjectCategory;

/// Label of the catch-all option in every filter dropdown.
pub const ALL_LABEL: &str = "All";

/// A filter selection: either everything, or one specific value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// No restriction
    All,
    /// Only items matching this value
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Choice<T> {
    /// Returns true for the catch-all selection.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    /// Returns true if `All` is selected or `pred` accepts the selected value.
    pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => pred(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Project grid ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Category, then name
    #[default]
    Category,
    /// First listed technology, then name
    Technology,
}

impl SortMode {
    /// Both modes in dropdown order.
    pub const ALL: [Self; 2] = [Self::Category, Self::Technology];

    /// Value used in query strings and CLI flags.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Technology => "technology",
        }
    }

    /// Dropdown label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Technology => "Technology",
        }
    }

    /// The other mode; used to cycle the selector in the terminal.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Category => Self::Technology,
            Self::Technology => Self::Category,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "technology" => Ok(Self::Technology),
            _ => Err(format!(
                "unknown sort mode '{s}' (expected 'category' or 'technology')"
            )),
        }
    }
}

/// The category/technology/sort triple chosen by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterState {
    /// Category restriction
    pub category: Choice<ProjectCategory>,
    /// Technology restriction
    pub technology: Choice<String>,
    /// Ordering of the filtered list
    pub sort_by: SortMode,
}

impl FilterState {
    /// Returns a state with both filters at `All` and the given sort mode.
    #[must_use]
    pub fn sorted_by(sort_by: SortMode) -> Self {
        Self {
            sort_by,
            ..Self::default()
        }
    }
}
