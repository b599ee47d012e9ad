use crate::domain::ticket::Ticket;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::{fmt, str::FromStr};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// How tickets are ordered inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Highest priority first
    #[default]
    Priority,
    /// Alphabetical by title
    Title,
}

impl FromStr for SortMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortMode::Priority),
            "title" => Ok(SortMode::Title),
            _ => Err(DashboardError::InvalidOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
        }
    }
}

/// Lowercased title with diacritics stripped ("Éclair" -> "eclair")
fn fold_title(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compare titles the way a reader expects them in a list
///
/// Accents and case are ignored first, so "Éclair" sorts among the e's.
/// Titles equal after folding put the unaccented form first, then the
/// lowercase form.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_title(a)
        .cmp(&fold_title(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Stable sort by title
pub fn sort_by_title(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| compare_titles(&a.title, &b.title));
}

/// Stable sort by priority, highest first
///
/// Tickets of equal priority keep their relative order.
pub fn sort_by_priority(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
}
