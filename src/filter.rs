//! Entry Filtering
//!
//! Sidebar selectors and the display subsequence they produce.

use std::fmt;
use std::str::FromStr;

use crate::models::Entry;

/// Which slice of the vault the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    Favorites,
    Category(u32),
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Favorites => entry.is_favorite,
            EntryFilter::Category(id) => entry.category_id == Some(*id),
        }
    }

    pub fn references_category(&self, category_id: u32) -> bool {
        matches!(self, EntryFilter::Category(id) if *id == category_id)
    }

    /// A deleted category can no longer be selected; fall back to `all`.
    pub fn forget_category(&mut self, category_id: u32) {
        if self.references_category(category_id) {
            *self = EntryFilter::All;
        }
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFilter::All => f.write_str("all"),
            EntryFilter::Favorites => f.write_str("favorites"),
            EntryFilter::Category(id) => write!(f, "category:{id}"),
        }
    }
}

impl FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(EntryFilter::All),
            "favorites" => Ok(EntryFilter::Favorites),
            other => other
                .strip_prefix("category:")
                .and_then(|id| id.parse().ok())
                .map(EntryFilter::Category)
                .ok_or_else(|| format!("unknown filter selector: {other}")),
        }
    }
}

/// Entries matching `filter`, in collection order
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/// Sidebar counters, always taken from the full collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryCounts {
    pub all: usize,
    pub favorites: usize,
}

impl EntryCounts {
    pub fn of(entries: &[Entry]) -> Self {
        Self {
            all: entries.len(),
            favorites: entries.iter().filter(|e| e.is_favorite).count(),
        }
    }
}
