//! Filtering and ordering of the favorites list.
//!
//! Pure views over the store: nothing here mutates. Rows carry their true
//! store index so consumers of a filtered view can act on the underlying
//! record by identity instead of by filtered position.

use crate::core::favorites::FavoriteIdea;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Name-only, case-insensitive match. Leading whitespace in the query is
/// noise from the input surface and is stripped on construction.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub exact: bool,
}

impl SearchQuery {
    pub fn new(text: &str, exact: bool) -> SearchQuery {
        SearchQuery {
            text: text.trim_start().to_string(),
            exact,
        }
    }

    /// An empty query matches everything, even in exact mode.
    pub fn matches(&self, name: Option<&str>) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let name = name.unwrap_or("").to_lowercase();
        let query = self.text.to_lowercase();
        if self.exact {
            name == query
        } else {
            name.contains(&query)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Newest first; records without a timestamp sink to the bottom.
    Default,
    Oldest,
    Az,
    Za,
}

impl SortOption {
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Default => "Newest First",
            SortOption::Oldest => "Oldest First",
            SortOption::Az => "A → Z",
            SortOption::Za => "Z → A",
        }
    }
}

fn folded_name(entry: &FavoriteIdea) -> String {
    entry.name.as_deref().unwrap_or("").to_lowercase()
}

/// Filter, then order. Sorts are stable, so records that compare equal
/// keep their store order. Each row is `(true_index, record)`.
pub fn filter_and_sort<'a>(
    entries: &'a [FavoriteIdea],
    query: &SearchQuery,
    sort: SortOption,
) -> Vec<(usize, &'a FavoriteIdea)> {
    let mut view: Vec<(usize, &FavoriteIdea)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| query.matches(e.name.as_deref()))
        .collect();
    match sort {
        SortOption::Default => view.sort_by_key(|(_, e)| Reverse(e.timestamp.unwrap_or(0))),
        SortOption::Oldest => view.sort_by_key(|(_, e)| e.timestamp.unwrap_or(0)),
        SortOption::Az => view.sort_by_cached_key(|(_, e)| folded_name(e)),
        SortOption::Za => view.sort_by_cached_key(|(_, e)| Reverse(folded_name(e))),
    }
    view
}
