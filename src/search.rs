//! Search State
//!
//! Server-side search with a generation counter so that only the response
//! to the latest request is ever displayed.

use crate::models::Entry;

/// What the caller has to do after the query text changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Query too short; nothing changes
    Ignore,
    /// Query cleared; reload the full collection
    Reload,
    /// Send the query; apply the response only with this generation
    Query { generation: u64, query: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Text as typed (untrimmed), mirrored into the search box
    pub input: String,
    generation: u64,
    /// Server results overriding the filter pipeline while present
    pub results: Option<Vec<Entry>>,
}

impl SearchState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.results.is_some()
    }

    /// Record new query text and decide what to do with it.
    pub fn begin(&mut self, input: &str, min_chars: usize) -> SearchAction {
        let query = input.trim();
        let length = query.chars().count();

        if length == 0 {
            self.input = input.to_string();
            self.invalidate();
            return SearchAction::Reload;
        }
        if length < min_chars {
            self.input = input.to_string();
            return SearchAction::Ignore;
        }

        self.input = input.to_string();
        self.generation += 1;
        SearchAction::Query {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    /// Apply a response. Returns false when a newer request superseded it.
    pub fn accept(&mut self, generation: u64, results: Vec<Entry>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = Some(results);
        true
    }

    /// Drop the override and make every in-flight response stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.results = None;
    }

    /// Leave search mode entirely, clearing the box as well.
    pub fn clear(&mut self) {
        self.input.clear();
        self.invalidate();
    }
}
