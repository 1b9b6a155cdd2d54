//! Linear, case-insensitive substring search over the whole catalog.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::model::catalog::{Catalog, Prompt};

/// One match with its provenance. Borrowed from the catalog; recomputed per
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub category: &'a str,
    pub subcategory: &'a str,
    pub prompt: &'a Prompt,
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    min_query_chars: usize,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>, min_query_chars: usize) -> Self {
        Self {
            catalog,
            min_query_chars,
        }
    }

    /// Whether `query` is long enough to search. Shorter queries mean "no
    /// search": callers show the category cards instead.
    pub fn is_active_query(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_chars
    }

    /// All prompts whose title or content contains the trimmed, lowercased
    /// query, in catalog traversal order.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        let needle = query.trim().to_lowercase();

        let results: Vec<SearchResult<'_>> = self
            .catalog
            .flatten()
            .filter(|entry| {
                entry.prompt.title.to_lowercase().contains(&needle)
                    || entry.prompt.content.to_lowercase().contains(&needle)
            })
            .map(|entry| SearchResult {
                category: entry.category,
                subcategory: entry.sub_category,
                prompt: entry.prompt,
            })
            .collect();

        debug!(
            marker = "SEARCH_COMPLETED",
            operation_type = "search",
            matches = results.len(),
            "Search for {:?} matched {} prompt(s)",
            needle,
            results.len()
        );

        results
    }
}
