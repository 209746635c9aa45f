use std::time::{Duration, Instant};

use super::record::ProductRecord;
use super::Catalog;

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on suggestions handed back to the caller.
pub const MAX_RESULTS: usize = 10;

/// Keystroke settle window before a pending query is evaluated.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Case-insensitive substring filter over name and category. Stable:
/// catalog order is preserved and nothing is ranked or fuzzed.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a ProductRecord> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();

    catalog
        .records()
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || (!record.category.is_empty()
                    && record.category.to_lowercase().contains(&needle))
        })
        .take(MAX_RESULTS)
        .collect()
}

/// Last-keystroke-wins debouncer. The caller supplies the clock, so the
/// behaviour is deterministic and the pipeline stays single-threaded: a
/// newer submit supersedes a pending query, and a query is released only
/// once its settle window has elapsed with no newer keystroke.
#[derive(Debug)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        SearchDebouncer::new(DEBOUNCE_WINDOW)
    }
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> SearchDebouncer {
        SearchDebouncer {
            window,
            pending: None,
        }
    }

    /// Record a keystroke, superseding any pending query.
    pub fn submit(&mut self, query: &str, at: Instant) {
        self.pending = Some((query.to_string(), at));
    }

    /// The query to evaluate, once its settle window has elapsed.
    pub fn ready(&mut self, at: Instant) -> Option<String> {
        match &self.pending {
            Some((_, since)) if at.duration_since(*since) >= self.window => {
                self.pending.take().map(|(query, _)| query)
            }
            _ => None,
        }
    }
}
