//! Pure view-model layer.
//!
//! The dashboard is rendered as a function of `(filters, rows)`: the api
//! layer fetches rows, applies [`CompletionFilters`] here, and maps the
//! survivors to card payloads. Filters always run over already-fetched
//! rows; they are never pushed into the store query.

use serde::Deserialize;

use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Empty-state messages
-------------------------------------------------------------------------- */

/// Shown when the store holds no pipelines at all.
pub const NO_PIPELINES_MESSAGE: &str = "No pipelines found";

/// Shown when a pipeline group holds no completions.
pub const NO_COMPLETIONS_MESSAGE: &str = "No completions found for this pipeline";

/// Shown when the relational variant's entry table is empty.
pub const NO_ENTRIES_MESSAGE: &str = "No entries found";

/// Shown when no fine-tuned models exist yet.
pub const NO_MODELS_MESSAGE: &str = "No models found";

/* --------------------------------------------------------------------------
Filters
-------------------------------------------------------------------------- */

/// Sidebar filter state, applied client-side to fetched rows.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionFilters {
    /// Minimum rating threshold. At the default of 1 the filter is off;
    /// above 1 it also excludes unrated rows.
    pub min_rating: i16,
    /// When false, rows already marked as fine-tuned are hidden.
    pub show_finetuned: bool,
    /// Case-insensitive substring match against the joined tag text.
    pub tag_search: Option<String>,
    /// Inclusive lower bound on the row timestamp.
    pub from: Option<Timestamp>,
    /// Inclusive upper bound on the row timestamp.
    pub to: Option<Timestamp>,
}

impl Default for CompletionFilters {
    fn default() -> Self {
        Self {
            min_rating: 1,
            show_finetuned: true,
            tag_search: None,
            from: None,
            to: None,
        }
    }
}

/// Row shape the filter layer needs. Implemented by both the completion
/// and the aggregated pipeline rows in the db crate.
pub trait CurationRow {
    fn rating(&self) -> Option<i16>;
    fn tags(&self) -> &[String];
    fn finetuned(&self) -> bool;
    fn created_at(&self) -> Option<Timestamp>;
}

/// Whether a single row survives the current filters.
pub fn matches_filters<T: CurationRow>(filters: &CompletionFilters, row: &T) -> bool {
    // A threshold above 1 excludes unrated rows.
    if filters.min_rating > 1 {
        match row.rating() {
            Some(r) if r >= filters.min_rating => {}
            _ => return false,
        }
    }

    if !filters.show_finetuned && row.finetuned() {
        return false;
    }

    if let Some(ref needle) = filters.tag_search {
        if !needle.is_empty() {
            let haystack = row.tags().join(" ").to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
    }

    if filters.from.is_some() || filters.to.is_some() {
        let Some(ts) = row.created_at() else {
            return false;
        };
        if let Some(from) = filters.from {
            if ts < from {
                return false;
            }
        }
        if let Some(to) = filters.to {
            if ts > to {
                return false;
            }
        }
    }

    true
}

/// Apply the filters to a fetched row set, preserving order.
pub fn apply_filters<'a, T: CurationRow>(
    filters: &CompletionFilters,
    rows: &'a [T],
) -> Vec<&'a T> {
    rows.iter()
        .filter(|r| matches_filters(filters, *r))
        .collect()
}

/* --------------------------------------------------------------------------
Display formatting
-------------------------------------------------------------------------- */

/// Star string for a rating, e.g. `Some(3)` renders as `"★★★"`.
/// Unrated rows render as an empty string.
pub fn rating_stars(rating: Option<i16>) -> String {
    let n = rating.unwrap_or(0).max(0) as usize;
    "★".repeat(n)
}

/// First eight characters of a pipeline hash, for compact headers.
pub fn hash_prefix(hash: &str) -> &str {
    let end = hash
        .char_indices()
        .nth(8)
        .map_or(hash.len(), |(i, _)| i);
    &hash[..end]
}

/// Comma-joined tag list, or a placeholder when the set is empty.
pub fn tags_display(tags: &[String]) -> String {
    if tags.is_empty() {
        "No tags".to_string()
    } else {
        tags.join(", ")
    }
}

/// Dollar-formatted cost with four decimal places, e.g. `$0.0023`.
pub fn format_cost(cost: Option<f64>) -> Option<String> {
    cost.map(|c| format!("${c:.4}"))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
