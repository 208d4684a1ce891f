//! Shared query parameter types for API handlers.

use serde::Deserialize;

use distil_core::types::Timestamp;
use distil_core::view::CompletionFilters;

/// Sidebar filter parameters accepted by the listing and analytics
/// endpoints. All optional; defaults match an unfiltered sidebar.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub min_rating: Option<i16>,
    pub show_finetuned: Option<bool>,
    pub tag_search: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

impl FilterParams {
    /// Resolve the optional parameters against the filter defaults.
    pub fn into_filters(self) -> CompletionFilters {
        let defaults = CompletionFilters::default();
        CompletionFilters {
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
            show_finetuned: self.show_finetuned.unwrap_or(defaults.show_finetuned),
            tag_search: self.tag_search.filter(|s| !s.is_empty()),
            from: self.from,
            to: self.to,
        }
    }
}

/// Parameters for the per-pipeline completion listing. The namespace is
/// required because a pipeline hash is only unique within its namespace.
#[derive(Debug, Deserialize)]
pub struct CompletionListParams {
    pub namespace: String,
    pub min_rating: Option<i16>,
    pub show_finetuned: Option<bool>,
    pub tag_search: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

impl CompletionListParams {
    pub fn into_filters(self) -> (String, CompletionFilters) {
        let filters = FilterParams {
            min_rating: self.min_rating,
            show_finetuned: self.show_finetuned,
            tag_search: self.tag_search,
            from: self.from,
            to: self.to,
        }
        .into_filters();
        (self.namespace, filters)
    }
}
