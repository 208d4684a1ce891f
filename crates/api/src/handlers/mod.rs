//! HTTP handlers, one module per dashboard area.

pub mod analytics;
pub mod completions;
pub mod entries;
pub mod marketplace;
pub mod models;
pub mod pipelines;
