//! Domain layer for the Distil dashboard.
//!
//! Holds everything that is independent of the store and of HTTP:
//! validation rules for curation actions, the pure view-model layer
//! (filters and display formatting), and the analytics computations
//! that feed the charts.

pub mod analytics;
pub mod curation;
pub mod error;
pub mod types;
pub mod view;
