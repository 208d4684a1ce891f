//! Distil dashboard API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! the pipeline cache) so integration tests and the binary entrypoint
//! can both access them.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
