//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod completion_repo;
pub mod model_repo;
pub mod pipeline_repo;

pub use completion_repo::CompletionRepo;
pub use model_repo::ModelRepo;
pub use pipeline_repo::PipelineRepo;
