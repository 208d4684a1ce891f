//! Row models and DTOs.

pub mod completion;
pub mod model;
pub mod pipeline;
