//! Snapshot construction: one denormalized record per (entity, as_of).

pub mod batch;
pub mod build;

pub use batch::{build_batch, BatchResult};
pub use build::build;
