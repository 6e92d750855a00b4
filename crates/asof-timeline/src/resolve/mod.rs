//! Point-in-time resolution.

pub mod as_of;

pub use as_of::resolve;
