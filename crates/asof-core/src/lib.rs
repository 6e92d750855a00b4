//! # asof-core
//!
//! Shared types for the asof workspace: interval and snapshot models,
//! split boundary types, the error taxonomy, and subsystem configuration.
//!
//! Everything here is a plain value. Core logic lives in `asof-timeline`
//! and `asof-split`; this crate defines what flows between them.

pub mod config;
pub mod errors;
pub mod models;

pub use config::AsofConfig;
pub use errors::{AsofError, AsofResult};
