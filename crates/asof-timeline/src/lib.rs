//! # asof-timeline
//!
//! Point-in-time reconstruction over an append-only interval log:
//! the interval store, the as-of resolver with its gap-tolerance policy,
//! trailing-window transition counts, leakage-checked snapshot building,
//! and the data-driven tier cascade evaluated over finished snapshots.
//!
//! Everything here is a pure computation over immutable inputs. The store
//! is built once per run and read-only thereafter; snapshots are derived
//! values, recomputed rather than patched.

pub mod engine;
pub mod resolve;
pub mod snapshot;
pub mod store;
pub mod tiers;
pub mod validate;
pub mod window;

pub use engine::TimelineEngine;
pub use store::IntervalStore;
