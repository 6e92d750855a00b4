//! # asof-split
//!
//! Temporal dataset splitting with an enforced quarantine gap.
//!
//! Records are classified once, by timestamp alone, into train / gap /
//! test / excluded. Diagnostics (volumes, positive rates, drift) are
//! surfaced to the operator and never auto-corrected: forcing balance
//! would itself be a leakage or survivorship-bias risk.

pub mod classify;
pub mod diagnostics;
pub mod validate;

pub use classify::{classify, label_for, SplitRun};
pub use validate::check_split;
