use super::{SplitError, TimelineError};

/// Top-level error type for the asof workspace.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum AsofError {
    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("split error: {0}")]
    Split(#[from] SplitError),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type AsofResult<T> = Result<T, AsofError>;
