pub mod asof_error;
pub mod split_error;
pub mod timeline_error;

pub use asof_error::{AsofError, AsofResult};
pub use split_error::SplitError;
pub use timeline_error::TimelineError;
