pub mod interval;
pub mod resolution;
pub mod snapshot;
pub mod split;

pub use interval::{
    Entity, EntityKind, Interval, IntervalFact, IntervalKind, IntervalPayload,
};
pub use resolution::{GapPolicy, QueryPoint, Resolution};
pub use snapshot::{Completeness, Snapshot, TransitionCounts, WindowAggregate, WindowSpec};
pub use split::{
    ExclusionReason, LabeledRecord, SplitBoundary, SplitFinding, SplitInput, SplitLabel,
    SplitReport, SplitSeverity, SplitVolume,
};
