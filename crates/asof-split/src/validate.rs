//! Split-boundary leakage checks.

use asof_core::config::SplitConfig;
use asof_core::errors::SplitError;
use asof_core::models::{SplitBoundary, SplitFinding};

/// Validate a split boundary against the configured gap policy.
///
/// Hard failures (always fatal):
/// - periods out of order within themselves;
/// - a negative gap — test beginning before or on training's end means
///   the partitions overlap in time.
///
/// A gap below `minimum_gap_days` is flagged, not blocked: it comes back
/// as a warning finding unless the caller sets `strict_gap`, in which
/// case it escalates to `InsufficientSeparation`.
pub fn check_split(config: &SplitConfig) -> Result<Vec<SplitFinding>, SplitError> {
    let boundary = &config.boundary;
    check_ordering(boundary)?;

    let gap_days = boundary.gap_days();
    if gap_days < 0 {
        return Err(SplitError::BoundaryLeakage { gap_days });
    }

    let mut findings = Vec::new();
    if gap_days < i64::from(config.minimum_gap_days) {
        if config.strict_gap {
            return Err(SplitError::InsufficientSeparation {
                actual: gap_days,
                required: config.minimum_gap_days,
            });
        }
        findings.push(SplitFinding::warning(
            "train_test_gap",
            format!(
                "gap of {gap_days} day(s) is below the configured minimum of {}",
                config.minimum_gap_days
            ),
        ));
    } else {
        findings.push(SplitFinding::info(
            "train_test_gap",
            format!("gap of {gap_days} day(s) meets the configured minimum"),
        ));
    }

    Ok(findings)
}

fn check_ordering(boundary: &SplitBoundary) -> Result<(), SplitError> {
    if boundary.train_start > boundary.train_end {
        return Err(SplitError::InvalidBoundary {
            detail: format!(
                "train_start {} is after train_end {}",
                boundary.train_start, boundary.train_end
            ),
        });
    }
    if boundary.test_start > boundary.test_end {
        return Err(SplitError::InvalidBoundary {
            detail: format!(
                "test_start {} is after test_end {}",
                boundary.test_start, boundary.test_end
            ),
        });
    }
    Ok(())
}
