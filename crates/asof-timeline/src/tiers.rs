//! Tier rules — business scoring bands as data, not branches.
//!
//! The tier cascade is revised far more often than the reconstruction
//! logic, so it ships as a deserializable, priority-ordered rule list
//! evaluated against finished snapshots. First matching rule wins.
//! Incomplete snapshots never receive a tier: "no data" must stay
//! distinct from any band, including the neutral one.

use serde::{Deserialize, Serialize};

use asof_core::models::Snapshot;

/// One predicate+label rule over a snapshot's window aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRule {
    /// Tier label assigned on match (e.g. `"heavy_bleeding"`).
    pub tier: String,

    /// Higher priority is evaluated first.
    #[serde(default)]
    pub priority: i32,

    /// Name of the window aggregate the net-change bounds apply to.
    pub window: String,

    /// Inclusive lower bound on net change (arrivals − departures).
    #[serde(default)]
    pub min_net_change: Option<i64>,

    /// Inclusive upper bound on net change.
    #[serde(default)]
    pub max_net_change: Option<i64>,

    /// When set, the snapshot's resolution must be `Active` (a gapped
    /// last-known record does not qualify).
    #[serde(default)]
    pub require_active: bool,
}

impl TierRule {
    fn matches(&self, snapshot: &Snapshot) -> bool {
        if self.require_active && !snapshot.resolution.is_active() {
            return false;
        }
        let Some(aggregate) = snapshot.aggregate(&self.window) else {
            return false;
        };
        let net = aggregate.counts.net_change();
        self.min_net_change.map_or(true, |min| net >= min)
            && self.max_net_change.map_or(true, |max| net <= max)
    }
}

/// A priority-ordered tier cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierBook {
    rules: Vec<TierRule>,
}

impl TierBook {
    /// Build a cascade from rules, sorted by descending priority.
    pub fn from_rules(mut rules: Vec<TierRule>) -> Self {
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules }
    }

    /// Load a cascade from a JSON rule list.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let rules: Vec<TierRule> = serde_json::from_str(json)?;
        Ok(Self::from_rules(rules))
    }

    /// The firm-stability bands the source system settled on: net roster
    /// change over the trailing year, from heavy bleeding to growing.
    pub fn firm_stability(window: &str) -> Self {
        let band = |tier: &str, priority, min, max| TierRule {
            tier: tier.to_string(),
            priority,
            window: window.to_string(),
            min_net_change: min,
            max_net_change: max,
            require_active: false,
        };
        Self::from_rules(vec![
            band("heavy_bleeding", 40, None, Some(-10)),
            band("light_bleeding", 30, Some(-9), Some(-1)),
            band("stable", 20, Some(0), Some(0)),
            band("growing", 10, Some(1), None),
        ])
    }

    /// Evaluate the cascade. `None` for incomplete snapshots or when no
    /// rule matches.
    pub fn evaluate(&self, snapshot: &Snapshot) -> Option<&str> {
        if !snapshot.is_complete() {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(snapshot))
            .map(|rule| rule.tier.as_str())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asof_core::models::{
        Completeness, Interval, IntervalPayload, Resolution, TransitionCounts,
        WindowAggregate,
    };
    use chrono::NaiveDate;

    fn snapshot_with_net(net: i64) -> Snapshot {
        let as_of: NaiveDate = "2024-06-01".parse().unwrap();
        let interval = Interval {
            entity_id: "A1".to_string(),
            start_date: "2024-01-01".parse().unwrap(),
            end_date: None,
            counterparty_id: Some("F1".to_string()),
            payload: IntervalPayload::Employment {
                title: None,
                branch_state: None,
            },
        };
        let (arrivals, departures) = if net >= 0 {
            (net as u32, 0)
        } else {
            (0, (-net) as u32)
        };
        Snapshot::new(
            "A1",
            as_of,
            Resolution::Active { interval },
            Completeness::Complete,
            vec![WindowAggregate {
                name: "roster_12m".to_string(),
                counterparty_id: "F1".to_string(),
                window_days: 365,
                window_end: as_of,
                counts: TransitionCounts {
                    arrivals,
                    departures,
                },
            }],
        )
    }

    #[test]
    fn stability_bands_cover_the_number_line() {
        let book = TierBook::firm_stability("roster_12m");
        assert_eq!(book.evaluate(&snapshot_with_net(-25)), Some("heavy_bleeding"));
        assert_eq!(book.evaluate(&snapshot_with_net(-10)), Some("heavy_bleeding"));
        assert_eq!(book.evaluate(&snapshot_with_net(-3)), Some("light_bleeding"));
        assert_eq!(book.evaluate(&snapshot_with_net(0)), Some("stable"));
        assert_eq!(book.evaluate(&snapshot_with_net(12)), Some("growing"));
    }

    #[test]
    fn incomplete_snapshot_gets_no_tier() {
        let book = TierBook::firm_stability("roster_12m");
        let snap = Snapshot::new(
            "A1",
            "2024-06-01".parse::<NaiveDate>().unwrap(),
            Resolution::Unknown,
            Completeness::Incomplete,
            vec![],
        );
        assert_eq!(book.evaluate(&snap), None);
    }

    #[test]
    fn rules_round_trip_through_json() {
        let json = r#"[
            {"tier": "hot", "priority": 5, "window": "roster_12m", "max_net_change": -20},
            {"tier": "cold", "window": "roster_12m"}
        ]"#;
        let book = TierBook::from_json(json).unwrap();
        assert_eq!(book.rule_count(), 2);
        assert_eq!(book.evaluate(&snapshot_with_net(-30)), Some("hot"));
        assert_eq!(book.evaluate(&snapshot_with_net(4)), Some("cold"));
    }
}
