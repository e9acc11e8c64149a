//! Per-check violation statistics.

use std::collections::BTreeMap;

use crate::checks::CheckType;

/// Totals for one check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckStats {
    /// Number of events that produced a deviation.
    pub violations: u64,
    /// Sum of all recorded deviations.
    pub total_deviation: f64,
}

/// Cumulative statistics across all players.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    checks: BTreeMap<CheckType, CheckStats>,
}

impl Statistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deviation. Zero, negative and NaN values are not counted.
    pub fn record(&mut self, check: CheckType, deviation: f64) {
        if deviation > 0.0 {
            let stats = self.checks.entry(check).or_default();
            stats.violations += 1;
            stats.total_deviation += deviation;
        }
    }

    /// Totals for `check`.
    #[must_use]
    pub fn get(&self, check: CheckType) -> CheckStats {
        self.checks.get(&check).copied().unwrap_or_default()
    }

    /// Checks with at least one recorded deviation, in check order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckType, CheckStats)> + '_ {
        self.checks.iter().map(|(check, stats)| (*check, *stats))
    }
}
