//! Run statistics and reports.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counters collected over one top-level sort or check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Shuffles performed at every recursion depth.
    pub shuffles: u64,
    /// Oracle invocations at every recursion depth.
    pub oracle_checks: u64,
    /// Deepest Driver recursion reached (0 = the caller's sequence).
    pub max_depth: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SortStats {
    /// Elapsed time in fractional seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A finished sort: what went in, what came out, and what it cost.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport<T> {
    /// When the sort started.
    pub started_at: DateTime<Utc>,
    /// The sequence as supplied.
    pub input: Vec<T>,
    /// The sorted sequence.
    pub output: Vec<T>,
    /// Run counters.
    pub stats: SortStats,
}

impl<T> SortReport<T> {
    /// Create a report.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, input: Vec<T>, output: Vec<T>, stats: SortStats) -> Self {
        Self {
            started_at,
            input,
            output,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_secs() {
        let stats = SortStats {
            elapsed: Duration::from_millis(1500),
            ..SortStats::default()
        };
        assert!((stats.elapsed_secs() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_serializes_fields() {
        let stats = SortStats {
            shuffles: 4,
            oracle_checks: 9,
            max_depth: 1,
            elapsed: Duration::from_micros(12),
        };
        let report = SortReport::new(Utc::now(), vec![2, 1], vec![1, 2], stats);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["input"], serde_json::json!([2, 1]));
        assert_eq!(value["output"], serde_json::json!([1, 2]));
        assert_eq!(value["stats"]["shuffles"], 4);
        assert_eq!(value["stats"]["oracle_checks"], 9);
        assert!(value["started_at"].is_string());
    }
}
