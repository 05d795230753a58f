// src/metrics.rs - Pool metric vocabulary and extracted records

use crate::error::ExtractError;
use std::fmt;

/// One of the nine statistics columns a pool table can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Active,
    Pending,
    Backpressure,
    Delayed,
    Shared,
    Stolen,
    Completed,
    Blocked,
    AllTimeBlocked,
}

/// Vocabulary table: (metric, name accepted on the command line, row-mode column name)
pub const METRICS: [(Metric, &str, &str); 9] = [
    (Metric::Active, "Active", "active"),
    (Metric::Pending, "Pending", "pending"),
    (Metric::Backpressure, "Backpressure", "backpressure"),
    (Metric::Delayed, "Delayed", "delayed"),
    (Metric::Shared, "Shared", "shared"),
    (Metric::Stolen, "Stolen", "stolen"),
    (Metric::Completed, "Completed", "completed"),
    (Metric::Blocked, "Blocked", "blocked"),
    (Metric::AllTimeBlocked, "All_Time_Blocked", "all_time_blocked"),
];

impl Metric {
    /// All metrics in table order
    pub fn all() -> Vec<Metric> {
        METRICS.iter().map(|(metric, _, _)| *metric).collect()
    }

    /// Name as written in `--metrics` and in pivot column headers
    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    /// Lowercased name used for row-mode column headers
    pub fn column(&self) -> &'static str {
        self.entry().2
    }

    pub fn from_name(name: &str) -> Option<Metric> {
        METRICS
            .iter()
            .find(|(_, display, _)| *display == name)
            .map(|(metric, _, _)| *metric)
    }

    // Variants are declared in table order
    fn entry(&self) -> &'static (Metric, &'static str, &'static str) {
        &METRICS[*self as usize]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a comma-separated metric list, keeping the caller's order.
///
/// Blank entries are dropped; a list with nothing left selects every metric.
/// Names are matched case-sensitively against the vocabulary and every
/// unknown name is reported at once.
pub fn parse_metric_list(spec: &str) -> Result<Vec<Metric>, ExtractError> {
    let requested: Vec<&str> = spec
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if requested.is_empty() {
        return Ok(Metric::all());
    }

    let invalid: Vec<String> = requested
        .iter()
        .filter(|name| Metric::from_name(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !invalid.is_empty() {
        return Err(ExtractError::InvalidMetrics {
            invalid,
            valid: METRICS.iter().map(|(_, name, _)| name.to_string()).collect(),
        });
    }

    Ok(requested
        .iter()
        .filter_map(|name| Metric::from_name(name))
        .collect())
}

/// One pool's statistics at one point in time.
///
/// Values are the raw tokens from the log, never coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    pub pool_name: String,
    pub active: String,
    pub pending: String,
    pub backpressure: String,
    pub delayed: String,
    pub shared: String,
    pub stolen: String,
    pub completed: String,
    pub blocked: String,
    pub all_time_blocked: String,
}

impl MetricRecord {
    pub fn get(&self, metric: Metric) -> &str {
        match metric {
            Metric::Active => &self.active,
            Metric::Pending => &self.pending,
            Metric::Backpressure => &self.backpressure,
            Metric::Delayed => &self.delayed,
            Metric::Shared => &self.shared,
            Metric::Stolen => &self.stolen,
            Metric::Completed => &self.completed,
            Metric::Blocked => &self.blocked,
            Metric::AllTimeBlocked => &self.all_time_blocked,
        }
    }
}

/// A table found in a log: its timestamp and the records listed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub timestamp: String,
    pub records: Vec<MetricRecord>,
}
