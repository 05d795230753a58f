// src/row_parser.rs - Classify a table line as a short-form or long-form pool record
use crate::metrics::MetricRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// Pool names may contain single spaces, so columns are separated by wider gaps
static WIDE_GAP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

const MIN_COLUMNS: usize = 6;
const LONG_FORM_COLUMNS: usize = 10;

/// Split a line on runs of two or more whitespace characters
pub fn wide_gap_split(line: &str) -> Vec<&str> {
    WIDE_GAP_REGEX.split(line.trim()).collect()
}

/// Parse one pool statistics line.
///
/// Layouts recognised:
/// - long form (10+ columns): name, active, pending, backpressure, delayed,
///   shared, stolen, completed, blocked, all time blocked
/// - short form (6-9 columns): name, active, pending, completed, blocked,
///   all time blocked; the four missing columns become `"0"`
pub fn parse_pool_line(line: &str) -> Option<MetricRecord> {
    let columns = wide_gap_split(line);
    if columns.len() < MIN_COLUMNS {
        return None;
    }

    let col = |i: usize| columns[i].trim().to_string();

    if columns.len() >= LONG_FORM_COLUMNS {
        Some(MetricRecord {
            pool_name: col(0),
            active: col(1),
            pending: col(2),
            backpressure: col(3),
            delayed: col(4),
            shared: col(5),
            stolen: col(6),
            completed: col(7),
            blocked: col(8),
            all_time_blocked: col(9),
        })
    } else {
        Some(MetricRecord {
            pool_name: col(0),
            active: col(1),
            pending: col(2),
            backpressure: "0".to_string(),
            delayed: "0".to_string(),
            shared: "0".to_string(),
            stolen: "0".to_string(),
            completed: col(3),
            blocked: col(4),
            all_time_blocked: col(5),
        })
    }
}
