// src/timestamp.rs - Log timestamp extraction and entry boundary detection
use once_cell::sync::Lazy;
use regex::Regex;

// 2025-10-03 10:08:32,368
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}").unwrap());

static ENTRY_START_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

static LEVEL_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(INFO|WARN|ERROR|DEBUG)").unwrap());

/// Return the leftmost `YYYY-MM-DD HH:MM:SS,mmm` token in the line
pub fn extract_timestamp(line: &str) -> Option<&str> {
    TIMESTAMP_REGEX.find(line).map(|m| m.as_str())
}

/// True when a (trimmed) line cannot belong to the current table: it is
/// empty, or it opens a new log entry with a date or a level marker.
pub fn is_entry_boundary(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || ENTRY_START_REGEX.is_match(line) || LEVEL_START_REGEX.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_timestamp_from_status_logger_line() {
        let line = "INFO  [ScheduledTasks:1] 2025-10-03 10:08:32,368 StatusLogger.java:65 - Pool Name";
        assert_eq!(extract_timestamp(line), Some("2025-10-03 10:08:32,368"));
    }

    #[test]
    fn test_extract_timestamp_leftmost_wins() {
        let line = "2024-01-01 00:00:00,001 then 2024-01-02 00:00:00,002";
        assert_eq!(extract_timestamp(line), Some("2024-01-01 00:00:00,001"));
    }

    #[test]
    fn test_extract_timestamp_requires_milliseconds() {
        assert_eq!(extract_timestamp("2025-10-03 10:08:32 StatusLogger.java"), None);
        assert_eq!(extract_timestamp("2025-10-03T10:08:32,368"), None);
        assert_eq!(extract_timestamp(""), None);
    }

    #[test]
    fn test_entry_boundaries() {
        assert!(is_entry_boundary(""));
        assert!(is_entry_boundary("   \t"));
        assert!(is_entry_boundary("2025-10-03 10:08:32,368 something"));
        assert!(is_entry_boundary("  INFO  [main] started"));
        assert!(is_entry_boundary("WARN something"));
        assert!(is_entry_boundary("ERROR boom"));
        assert!(is_entry_boundary("DEBUG noise"));
        assert!(!is_entry_boundary("MutationStage    0    0    12    0    0"));
        assert!(!is_entry_boundary("TRACE not a level we stop on"));
    }
}
