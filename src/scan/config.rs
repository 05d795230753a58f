/// Tunables for locating pool tables in a log file
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Substrings that must all appear on a table header line
    pub header_markers: Vec<String>,
    /// Substring identifying the log entry that carries the table's timestamp
    pub timestamp_marker: String,
    /// Forward timestamp search covers lines header+1 .. header+lookahead (exclusive)
    pub timestamp_lookahead: usize,
    pub debug: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            header_markers: vec![
                "Pool Name".to_string(),
                "Active".to_string(),
                "Pending".to_string(),
            ],
            timestamp_marker: "StatusLogger.java".to_string(),
            timestamp_lookahead: 10,
            debug: false,
        }
    }
}
