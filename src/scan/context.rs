use crate::metrics::Section;
use std::fmt;
use std::time::Duration;

/// Recoverable problem found while scanning; reported, never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file could not be read and contributes no sections
    FileUnreadable { file: String, error: String },
    /// A header had no `StatusLogger.java` line within reach
    MissingTimestamp { file: String, line_number: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileUnreadable { file, error } => {
                write!(f, "error reading file {}: {}", file, error)
            }
            Diagnostic::MissingTimestamp { file, line_number } => write!(
                f,
                "no timestamp found for pool statistics section at line {} in {}",
                line_number, file
            ),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub lines_seen: usize,
    pub headers_seen: usize,
    pub headers_without_timestamp: usize,
    pub headers_without_data: usize,
    pub sections_found: usize,
    pub records_found: usize,
    pub processing_time: Duration,
}

impl ScanStats {
    fn absorb(&mut self, other: &ScanStats) {
        self.files_scanned += other.files_scanned;
        self.files_failed += other.files_failed;
        self.lines_seen += other.lines_seen;
        self.headers_seen += other.headers_seen;
        self.headers_without_timestamp += other.headers_without_timestamp;
        self.headers_without_data += other.headers_without_data;
        self.sections_found += other.sections_found;
        self.records_found += other.records_found;
        self.processing_time += other.processing_time;
    }
}

/// Everything one scan produced, in input order
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub sections: Vec<Section>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// Append another file's results after this one's
    pub fn extend(&mut self, other: ScanResult) {
        self.stats.absorb(&other.stats);
        self.sections.extend(other.sections);
        self.diagnostics.extend(other.diagnostics);
    }
}
