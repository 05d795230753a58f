// src/scan.rs - Scan log files for pool statistics sections
pub mod config;
pub mod context;
pub mod locator;

use crate::scan::config::ScanConfig;
use crate::scan::context::{Diagnostic, ScanResult};
use crate::scan::locator::SectionLocator;
use std::path::Path;
use std::time::Instant;

/// Scan already-loaded log text. `source` names it in diagnostics.
pub fn scan_text(text: &str, source: &str, config: &ScanConfig) -> ScanResult {
    SectionLocator::new(config, text).locate(source)
}

/// Read and scan one file. Undecodable bytes are replaced, and a file that
/// cannot be read yields a diagnostic instead of sections.
pub fn scan_file(path: &Path, config: &ScanConfig) -> ScanResult {
    let source = path.display().to_string();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let mut result = ScanResult::default();
            result.stats.files_failed = 1;
            result.diagnostics.push(Diagnostic::FileUnreadable {
                file: source,
                error: e.to_string(),
            });
            return result;
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let mut result = scan_text(&text, &source, config);
    result.stats.files_scanned = 1;

    if config.debug {
        eprintln!(
            "poolscan: debug: {}: {} lines, {} headers, {} sections",
            source, result.stats.lines_seen, result.stats.headers_seen, result.stats.sections_found
        );
    }

    result
}

/// Scan files one after another, concatenating their sections in argument order
pub fn scan_files<P: AsRef<Path>>(paths: &[P], config: &ScanConfig) -> ScanResult {
    let start_time = Instant::now();
    let mut combined = ScanResult::default();

    for path in paths {
        combined.extend(scan_file(path.as_ref(), config));
    }

    combined.stats.processing_time = start_time.elapsed();
    combined
}
