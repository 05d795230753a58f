// src/scan/locator.rs - Find pool statistics tables and their timestamps in log text
use crate::metrics::{MetricRecord, Section};
use crate::row_parser::parse_pool_line;
use crate::scan::config::ScanConfig;
use crate::scan::context::{Diagnostic, ScanResult};
use crate::timestamp::{extract_timestamp, is_entry_boundary};

/// Which side of a header line to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Search order for the table's timestamp: the line just above the header,
/// then the lines following it.
const TIMESTAMP_PRECEDENCE: [Direction; 2] = [Direction::Backward, Direction::Forward];

/// Search order for the table rows: below the header, else above it.
const DATA_PRECEDENCE: [Direction; 2] = [Direction::Forward, Direction::Backward];

/// Split on `\r\n`, `\n` or a lone `\r`; a final terminator does not open an empty line
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(['\n', '\r']))
        .unwrap_or(text);
    body.split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .collect()
}

/// Scans the trimmed lines of one file
pub struct SectionLocator<'a> {
    config: &'a ScanConfig,
    lines: Vec<&'a str>,
}

impl<'a> SectionLocator<'a> {
    pub fn new(config: &'a ScanConfig, text: &'a str) -> Self {
        Self {
            config,
            lines: split_lines(text).into_iter().map(str::trim).collect(),
        }
    }

    pub fn is_header(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(|line| {
            self.config
                .header_markers
                .iter()
                .all(|marker| line.contains(marker.as_str()))
        })
    }

    /// Look for the timestamp of the header at `index` in one direction.
    ///
    /// Backward only inspects the immediately preceding line. Forward walks
    /// the lookahead window and gives up at the first entry boundary.
    pub fn timestamp_near(&self, index: usize, direction: Direction) -> Option<String> {
        let marker = self.config.timestamp_marker.as_str();
        match direction {
            Direction::Backward => {
                let prev = self.lines.get(index.checked_sub(1)?)?;
                if prev.contains(marker) {
                    extract_timestamp(prev).map(str::to_string)
                } else {
                    None
                }
            }
            Direction::Forward => {
                let end = (index + self.config.timestamp_lookahead).min(self.lines.len());
                for line in self.lines.get(index + 1..end)? {
                    if line.contains(marker) {
                        return extract_timestamp(line).map(str::to_string);
                    }
                    if is_entry_boundary(line) {
                        break;
                    }
                }
                None
            }
        }
    }

    pub fn resolve_timestamp(&self, index: usize) -> Option<String> {
        TIMESTAMP_PRECEDENCE
            .iter()
            .find_map(|&direction| self.timestamp_near(index, direction))
    }

    /// Collect the contiguous run of pool lines adjacent to a header, in
    /// file order, stopping at the first boundary or unparseable line.
    pub fn records_near(&self, index: usize, direction: Direction) -> Vec<MetricRecord> {
        let parse = |line: &&str| {
            if is_entry_boundary(line) {
                None
            } else {
                parse_pool_line(line)
            }
        };

        match direction {
            Direction::Forward => self
                .lines
                .iter()
                .skip(index + 1)
                .map_while(parse)
                .collect(),
            Direction::Backward => {
                let mut records: Vec<MetricRecord> = self.lines[..index.min(self.lines.len())]
                    .iter()
                    .rev()
                    .map_while(parse)
                    .collect();
                records.reverse();
                records
            }
        }
    }

    pub fn collect_records(&self, index: usize) -> Vec<MetricRecord> {
        DATA_PRECEDENCE
            .iter()
            .map(|&direction| self.records_near(index, direction))
            .find(|records| !records.is_empty())
            .unwrap_or_default()
    }

    /// Walk every line once, turning each header into at most one section
    pub fn locate(&self, source: &str) -> ScanResult {
        let mut result = ScanResult::default();
        result.stats.lines_seen = self.lines.len();

        for index in (0..self.lines.len()).filter(|&i| self.is_header(i)) {
            result.stats.headers_seen += 1;

            let Some(timestamp) = self.resolve_timestamp(index) else {
                result.stats.headers_without_timestamp += 1;
                result.diagnostics.push(Diagnostic::MissingTimestamp {
                    file: source.to_string(),
                    line_number: index + 1,
                });
                continue;
            };

            let records = self.collect_records(index);
            if records.is_empty() {
                result.stats.headers_without_data += 1;
                if self.config.debug {
                    eprintln!(
                        "poolscan: debug: header at line {} in {} has no pool rows",
                        index + 1,
                        source
                    );
                }
                continue;
            }

            result.stats.sections_found += 1;
            result.stats.records_found += records.len();
            result.sections.push(Section { timestamp, records });
        }

        result
    }
}
