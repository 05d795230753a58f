// src/lib.rs
pub mod error;
pub mod filter;
pub mod metrics;
pub mod output_format;
pub mod projection;
pub mod row_parser;
pub mod scan;
pub mod timestamp;

pub use error::*;

pub use filter::PoolFilter;
pub use metrics::{parse_metric_list, Metric, MetricRecord, Section, METRICS};
pub use output_format::{write_table, OutputFormat};
pub use projection::{Projection, Table};
pub use row_parser::parse_pool_line;
pub use scan::config::ScanConfig;
pub use scan::context::{Diagnostic, ScanResult, ScanStats};
pub use scan::locator::{Direction, SectionLocator};
pub use scan::{scan_file, scan_files, scan_text};
pub use timestamp::extract_timestamp;
