use crate::error::ExtractError;
use crate::projection::Table;
use chrono::NaiveDateTime;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "csv", help = "Comma-separated values")]
    Csv,
    #[value(name = "tsv", help = "Tab-separated values")]
    Tsv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl OutputFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Csv => b',',
            OutputFormat::Tsv => b'\t',
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// `pool_metrics_<YYYYmmdd_HHMMSS>.<ext>` for the given local time
    pub fn default_file_name(&self, now: NaiveDateTime) -> String {
        format!(
            "pool_metrics_{}.{}",
            now.format("%Y%m%d_%H%M%S"),
            self.extension()
        )
    }
}

/// Write the header and every row, quoting fields only where needed
pub fn write_table<W: Write>(
    table: &Table,
    format: OutputFormat,
    output: W,
) -> Result<(), ExtractError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .from_writer(output);

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> Table {
        Table {
            header: vec!["timestamp".to_string(), "pool_name".to_string()],
            rows: vec![
                vec![
                    "2025-10-03 10:08:32,368".to_string(),
                    "Native Transport Requests".to_string(),
                ],
                vec!["2025-10-03 10:08:32,368".to_string(), "odd,\"name\"".to_string()],
            ],
        }
    }

    #[test]
    fn test_csv_quotes_only_when_needed() {
        let mut output = Vec::new();
        write_table(&table(), OutputFormat::Csv, &mut output).unwrap();
        let expected = "timestamp,pool_name\r\n\
\"2025-10-03 10:08:32,368\",Native Transport Requests\r\n\
\"2025-10-03 10:08:32,368\",\"odd,\"\"name\"\"\"\r\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_records_end_with_crlf() {
        let table = Table {
            header: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        };
        let mut output = Vec::new();
        write_table(&table, OutputFormat::Csv, &mut output).unwrap();
        assert_eq!(output, b"a,b\r\n1,2\r\n");
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let mut output = Vec::new();
        write_table(&table(), OutputFormat::Tsv, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("timestamp\tpool_name\r\n"));
        assert!(text.contains("2025-10-03 10:08:32,368\tNative Transport Requests\r\n"));
    }

    #[test]
    fn test_default_file_name() {
        let now = NaiveDate::from_ymd_opt(2025, 10, 3)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(
            OutputFormat::Csv.default_file_name(now),
            "pool_metrics_20251003_090507.csv"
        );
        assert_eq!(
            OutputFormat::Tsv.default_file_name(now),
            "pool_metrics_20251003_090507.tsv"
        );
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("json".parse::<OutputFormat>().is_err());
    }
}
