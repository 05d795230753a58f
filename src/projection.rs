// src/projection.rs - Reshape extracted sections into a table
use crate::error::ExtractError;
use crate::filter::PoolFilter;
use crate::metrics::{Metric, MetricRecord, Section};
use std::collections::{BTreeSet, HashMap};

/// Placeholder for a pool that has no row at a given timestamp
pub const MISSING_VALUE: &str = "N/A";

/// Shape of the output, decided once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// One row per pool per section
    Rows { metrics: Vec<Metric> },
    /// One row per section, one column group per matched pool
    Pivot {
        filter: PoolFilter,
        metrics: Vec<Metric>,
    },
}

/// Header plus data rows, ready for a delimited writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Projection {
    /// Pivot when pools were named, rows otherwise
    pub fn resolve(filter: PoolFilter, metrics: Vec<Metric>) -> Self {
        if filter.is_empty() {
            Projection::Rows { metrics }
        } else {
            Projection::Pivot { filter, metrics }
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        match self {
            Projection::Rows { metrics } | Projection::Pivot { metrics, .. } => metrics,
        }
    }

    pub fn project(&self, sections: &[Section]) -> Result<Table, ExtractError> {
        if sections.is_empty() {
            return Err(ExtractError::NoSections);
        }

        match self {
            Projection::Rows { metrics } => Ok(project_rows(sections, metrics)),
            Projection::Pivot { filter, metrics } => project_pivot(sections, filter, metrics),
        }
    }
}

fn project_rows(sections: &[Section], metrics: &[Metric]) -> Table {
    let mut header = vec!["timestamp".to_string(), "pool_name".to_string()];
    header.extend(metrics.iter().map(|m| m.column().to_string()));

    let rows = sections
        .iter()
        .flat_map(|section| {
            section.records.iter().map(move |record| {
                let mut row = vec![section.timestamp.clone(), record.pool_name.clone()];
                row.extend(metrics.iter().map(|&m| record.get(m).to_string()));
                row
            })
        })
        .collect();

    Table { header, rows }
}

fn project_pivot(
    sections: &[Section],
    filter: &PoolFilter,
    metrics: &[Metric],
) -> Result<Table, ExtractError> {
    // Names as spelled in the log, across every section
    let pool_names: BTreeSet<&str> = sections
        .iter()
        .flat_map(|section| filter.apply(&section.records))
        .map(|record| record.pool_name.as_str())
        .collect();

    if pool_names.is_empty() {
        return Err(ExtractError::NoMatchingPools);
    }

    let mut header = vec!["timestamp".to_string()];
    for name in &pool_names {
        header.extend(metrics.iter().map(|m| format!("{}-{}", name, m.name())));
    }

    let mut rows = Vec::with_capacity(sections.len());
    for section in sections {
        // A repeated pool name within one section resolves to its last row
        let by_name: HashMap<&str, &MetricRecord> = filter
            .apply(&section.records)
            .into_iter()
            .map(|record| (record.pool_name.as_str(), record))
            .collect();

        let mut row = vec![section.timestamp.clone()];
        for name in &pool_names {
            match by_name.get(name) {
                Some(record) => row.extend(metrics.iter().map(|&m| record.get(m).to_string())),
                None => row.extend(metrics.iter().map(|_| MISSING_VALUE.to_string())),
            }
        }
        rows.push(row);
    }

    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row_parser::parse_pool_line;

    fn section(timestamp: &str, lines: &[&str]) -> Section {
        Section {
            timestamp: timestamp.to_string(),
            records: lines.iter().filter_map(|l| parse_pool_line(l)).collect(),
        }
    }

    fn sample() -> Vec<Section> {
        vec![
            section(
                "2025-10-03 10:00:00,000",
                &[
                    "GossipStage    0    0    10    0    0",
                    "ReadStage    1    2    30    0    0",
                ],
            ),
            section(
                "2025-10-03 10:05:00,000",
                &["ReadStage    4    5    60    0    0"],
            ),
        ]
    }

    #[test]
    fn test_resolve_picks_mode_from_filter() {
        let rows = Projection::resolve(PoolFilter::default(), Metric::all());
        assert!(matches!(rows, Projection::Rows { .. }));
        let pivot = Projection::resolve(PoolFilter::parse("GossipStage"), Metric::all());
        assert!(matches!(pivot, Projection::Pivot { .. }));
        assert_eq!(pivot.metrics().len(), 9);
    }

    #[test]
    fn test_row_mode_all_metrics() {
        let table = Projection::resolve(PoolFilter::default(), Metric::all())
            .project(&sample())
            .unwrap();
        assert_eq!(
            table.header,
            vec![
                "timestamp",
                "pool_name",
                "active",
                "pending",
                "backpressure",
                "delayed",
                "shared",
                "stolen",
                "completed",
                "blocked",
                "all_time_blocked"
            ]
        );
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[1],
            vec![
                "2025-10-03 10:00:00,000",
                "ReadStage",
                "1",
                "2",
                "0",
                "0",
                "0",
                "0",
                "30",
                "0",
                "0"
            ]
        );
    }

    #[test]
    fn test_row_mode_selected_metrics_in_caller_order() {
        let table = Projection::resolve(
            PoolFilter::default(),
            vec![Metric::Completed, Metric::Active],
        )
        .project(&sample())
        .unwrap();
        assert_eq!(table.header, vec!["timestamp", "pool_name", "completed", "active"]);
        assert_eq!(
            table.rows[2],
            vec!["2025-10-03 10:05:00,000", "ReadStage", "60", "4"]
        );
    }

    #[test]
    fn test_pivot_fills_missing_pool() {
        let table = Projection::resolve(
            PoolFilter::parse("gossipstage"),
            vec![Metric::Active, Metric::Completed],
        )
        .project(&sample())
        .unwrap();
        assert_eq!(
            table.header,
            vec!["timestamp", "GossipStage-Active", "GossipStage-Completed"]
        );
        assert_eq!(
            table.rows,
            vec![
                vec!["2025-10-03 10:00:00,000", "0", "10"],
                vec!["2025-10-03 10:05:00,000", "N/A", "N/A"],
            ]
        );
    }

    #[test]
    fn test_pivot_sorts_pool_names() {
        let table = Projection::resolve(
            PoolFilter::parse("ReadStage,GossipStage"),
            vec![Metric::AllTimeBlocked],
        )
        .project(&sample())
        .unwrap();
        assert_eq!(
            table.header,
            vec![
                "timestamp",
                "GossipStage-All_Time_Blocked",
                "ReadStage-All_Time_Blocked"
            ]
        );
        assert_eq!(table.rows[1], vec!["2025-10-03 10:05:00,000", "N/A", "0"]);
    }

    #[test]
    fn test_pivot_without_matches_fails() {
        let err = Projection::resolve(PoolFilter::parse("NoSuchPool"), Metric::all())
            .project(&sample())
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoMatchingPools));
    }

    #[test]
    fn test_no_sections_fails() {
        let err = Projection::resolve(PoolFilter::default(), Metric::all())
            .project(&[])
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoSections));
    }
}
