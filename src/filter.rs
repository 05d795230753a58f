use crate::metrics::MetricRecord;

/// Case-insensitive pool name filter. An empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolFilter {
    targets: Vec<String>,
}

impl PoolFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        PoolFilter { targets }
    }

    /// Build from a comma-separated `--pools` value
    pub fn parse(spec: &str) -> Self {
        Self::new(spec.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn matches(&self, pool_name: &str) -> bool {
        self.is_empty() || self.targets.contains(&pool_name.to_lowercase())
    }

    pub fn apply<'a>(&self, records: &'a [MetricRecord]) -> Vec<&'a MetricRecord> {
        records
            .iter()
            .filter(|record| self.matches(&record.pool_name))
            .collect()
    }
}
