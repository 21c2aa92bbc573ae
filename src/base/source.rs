use crate::base;

/// Provider of server-aggregated metric node sets.
pub trait MetricSource {
    fn fetch(&self, query: &base::MetricQuery) -> Result<base::MetricNodeSet, SourceError>;
}

#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {metric}")]
pub struct SourceError {
    metric: base::Metric,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SourceError {
    pub fn new<E>(metric: base::Metric, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            metric,
            source: source.into(),
        }
    }
}

#[cfg(test)]
impl SourceError {
    pub fn metric(&self) -> base::Metric {
        self.metric
    }
}

/// Metric source backed by the JSON lines files of a data directory.
///
/// Mirrors the backend's contract: records outside the filter are dropped and
/// at most `limit` records are returned, largest amounts first.
pub struct FsSource<'fs> {
    fs: &'fs base::Fs,
}

impl<'fs> FsSource<'fs> {
    pub fn new(fs: &'fs base::Fs) -> Self {
        Self { fs }
    }
}

impl base::MetricSource for FsSource<'_> {
    fn fetch(&self, query: &base::MetricQuery) -> Result<base::MetricNodeSet, SourceError> {
        let set = self
            .fs
            .read_metric(query.metric)
            .map_err(|e| SourceError::new(query.metric, e))?;
        let mut nodes = set
            .into_iter()
            .filter(|n| query.filter.matches(n))
            .collect::<Vec<_>>();
        if let Some(limit) = query.limit {
            nodes.sort_by(|a, b| b.amount().cmp(&a.amount()));
            nodes.truncate(limit);
        }
        log::debug!(
            "fetched {} {} records from '{}'",
            nodes.len(),
            query.metric,
            self.fs.metric_path(query.metric).display()
        );
        Ok(nodes.into_iter().collect())
    }
}
