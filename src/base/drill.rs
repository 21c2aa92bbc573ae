use crate::base;

/// Record cap for every drill-down fetch.
pub const DRILL_LIMIT: usize = 100;

/// Identifies the scope a set of fetched metrics belongs to. Results carrying
/// another scope's key are stale and get discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub parent: String,
    pub grouping: base::Grouping,
}

/// What one drill level currently has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelView {
    /// A required metric has not resolved yet.
    Loading,
    Rows(Vec<base::DrillRow>),
    /// Nothing at this level; the next level should be shown in its place.
    SkipTo(base::DrillLevel),
    /// Nothing down to the leaf level.
    NoBreakdown,
}

/// Metric results for one scope as they arrive.
#[derive(Debug, Clone)]
pub struct LevelData {
    key: ScopeKey,
    budget: Option<base::MetricNodeSet>,
    committed: Option<base::MetricNodeSet>,
    paid_treasury: Option<base::MetricNodeSet>,
    paid_non_treasury: Option<base::MetricNodeSet>,
}

impl LevelData {
    pub fn new(key: ScopeKey) -> Self {
        Self {
            key,
            budget: None,
            committed: None,
            paid_treasury: None,
            paid_non_treasury: None,
        }
    }

    /// Stores a fetched set. Returns false and drops the set if it was
    /// fetched for a different scope.
    pub fn accept(
        &mut self,
        key: &ScopeKey,
        metric: base::Metric,
        set: base::MetricNodeSet,
    ) -> bool {
        if *key != self.key {
            log::debug!(
                "discarding stale {} result for '{}' ({}), expected '{}' ({})",
                metric,
                key.parent,
                key.grouping,
                self.key.parent,
                self.key.grouping
            );
            return false;
        }
        let slot = match metric {
            base::Metric::Budget => &mut self.budget,
            base::Metric::Committed => &mut self.committed,
            base::Metric::PaidTreasury => &mut self.paid_treasury,
            base::Metric::PaidNonTreasury => &mut self.paid_non_treasury,
        };
        *slot = Some(set);
        true
    }

    /// Budget, committed and treasury payments have all resolved. Non-treasury
    /// payments may arrive later or never.
    pub fn is_ready(&self) -> bool {
        self.budget.is_some() && self.committed.is_some() && self.paid_treasury.is_some()
    }

    /// Merged rows at `level`, or `None` while not ready.
    pub fn rows<N>(&self, names: &N, level: base::DrillLevel) -> Option<Vec<base::DrillRow>>
    where
        N: base::ClassificationNames + ?Sized,
    {
        if !self.is_ready() {
            return None;
        }
        let empty = base::MetricNodeSet::new();
        let budget = self.budget.as_ref().unwrap_or(&empty);
        let committed = self.committed.as_ref().unwrap_or(&empty);
        let paid = base::MetricNodeSet::combine(
            self.paid_treasury.as_ref().unwrap_or(&empty),
            self.paid_non_treasury.as_ref().unwrap_or(&empty),
        );
        let agg = base::Aggregator::new(names, self.key.grouping);
        let parent = self.key.parent.as_str();
        Some(base::DrillRow::build(
            &agg.group_level(budget, level, parent),
            &agg.group_level(committed, level, parent),
            &agg.group_level(&paid, level, parent),
        ))
    }

    pub fn view<N>(&self, names: &N, level: base::DrillLevel) -> LevelView
    where
        N: base::ClassificationNames + ?Sized,
    {
        match self.rows(names, level) {
            None => LevelView::Loading,
            Some(rows) if !rows.is_empty() => LevelView::Rows(rows),
            Some(_) => match level.next() {
                Some(next) => LevelView::SkipTo(next),
                None => LevelView::NoBreakdown,
            },
        }
    }
}

/// Children of an expanded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Rows found at `level`, after skipping any empty levels above it.
    Rows {
        level: base::DrillLevel,
        rows: Vec<base::DrillRow>,
    },
    NoBreakdown,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to expand '{parent}'")]
pub struct DrillError {
    parent: String,
    source: base::SourceError,
}

/// Level shown when a row whose id is `row_id`, displayed at `current`, is
/// expanded. `None` for leaf rows.
pub fn child_level(row_id: &str, current: base::DrillLevel) -> Option<base::DrillLevel> {
    let next = current.next()?;
    Some(next.max(base::DrillLevel::initial(row_id)))
}

/// Decides which level to show below a parent code and loads it.
pub struct DrillController<'a, S: ?Sized, N: ?Sized> {
    source: &'a S,
    names: &'a N,
    grouping: base::Grouping,
    filter: &'a base::MetricFilter,
}

impl<'a, S, N> DrillController<'a, S, N>
where
    S: base::MetricSource + ?Sized,
    N: base::ClassificationNames + ?Sized,
{
    pub fn new(
        source: &'a S,
        names: &'a N,
        grouping: base::Grouping,
        filter: &'a base::MetricFilter,
    ) -> Self {
        Self {
            source,
            names,
            grouping,
            filter,
        }
    }

    pub fn grouping(&self) -> base::Grouping {
        self.grouping
    }

    /// The four fetches scoped to `parent`: budget, committed, then both
    /// payment channels.
    pub fn queries(&self, parent: &str) -> [base::MetricQuery; 4] {
        let filter = self.filter.narrowed(self.grouping, parent);
        let query = |metric| base::MetricQuery {
            filter: filter.clone(),
            metric,
            limit: Some(DRILL_LIMIT),
        };
        let paid = base::PaidInputs::build(&filter, Some(DRILL_LIMIT));
        [
            query(base::Metric::Budget),
            query(base::Metric::Committed),
            paid.treasury,
            paid.non_treasury,
        ]
    }

    /// Fetches every metric for `parent`. A failed non-treasury fetch leaves
    /// that metric empty; any other failure is returned.
    pub fn load(&self, parent: &str) -> Result<LevelData, DrillError> {
        let key = ScopeKey {
            parent: parent.to_string(),
            grouping: self.grouping,
        };
        let mut data = LevelData::new(key.clone());
        for query in self.queries(parent) {
            match self.source.fetch(&query) {
                Ok(set) => {
                    data.accept(&key, query.metric, set);
                }
                Err(e) if query.metric.is_optional() => {
                    log::warn!("{} for '{}', treating it as empty", e, parent);
                }
                Err(e) => {
                    return Err(DrillError {
                        parent: parent.to_string(),
                        source: e,
                    });
                }
            }
        }
        Ok(data)
    }

    /// Expands `parent` starting from the level its own depth calls for.
    pub fn expand(&self, parent: &str) -> Result<Expansion, DrillError> {
        self.expand_from(parent, base::DrillLevel::initial(parent))
    }

    /// Expands `parent` starting at `start`, moving down past empty levels.
    /// Visits at most three levels.
    pub fn expand_from(
        &self,
        parent: &str,
        start: base::DrillLevel,
    ) -> Result<Expansion, DrillError> {
        let data = self.load(parent)?;
        for level in std::iter::successors(Some(start), |l| l.next()) {
            match data.view(self.names, level) {
                LevelView::Rows(rows) => return Ok(Expansion::Rows { level, rows }),
                LevelView::SkipTo(next) => {
                    log::debug!("no {} rows under '{}', trying {}", level, parent, next);
                }
                LevelView::NoBreakdown => break,
                LevelView::Loading => unreachable!("required metrics were just loaded"),
            }
        }
        Ok(Expansion::NoBreakdown)
    }
}
