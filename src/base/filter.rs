use crate::base;

/// Scope of a metric query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    /// Reporting years of interest. Empty means every year.
    pub years: Vec<u16>,
    pub functional_prefixes: Option<Vec<String>>,
    pub economic_prefixes: Option<Vec<String>>,
}

impl MetricFilter {
    /// Returns a copy scoped to descendants of `parent` on the grouping
    /// dimension. The other dimension's prefixes are left untouched.
    pub fn narrowed(&self, grouping: base::Grouping, parent: &str) -> Self {
        let prefixes = Some(vec![parent.to_string()]);
        match grouping {
            base::Grouping::Fn => Self {
                functional_prefixes: prefixes,
                ..self.clone()
            },
            base::Grouping::Ec => Self {
                economic_prefixes: prefixes,
                ..self.clone()
            },
        }
    }

    /// Whether `node` falls in scope. Nodes without a year match any year.
    pub fn matches(&self, node: &base::MetricNode) -> bool {
        let year_ok = match node.year() {
            Some(y) => self.years.is_empty() || self.years.contains(&y),
            None => true,
        };
        year_ok
            && Self::prefix_ok(&self.functional_prefixes, node.code(base::Grouping::Fn))
            && Self::prefix_ok(&self.economic_prefixes, node.code(base::Grouping::Ec))
    }

    fn prefix_ok(prefixes: &Option<Vec<String>>, code: Option<&str>) -> bool {
        let Some(prefixes) = prefixes else {
            return true;
        };
        let Some(code) = code else {
            return false;
        };
        let code = base::ClassificationCode::normalize(code);
        prefixes
            .iter()
            .any(|p| code.starts_with(&base::ClassificationCode::normalize(p)))
    }
}

/// A single metric fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub filter: MetricFilter,
    pub metric: base::Metric,
    pub limit: Option<usize>,
}

/// The two fetches that together make up the paid metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidInputs {
    pub treasury: MetricQuery,
    pub non_treasury: MetricQuery,
}

impl PaidInputs {
    pub fn build(filter: &MetricFilter, limit: Option<usize>) -> Self {
        let query = |metric| MetricQuery {
            filter: filter.clone(),
            metric,
            limit,
        };
        Self {
            treasury: query(base::Metric::PaidTreasury),
            non_treasury: query(base::Metric::PaidNonTreasury),
        }
    }
}
