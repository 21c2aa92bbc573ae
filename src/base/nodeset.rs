use crate::base;

/// One server-aggregated amount, tagged with both classification dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetricNode {
    functional_code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    functional_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    economic_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    economic_name: Option<String>,
    amount: base::Amount,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    year: Option<u16>,
}

impl MetricNode {
    /// Placeholder code for records lacking a code on some dimension.
    pub const UNKNOWN: &str = "unknown";

    pub fn amount(&self) -> base::Amount {
        self.amount
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    /// Raw code on the given dimension, or `None` when absent or blank.
    pub fn code(&self, dimension: base::Grouping) -> Option<&str> {
        let code = match dimension {
            base::Grouping::Fn => Some(self.functional_code.as_str()),
            base::Grouping::Ec => self.economic_code.as_deref(),
        };
        code.filter(|c| !c.trim().is_empty())
    }

    pub fn code_or_unknown(&self, dimension: base::Grouping) -> &str {
        self.code(dimension).unwrap_or(Self::UNKNOWN)
    }

    /// Name embedded in the record for the given dimension.
    pub fn name(&self, dimension: base::Grouping) -> Option<&str> {
        match dimension {
            base::Grouping::Fn => self.functional_name.as_deref(),
            base::Grouping::Ec => self.economic_name.as_deref(),
        }
    }
}

#[cfg(test)]
impl MetricNode {
    pub fn new(functional_code: &str, economic_code: Option<&str>, amount: base::Amount) -> Self {
        Self {
            functional_code: functional_code.to_string(),
            functional_name: None,
            economic_code: economic_code.map(str::to_string),
            economic_name: None,
            amount,
            year: None,
        }
    }

    pub fn with_names(mut self, functional: Option<&str>, economic: Option<&str>) -> Self {
        self.functional_name = functional.map(str::to_string);
        self.economic_name = economic.map(str::to_string);
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

impl std::fmt::Display for MetricNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for MetricNode {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Immutable flat list of records returned for one metric query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricNodeSet(Vec<MetricNode>);

impl MetricNodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricNode> {
        self.0.iter()
    }

    /// Union of two sets describing the same metric paid through different
    /// channels. Records are never de-duplicated; amounts for a shared code
    /// add up downstream.
    pub fn combine(primary: &Self, secondary: &Self) -> Self {
        primary.iter().chain(secondary.iter()).collect()
    }
}

#[cfg(test)]
impl MetricNodeSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> base::Amount {
        self.iter().map(MetricNode::amount).sum()
    }
}

impl IntoIterator for MetricNodeSet {
    type Item = MetricNode;
    type IntoIter = std::vec::IntoIter<MetricNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<MetricNode> for MetricNodeSet {
    fn from_iter<T: IntoIterator<Item = MetricNode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a MetricNode> for MetricNodeSet {
    fn from_iter<T: IntoIterator<Item = &'a MetricNode>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for MetricNodeSet {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in self.iter() {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for MetricNodeSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<MetricNode>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for MetricNodeSet {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
