/// Read-only classification name lookups. A miss is never an error; callers
/// fall back to names embedded in records or to the raw code.
pub trait ClassificationNames {
    fn functional(&self, code: &str) -> Option<&str>;
    fn economic_subchapter(&self, code: &str) -> Option<&str>;
    fn economic(&self, code: &str) -> Option<&str>;
}

/// In-memory name table, loaded from the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NameTable {
    functional: std::collections::BTreeMap<String, String>,
    economic_subchapters: std::collections::BTreeMap<String, String>,
    economic: std::collections::BTreeMap<String, String>,
}

impl ClassificationNames for NameTable {
    fn functional(&self, code: &str) -> Option<&str> {
        self.functional.get(code).map(String::as_str)
    }

    fn economic_subchapter(&self, code: &str) -> Option<&str> {
        self.economic_subchapters.get(code).map(String::as_str)
    }

    fn economic(&self, code: &str) -> Option<&str> {
        self.economic.get(code).map(String::as_str)
    }
}

impl std::fmt::Display for NameTable {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for NameTable {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for NameTable {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
