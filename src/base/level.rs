use crate::base;

/// Primary classification dimension driving the drill-down hierarchy.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Fn,
    Ec,
}

impl Grouping {
    pub const fn complement(self) -> Self {
        match self {
            Grouping::Fn => Grouping::Ec,
            Grouping::Ec => Grouping::Fn,
        }
    }

    /// Code-type badge shown before a code, e.g. `fn:`.
    pub fn badge(self) -> &'static str {
        match self {
            Grouping::Fn => "fn:",
            Grouping::Ec => "ec:",
        }
    }
}

/// Depth currently displayed below an expanded row. `Economic` is the leaf of
/// either hierarchy and shows the complementary dimension's codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DrillLevel {
    Subchapter,
    Paragraph,
    Economic,
}

impl DrillLevel {
    pub const fn next(self) -> Option<Self> {
        match self {
            DrillLevel::Subchapter => Some(DrillLevel::Paragraph),
            DrillLevel::Paragraph => Some(DrillLevel::Economic),
            DrillLevel::Economic => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, DrillLevel::Economic)
    }

    /// Dimension whose codes identify rows at this level.
    pub const fn dimension(self, grouping: Grouping) -> Grouping {
        match self {
            DrillLevel::Economic => grouping.complement(),
            _ => grouping,
        }
    }

    /// Level to start at when `parent` is first expanded. A parent that is
    /// already subchapter or paragraph deep skips the levels it duplicates.
    pub fn initial(parent: &str) -> Self {
        match base::ClassificationCode::segment_count(parent) {
            n if n >= 3 => DrillLevel::Economic,
            2 => DrillLevel::Paragraph,
            _ => DrillLevel::Subchapter,
        }
    }
}

/// Depth of the root table's rows.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    #[default]
    Chapter,
    Detailed,
}

impl DetailLevel {
    pub const fn root_depth(self) -> base::Depth {
        match self {
            DetailLevel::Chapter => base::Depth::Chapter,
            DetailLevel::Detailed => base::Depth::Subchapter,
        }
    }
}
