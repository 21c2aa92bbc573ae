use crate::base;

/// Dot-separated numeric budget classification code, e.g. `20.01.03`.
///
/// Operations never fail. Malformed input degrades to an empty string or a
/// zero segment count.
pub struct ClassificationCode;

/// Code depth expressed in raw digits, one segment per two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Depth {
    Chapter = 2,
    Subchapter = 4,
    Paragraph = 6,
}

impl Depth {
    pub const fn segments(self) -> usize {
        self as usize / 2
    }

    /// Depth a drill level groups on. `None` for the leaf level, which is
    /// keyed by raw codes of the other dimension.
    pub const fn of(level: base::DrillLevel) -> Option<Self> {
        match level {
            base::DrillLevel::Subchapter => Some(Depth::Subchapter),
            base::DrillLevel::Paragraph => Some(Depth::Paragraph),
            base::DrillLevel::Economic => None,
        }
    }
}

impl ClassificationCode {
    pub const SEP: char = '.';

    /// Strips every character that is not an ASCII digit or a dot.
    pub fn normalize(code: &str) -> String {
        code.chars()
            .filter(|c| c.is_ascii_digit() || *c == Self::SEP)
            .collect()
    }

    pub fn segment_count(code: &str) -> usize {
        let norm = Self::normalize(code);
        if norm.is_empty() {
            return 0;
        }
        norm.split(Self::SEP).count()
    }

    /// Keeps at most `depth.segments()` leading segments. Missing segments
    /// shorten the result.
    pub fn truncate(code: &str, depth: Depth) -> String {
        let norm = Self::normalize(code);
        norm.split(Self::SEP)
            .take(depth.segments())
            .collect::<Vec<_>>()
            .join(".")
    }
}
