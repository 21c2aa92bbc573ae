#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    /// Marks rows with commitments still awaiting payment.
    pub alert: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            alert: '!',
            color: false,
        }
    }
}

impl Charset {
    /// Width of one level of tree indentation.
    pub const INDENT: usize = 4;

    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            tree_space: "    ",
            alert: '\u{25b2}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_matches_tree_glyphs() {
        for charset in [Charset::default(), Charset::default().with_unicode()] {
            for s in [
                charset.tree_sideways_t,
                charset.tree_corner,
                charset.tree_pipe_gap,
                charset.tree_space,
            ] {
                assert_eq!(s.chars().count(), Charset::INDENT);
            }
        }
    }
}
