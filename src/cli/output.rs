use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(&'static str),
    String(String),
    Table(base::tree::fordrill::Config),
    /// A single expanded level, preceded by a line naming the parent and the
    /// level reached.
    Drill {
        heading: String,
        table: base::tree::fordrill::Config,
    },
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::String(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => {
                let tree = config.to_tree();
                if tree.is_empty() {
                    writeln!(f, "No records.")
                } else {
                    write!(f, "{}", tree)
                }
            }
            Output::Drill { heading, table } => {
                writeln!(f, "{}", heading)?;
                write!(f, "{}", table.to_tree())
            }
        }
    }
}
