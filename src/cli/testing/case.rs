use crate::cli;

/// A single command invocation.
pub struct Invocation<'a> {
    /// Command line arguments. The first one stands for the binary name and
    /// may be empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

/// Command invocations run in order against one data directory, which they
/// may modify.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Directory contents before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Directory contents expected after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// Populates a temporary directory from `initial_state`, checks each
    /// invocation's result, then compares the directory with `final_state`.
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let root = match <cli::Root as clap::Parser>::try_parse_from(inv.args) {
                Ok(cmd) => cmd,
                Err(e) => panic!("{}", e),
            };
            inv.res.assert_matches(root.run(&fs));
        }

        assert_eq!(cli::testing::State::from_fs(&fs), self.final_state);
    }
}

/// Command invocations that must leave the data directory unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Generates one `#[test]` function per `(name, Case|MutCase)` tuple, inside
/// a `cmd_testcases` submodule of the caller.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base;

    #[test]
    fn test_state_round_trip() {
        let (fs, _td) = cli::testing::tempfs();
        let s = cli::testing::StrState::new()
            .with_config(r#"{"grouping":"ec"}"#)
            .with_metric(base::Metric::Committed, r#"{"functional_code":"20","amount":2}"#);
        s.to_fs(&fs);
        assert_eq!(cli::testing::State::from_fs(&fs), s.to_state());
        assert!(fs.is_repo());
    }
}
