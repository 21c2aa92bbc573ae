use crate::cli;

/// Helps check if a command returns the expected [`anyhow::Result<cli::Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its payload equals the given value.
    OkExact(cli::Output),

    /// Asserts result is `Ok` and its payload renders exactly as the given
    /// text.
    OkRendered(&'a str),

    /// Asserts result is an `Ok(Output::Str(_))` or `Ok(Output::String(_))`
    /// matching the given glob pattern. Matching is case-insensitive.
    OkStrGlob(&'a str),

    /// Asserts result is `Err` and that the error's `to_string()` matches the
    /// given glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),
}

fn glob_matches(pattern: &str, s: &str) -> bool {
    wildmatch::WildMatch::new(pattern.to_lowercase().as_str()).matches(s.to_lowercase().as_str())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<cli::Output>) {
        match self {
            ResultMatcher::OkExact(want_output) => {
                if let Ok(got_output) = &result {
                    if got_output == want_output {
                        return;
                    }
                    text_diff::print_diff(
                        format!("{:?}", want_output).as_str(),
                        format!("{:?}", got_output).as_str(),
                        " ",
                    );
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result);
            }
            ResultMatcher::OkRendered(want) => {
                let Ok(got_output) = &result else {
                    panic!("\n\twant: Ok(..)\n\tgot: {:?}\n", result);
                };
                let got = got_output.to_string();
                if got != *want {
                    text_diff::print_diff(want, &got, "\n");
                    panic!("diff between want (red) and got (green), see above");
                }
            }
            ResultMatcher::OkStrGlob(pattern) => {
                let matches = match &result {
                    Ok(cli::Output::Str(s)) => glob_matches(pattern, s),
                    Ok(cli::Output::String(s)) => glob_matches(pattern, s),
                    _ => false,
                };
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Err(ref got_err) if glob_matches(pattern, &got_err.to_string()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
