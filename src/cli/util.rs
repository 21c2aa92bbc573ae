use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Returns the filter for the given command line scope. Years given on the
/// command line replace the config's years.
pub fn filter_from_opts(
    opts: &cli::sharedopts::ScopeOpts,
    config: &base::Config,
) -> base::MetricFilter {
    let years = if opts.years.is_empty() {
        config.years.clone()
    } else {
        opts.years.clone()
    };
    base::MetricFilter {
        years,
        ..Default::default()
    }
}
