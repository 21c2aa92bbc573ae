use crate::base;
use crate::cli;

/// Break one classification code down by the level below it
#[derive(clap::Parser)]
pub struct Drill {
    /// Parent classification code, e.g. 20 or 20.01.03
    parent: String,

    #[command(flatten)]
    scope_opts: cli::sharedopts::ScopeOpts,

    /// Level to try first [default: derived from the depth of PARENT]
    ///
    /// Empty levels are skipped, down to economic.
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<base::DrillLevel>,
}

impl Drill {
    pub fn run<S, N>(
        &self,
        source: &S,
        names: &N,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output>
    where
        S: base::MetricSource + ?Sized,
        N: base::ClassificationNames + ?Sized,
    {
        let parent = base::ClassificationCode::normalize(&self.parent);
        if base::ClassificationCode::segment_count(&parent) == 0 {
            anyhow::bail!("invalid code '{}'", self.parent);
        }
        let grouping = self.scope_opts.grouping.unwrap_or(config.grouping);
        let filter = cli::util::filter_from_opts(&self.scope_opts, config);
        let controller = base::DrillController::new(source, names, grouping, &filter);
        let expansion = match self.level {
            Some(start) => controller.expand_from(&parent, start)?,
            None => controller.expand(&parent)?,
        };

        let (level, rows) = match expansion {
            base::Expansion::Rows { level, rows } => (level, rows),
            base::Expansion::NoBreakdown => return Ok(cli::Output::Str("No breakdown available.")),
        };
        let slot = base::RowSlot::Drill {
            parent: parent.clone(),
            level,
        };
        let nodes = rows
            .into_iter()
            .map(|row| base::TableNode {
                row,
                slot: slot.clone(),
                children: None,
                nodes: Vec::new(),
            })
            .collect();
        Ok(cli::Output::Drill {
            heading: format!("{}{} > {}", controller.grouping().badge(), parent, level),
            table: base::tree::fordrill::Config {
                charset: cli::util::charset_from_config(config),
                grouping: controller.grouping(),
                nodes,
            },
        })
    }
}
