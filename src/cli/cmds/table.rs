use anyhow::Context;

use crate::base;
use crate::cli;

/// View budget execution per chapter, drilling into selected rows
#[derive(clap::Parser)]
pub struct Table {
    #[command(flatten)]
    scope_opts: cli::sharedopts::ScopeOpts,

    /// Depth of the top-level rows [default: from config]
    ///
    /// chapter: one row per chapter, e.g. 20
    /// detailed: one row per subchapter, e.g. 20.01
    #[arg(short, long, value_name = "DETAIL", verbatim_doc_comment)]
    detail: Option<base::DetailLevel>,

    /// Column to sort the top-level rows on
    ///
    /// One of: name, budget, committed, percent, paid, unpaid. Each occurrence
    /// selects a column: a new column sorts descending, the active column
    /// flips direction. Rows start sorted by budget, descending.
    #[arg(short, long, value_name = "COLUMN")]
    sort: Vec<base::SortColumn>,

    /// Codes of rows to expand or collapse, in order
    ///
    /// Use commas to separate multiple codes. Each code toggles the first
    /// visible expandable row with that code, so rows opened by earlier codes
    /// can be drilled into by later ones.
    #[arg(short, long, value_name = "CODES", value_delimiter = ',')]
    expand: Vec<String>,
}

impl Table {
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
        let mut table = base::RootTable::new(config.grouping, config.detail_level);
        if let Some(grouping) = self.scope_opts.grouping {
            table.set_grouping(grouping);
        }
        if let Some(detail) = self.detail {
            table.set_detail_level(detail);
        }
        for column in &self.sort {
            table.sort_by(*column);
        }

        let filter = cli::util::filter_from_opts(&self.scope_opts, config);
        let rows = table
            .rows(source, names, &filter)
            .context("failed to load top-level rows")?;
        log::debug!(
            "loaded {} {} rows grouped by {}",
            rows.len(),
            table.detail_level(),
            table.grouping()
        );
        let controller = base::DrillController::new(source, names, table.grouping(), &filter);
        let mut nodes = table.tree(&controller, rows.clone())?;
        for code in &self.expand {
            let code = base::ClassificationCode::normalize(code);
            let Some(node) = base::TableNode::find_expandable(&nodes, &code) else {
                anyhow::bail!("no expandable row '{}'", code);
            };
            let slot = node.slot.clone();
            let expanded = table.toggle(&slot, &code);
            log::info!("{} '{}'", if expanded { "expanded" } else { "collapsed" }, code);
            nodes = table.tree(&controller, rows.clone())?;
        }

        Ok(cli::Output::Table(base::tree::fordrill::Config {
            charset: cli::util::charset_from_config(config),
            grouping: controller.grouping(),
            nodes,
        }))
    }
}
