use crate::base;

pub const GROUPING_HELP: &str = "Primary classification dimension [default: from config]";
pub const GROUPING_HELP_LONG: &str = "Primary classification dimension [default: from config]

fn: functional classification drives the hierarchy; leaf rows show economic codes
ec: economic classification drives the hierarchy; leaf rows show functional codes";

#[derive(clap::Args)]
pub struct ScopeOpts {
    #[arg(
        short,
        long,
        value_name = "GROUPING",
        help = GROUPING_HELP,
        long_help = GROUPING_HELP_LONG,
    )]
    pub grouping: Option<base::Grouping>,

    /// Reporting years to include [default: from config]
    ///
    /// Use commas to separate multiple years. Records that carry no year are
    /// always included.
    #[arg(short, long, value_name = "YEARS", value_delimiter = ',')]
    pub years: Vec<u16>,
}
