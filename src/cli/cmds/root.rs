use anyhow::Context;

use crate::base;
use crate::cli;

/// Budget execution drill-down
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Increase log verbosity, once for info and twice for debug
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Table(cli::cmds::table::Table),
    Drill(cli::cmds::drill::Drill),
}

impl Root {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let names = fs.read::<base::NameTable>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::NameTable>().display()
            )
        })?;
        let source = base::FsSource::new(fs);

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Table(cmd) => cmd.run(&source, &names, &config),
            Commands::Drill(cmd) => cmd.run(&source, &names, &config),
        }
    }
}
