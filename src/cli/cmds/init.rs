use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a data directory in the current directory
///
/// Writes the config and creates an empty name table and empty metric files
/// where they are missing. Existing data files are never overwritten.
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing directory's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let fresh = !fs.is_repo();
        self.write_config(fs, fresh)?;
        let created = fs
            .seed()
            .with_context(|| format!("failed to seed '{}'", fs.dir().display()))?;
        for path in &created {
            log::info!("created '{}'", path.display());
        }

        Ok(match (fresh, self.reset_config) {
            (true, _) => cli::Output::String(format!(
                "Data directory initialized in '{}'",
                fs.dir().display()
            )),
            (false, true) => cli::Output::Str("Configuration reset to defaults."),
            (false, false) => cli::Output::String(format!(
                "Data directory reinitialized in '{}'",
                fs.dir().display()
            )),
        })
    }

    /// A fresh directory or `--reset-config` gets the defaults; otherwise the
    /// existing config is validated and rewritten in canonical form.
    fn write_config(&self, fs: &base::Fs, fresh: bool) -> anyhow::Result<()> {
        let path = fs.path::<base::Config>();
        let config = if fresh || self.reset_config {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))
    }
}
