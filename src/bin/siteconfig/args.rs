use std::io::Write;
use std::path;

use crate::error::*;

/// Where the build environment comes from
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct EnvArgs {
    /// Directory to start searching for `.env` from [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub(crate) cwd: Option<path::PathBuf>,

    /// Read this environment file instead of searching for `.env`
    #[arg(long, value_name = "FILE", conflicts_with = "no_env_file")]
    pub(crate) env_file: Option<path::PathBuf>,

    /// Only use the process environment
    #[arg(long)]
    pub(crate) no_env_file: bool,
}

impl EnvArgs {
    pub(crate) fn load_env(&self) -> Result<siteconfig::Env> {
        if self.no_env_file {
            log::debug!("Skipping environment file");
            return Ok(siteconfig::Env::from_process());
        }

        if let Some(env_file) = self.env_file.as_deref() {
            log::debug!("Using environment file `{}`", env_file.display());
            let file = siteconfig::EnvFile::from_file(env_file)?;
            return Ok(siteconfig::Env::from_process().with_env_file(file));
        }

        let cwd = match self.cwd.clone() {
            Some(cwd) => cwd,
            None => std::env::current_dir()
                .map_err(|e| anyhow::format_err!("Failed to read current directory: {e}"))?,
        };
        Ok(siteconfig::Env::from_cwd(cwd)?)
    }

    pub(crate) fn load_config(&self) -> Result<siteconfig::SiteConfiguration> {
        let env = self.load_env()?;
        let config = siteconfig::resolve(&env);

        let search = &config.algolia_search;
        if search.enabled {
            let missing = search.missing_credentials();
            if !missing.is_empty() {
                log::info!(
                    "Search is enabled but {} is not set, the search box will not work",
                    missing.join(", ")
                );
            }
        }

        Ok(config)
    }
}

pub(crate) fn init_logging(level: log::LevelFilter, colored: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            let style = f.default_level_style(record.level());
            let level = format!("[{}]", record.level()).to_lowercase();
            writeln!(f, "{style}{level:8}{style:#} {}", record.args())
        });
    }

    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });

    builder.init();
}
