use crate::args;
use crate::error::*;

/// Print configuration debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints where each configuration variable comes from
    Env {
        #[command(flatten, next_help_heading = "ENVIRONMENT")]
        env: args::EnvArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Env { env } => {
                let env = env.load_env()?;
                let name_style = anstyle::Style::new().bold();
                let unset_style = anstyle::AnsiColor::Yellow.on_default();
                for name in siteconfig::CONSUMED_VARS {
                    let origin = env.origin(name);
                    let origin_style = if origin == siteconfig::Origin::Unset {
                        unset_style
                    } else {
                        anstyle::Style::new()
                    };
                    anstream::println!(
                        "{name_style}{name}{name_style:#}: {origin_style}{origin}{origin_style:#}"
                    );
                }
            }
        }

        Ok(())
    }
}
