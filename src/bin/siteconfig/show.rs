use crate::args;
use crate::error::*;

/// Print the resolved site configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ShowArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: siteconfig::Format,

    #[command(flatten, next_help_heading = "ENVIRONMENT")]
    env: args::EnvArgs,
}

impl ShowArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.env.load_config()?;
        let rendered = self.format.render(&config)?;
        anstream::println!("{rendered}");
        Ok(())
    }
}
