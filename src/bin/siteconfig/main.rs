mod args;
mod debug;
mod error;
mod show;

use clap::Parser;

use crate::error::*;

/// Resolve the site configuration for a static site build
#[derive(Debug, clap::Parser)]
#[command(name = "siteconfig", version, about)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Show(show::ShowArgs),

    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Show(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(cli.verbose.log_level_filter(), colored_stderr);

    if let Err(err) = cli.command.run() {
        log::error!("{}", error_message(&err));
        return proc_exit::Code::FAILURE.ok();
    }

    proc_exit::Code::SUCCESS.ok()
}

// `Status` already renders its sources
fn error_message(err: &anyhow::Error) -> String {
    err.to_string()
}
