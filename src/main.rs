use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use noonrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Look up rates interactively, one date per line
    Session,
    /// Look up the noon rate for one or more past dates (YYYY-MM-DD)
    Lookup {
        #[arg(required = true)]
        dates: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => noonrate::cli::setup::setup(),
        Some(Commands::Session) => {
            noonrate::run_command(noonrate::AppCommand::Session, cli.config_path.as_deref()).await
        }
        Some(Commands::Lookup { dates }) => {
            noonrate::run_command(
                noonrate::AppCommand::Lookup(dates),
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
