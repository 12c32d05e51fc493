use anyhow::Result;
use clap::Parser;
use log::{ debug, info };

use compliance_bot::implementations::config::AgentConfig;

mod cli;
use cli::{ ComplianceCli, Commands };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = ComplianceCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Keys may live in a .env file next to the binary's working directory
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let config = match &cli.config {
        Some(path) => AgentConfig::from_file(path)?,
        None => AgentConfig::default(),
    };

    match &cli.command {
        Commands::Report { answers, output, non_interactive } => {
            cli::commands::report::execute(
                config,
                answers.as_deref(),
                output,
                *non_interactive
            ).await?;
        }

        Commands::Questions { format } => {
            cli::commands::questions::execute(format)?;
        }

        Commands::Template { output } => {
            cli::commands::template::execute(output.as_deref())?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
