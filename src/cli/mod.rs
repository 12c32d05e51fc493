use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "compliance-bot",
    about = "Generates a Companies Act, 2013 compliance report from a short company questionnaire",
    version,
    author,
    long_about = None
)]
pub struct ComplianceCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to an agent configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the questionnaire and generate a compliance report
    Report {
        /// Answer file (YAML or JSON) used to pre-fill the form
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Directory the report is saved to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Never prompt; take every answer from the answer file
        #[arg(long, default_value = "false")]
        non_interactive: bool,
    },

    /// Show the questionnaire
    Questions {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a blank answer file
    Template {
        /// Where to write it; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
