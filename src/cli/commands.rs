//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PagerDuty adapter CLI
#[derive(Parser, Debug)]
#[command(name = "pagerduty-adapter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Timeout for the HTTP client used to make requests to the datasource (seconds)
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch a single page
    GetPage {
        /// Page request file (JSON)
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Inline page request JSON
        #[arg(long)]
        request_json: Option<String>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
}
