//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Mini URL Shortener - submit long URLs and watch the latest short links
#[derive(Parser, Debug)]
#[command(name = "mini-shortener")]
#[command(version)]
#[command(about = "Terminal front-end for a URL shortener service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the API base address (e.g. http://localhost:8080)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the log filter (e.g. debug, mini_shortener=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive terminal UI (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Fetch the URL list once and print it
    List,

    /// Shorten a URL, then print the refreshed list
    Shorten {
        /// The long URL to shorten
        url: String,
    },
}
