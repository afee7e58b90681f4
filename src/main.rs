use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use mini_shortener::cli::{Cli, Commands};
use mini_shortener::client::HttpUrlClient;
use mini_shortener::config::AppConfig;
use mini_shortener::interfaces::cli as one_shot;
use mini_shortener::system::{LogTarget, init_logging};
use mini_shortener::view::ViewController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::generate_sample_config());
        return Ok(());
    }

    let mut config = AppConfig::load(cli.config.as_deref()).map_err(|e| anyhow!(e))?;
    config
        .apply_overrides(cli.base_url.as_deref(), cli.log_level.as_deref())
        .map_err(|e| anyhow!(e))?;

    let command = cli.command.clone().unwrap_or_else(default_command);

    let target = if is_interactive(&command) {
        LogTarget::FileOnly
    } else {
        LogTarget::Console
    };
    let guard = init_logging(&config.logging, target).context("Failed to initialize logging")?;

    info!("Using shortener API at {}", config.api.base_url);
    debug!("Effective config: {:?}", config);

    let api = Arc::new(HttpUrlClient::new(&config.api));
    let controller = Arc::new(ViewController::new(api, &config.view));

    let result = match command {
        #[cfg(feature = "tui")]
        Commands::Tui => {
            mini_shortener::interfaces::tui::run_tui(controller, &config.view)
                .await
                .map_err(|e| anyhow!("TUI error: {}", e))?;
            Ok(())
        }
        Commands::List => one_shot::list_urls(&controller).await,
        Commands::Shorten { url } => one_shot::shorten_url(&controller, &url).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "[ERROR]".red().bold(), e.format_colored());
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn default_command() -> Commands {
    Commands::Tui
}

#[cfg(not(feature = "tui"))]
fn default_command() -> Commands {
    Commands::List
}

fn is_interactive(command: &Commands) -> bool {
    #[cfg(feature = "tui")]
    if matches!(command, Commands::Tui) {
        return true;
    }
    let _ = command;
    false
}
