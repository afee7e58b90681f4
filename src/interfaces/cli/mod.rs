//! One-shot CLI mode
//!
//! Runs a single controller operation without mounting the view and prints
//! the resulting state.

use std::fmt;

use colored::Colorize;

use crate::errors::ViewError;
use crate::view::format::{EMPTY_LIST_TEXT, list_heading, short_link_label};
use crate::view::{SubmitOutcome, ViewController, ViewState};

#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    RequestError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ValidationError(msg) => format!("Validation error: {}", msg),
            CliError::RequestError(msg) => format!("Request error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        match self {
            CliError::ValidationError(msg) => {
                format!("{} {}", "Validation error:".yellow().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ViewError> for CliError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::Validation(msg) => CliError::ValidationError(msg),
            ViewError::Request { message, .. } => CliError::RequestError(message),
        }
    }
}

/// Surface the state's error, if any, as a command failure
fn check_state(state: &ViewState) -> Result<(), CliError> {
    match &state.error {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}

/// Render the list the way the TUI shows it, one entry per line
pub fn format_listing(state: &ViewState, base_url: &str, display_limit: usize) -> String {
    let mut out = Vec::with_capacity(state.entries.len() + 4);
    out.push(list_heading(display_limit).bold().green().to_string());
    out.push(String::new());

    if state.entries.is_empty() {
        out.push(format!("  {}", EMPTY_LIST_TEXT.dimmed()));
    } else {
        for entry in &state.entries {
            out.push(format!(
                "  {} -> {}",
                short_link_label(base_url, &entry.short_code).cyan(),
                entry.original_url.blue().underline()
            ));
        }
    }

    out.push(String::new());
    out.push(format!(
        "{} Total URLs Stored: {}",
        "ℹ".bold().blue(),
        state.total_count.to_string().green()
    ));
    out.join("\n")
}

pub async fn list_urls(controller: &ViewController) -> Result<(), CliError> {
    controller.fetch_urls().await;
    let state = controller.snapshot();
    check_state(&state)?;

    println!(
        "{}",
        format_listing(&state, controller.base_url(), controller.display_limit())
    );
    Ok(())
}

pub async fn shorten_url(controller: &ViewController, url: &str) -> Result<(), CliError> {
    let outcome = controller.submit(url).await;
    let state = controller.snapshot();
    check_state(&state)?;

    if matches!(outcome, SubmitOutcome::Created { .. }) {
        println!("{} Shortened {}", "✓".bold().green(), url.trim().blue());
        println!();
    }
    println!(
        "{}",
        format_listing(&state, controller.base_url(), controller.display_limit())
    );
    Ok(())
}
