pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
