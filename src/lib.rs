//! Mini URL Shortener - a terminal front-end for a URL shortening service
//!
//! Submits long URLs to a shortener backend and shows the most recent short
//! links, refreshing them on a timer.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `client`: HTTP client for the backend API
//! - `view`: View state and the controller that drives it
//! - `interfaces`: User interfaces (one-shot CLI, TUI)
//! - `config`: Configuration loading and validation
//! - `system`: Logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod system;
pub mod view;
