//! ghdash - a terminal dashboard for a GitHub user's public profile
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
