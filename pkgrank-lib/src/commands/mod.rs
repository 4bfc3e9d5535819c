//! Command-line interface and orchestration for pkgrank
//!
//! This module implements the CLI commands and coordinates data collection, scoring,
//! and reporting. It handles argument parsing, configuration management, and the
//! high-level workflows.
//!
//! ## Commands
//!
//! - **score**: Collect data for GitHub repository and npm package URLs, score each one,
//!   and report the results
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Output goes through the [`Host`] trait so the commands
//! can be driven in-process by tests.

mod common;
mod config;
mod host;
mod init;
mod run;
mod score;
mod validate;

pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use score::{ScoreArgs, ScorecardArgs, score_packages};
pub use validate::{ValidateArgs, validate_config};
