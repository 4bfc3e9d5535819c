//! Logging, color, and report output shared by the commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::facts::{PackageOutcome, ProviderResult};
use crate::reports::{ReportablePackage, generate_console, generate_json, generate_json_lines};
use camino::Utf8PathBuf;
use clap::ValueEnum;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Where and how scoring results are written
#[derive(Debug)]
pub struct ReportOptions {
    pub color: ColorMode,
    pub json: Option<Utf8PathBuf>,
    pub console: bool,
    pub error_if_disqualified: bool,
}

/// Write per-package failures to the error stream and the scores to the selected reports.
///
/// # Errors
///
/// Returns an error if a report cannot be written, or if `error_if_disqualified` is set
/// and a package failed to score or did not qualify.
pub fn report<H: Host>(host: &mut H, config: &Config, options: &ReportOptions, outcomes: Vec<PackageOutcome>) -> Result<()> {
    let mut packages = Vec::with_capacity(outcomes.len());
    let mut failures = 0_usize;

    for outcome in outcomes {
        match outcome.result {
            ProviderResult::Found(score) => {
                packages.push(ReportablePackage::new(outcome.url, score, config.qualification_threshold));
            }
            ProviderResult::NotFound(reason) => {
                failures += 1;
                let _ = writeln!(host.error(), "Could not score '{}': {reason}", outcome.url);
            }
            ProviderResult::Error(e) => {
                failures += 1;
                let _ = writeln!(host.error(), "Could not score '{}': {e}", outcome.url);
            }
        }
    }

    if let Some(filename) = &options.json {
        let mut json_output = String::new();
        generate_json(&packages, config.decimal_places, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    if options.console {
        let mut console_output = String::new();
        generate_console(
            &packages,
            options.color.use_colors(),
            config.qualification_threshold,
            config.decimal_places,
            &mut console_output,
        )?;
        let _ = write!(host.output(), "{console_output}");
    }

    // Without an explicit report, records go to the output stream one per line
    if options.json.is_none() && !options.console {
        let mut lines = String::new();
        generate_json_lines(&packages, config.decimal_places, &mut lines)?;
        let _ = write!(host.output(), "{lines}");
    }

    if options.error_if_disqualified {
        let disqualified = packages.iter().filter(|package| !package.qualified).count();
        if failures > 0 || disqualified > 0 {
            bail!("{failures} package(s) could not be scored and {disqualified} package(s) did not qualify");
        }
    }

    Ok(())
}
