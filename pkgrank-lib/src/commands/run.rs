//! Command dispatch logic for pkgrank

use super::{InitArgs, ScoreArgs, ValidateArgs, init_config, score_packages, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pkgrank", bin_name = "pkgrank", version, author)]
#[command(about = "Rate the quality of open-source packages")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: PkgrankSubcommand,
}

#[derive(Subcommand, Debug)]
enum PkgrankSubcommand {
    /// Score GitHub repositories and npm packages
    Score(Box<ScoreArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        PkgrankSubcommand::Score(score_args) => score_packages(host, score_args).await,
        PkgrankSubcommand::Init(init_args) => init_config(host, init_args),
        PkgrankSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
