mod check;
mod completions;
mod convert;
mod styles;
mod tokenize;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use recase_config::Config;
use styles::StylesCommand;
use tokenize::TokenizeCommand;

use crate::logging::{self, LogLevelArg};

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for recase_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for recase_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

/// Options shared by every subcommand.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to recase.toml (defaults to ./recase.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides RECASE_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

impl GlobalArgs {
    /// Load the config, falling back to defaults when no file is found.
    pub fn load_config(&self) -> recase_config::Result<Config> {
        Config::load(self.config.as_deref(), Path::new("."))
    }
}

#[derive(Parser)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Convert identifiers between naming conventions")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let env_level = std::env::var(logging::LOG_ENV).ok();
        logging::init(logging::resolve_level(
            self.global.log_level,
            env_level.as_deref(),
        ));

        match &self.command {
            Commands::Convert(cmd) => cmd.run(&self.global),
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Styles(cmd) => cmd.run(&self.global),
            Commands::Check(cmd) => cmd.run(&self.global),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert strings to a naming style
    Convert(ConvertCommand),

    /// Show the words a string splits into
    Tokenize(TokenizeCommand),

    /// List available styles and configured aliases
    Styles(StylesCommand),

    /// Validate recase.toml
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
