mod check;
mod completions;
mod list;
mod publish;
mod scope;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use publish::PublishCommand;
use scope::ScopeCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for genfence_config::Result<T> {
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

#[derive(Parser)]
#[command(name = "genfence")]
#[command(version)]
#[command(about = "Track generator output scopes and publish build artifacts")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Scope(cmd) => cmd.run(),
            Commands::Publish(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate generator configuration
    Check(CheckCommand),

    /// List configured generators
    List(ListCommand),

    /// Classify paths against a generator's output scope
    Scope(ScopeCommand),

    /// Copy build artifacts into a local destination repository
    Publish(PublishCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
