mod check;
mod generate;
mod info;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use restbind_descriptor::{ApiDescription, Config};

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for restbind_descriptor::Result<T> {
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

/// Inputs shared by the commands that render artifacts.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the API description dump (JSON)
    #[arg(short, long)]
    pub description: PathBuf,

    /// Path to restbind.toml (defaults to ./restbind.toml; optional)
    #[arg(short, long, default_value = "restbind.toml")]
    pub config: PathBuf,
}

impl InputArgs {
    pub fn load(&self) -> (ApiDescription, Config) {
        let api = ApiDescription::open(&self.description).unwrap_or_exit();
        let config = Config::open_or_default(&self.config).unwrap_or_exit();
        (api, config)
    }
}

#[derive(Parser)]
#[command(name = "restbind")]
#[command(version)]
#[command(about = "Generate Java REST client bindings from an API description")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from an API description
    Generate(GenerateCommand),

    /// Render every artifact in memory and report failures
    Check(CheckCommand),

    /// Show what an API description contains
    Info(InfoCommand),
}
