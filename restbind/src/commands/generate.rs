use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also emit the client facade class
    #[arg(long)]
    pub client: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (api, mut config) = self.input.load();
        if self.client {
            config.java.emit_client = true;
        }

        let report = ops::generate(
            &api,
            config.java,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput);

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
