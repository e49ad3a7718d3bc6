use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use restbind_descriptor::ApiDescription;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to the API description dump (JSON)
    #[arg(short, long)]
    pub description: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let api = ApiDescription::open(&self.description).unwrap_or_exit();

        let report = ops::info(&api, &self.description);
        report.render(&mut TerminalOutput);

        Ok(())
    }
}
