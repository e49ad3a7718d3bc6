use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (api, config) = self.input.load();

        let report = ops::check(&api, config.java, &self.input.description);
        report.render(&mut TerminalOutput);

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
