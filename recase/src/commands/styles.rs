use clap::Args;
use eyre::Result;

use super::{GlobalArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct StylesCommand {}

impl StylesCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config().unwrap_or_exit();

        let report = ops::styles(&config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
