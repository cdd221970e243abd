use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use recase_config::Config;

use super::{GlobalArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let path = global
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(Config::FILENAME));
        let config = Config::from_file(&path).unwrap_or_exit();

        let report = ops::check(&config, &path);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
