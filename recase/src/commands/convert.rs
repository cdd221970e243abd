use clap::Args;
use eyre::Result;

use super::{GlobalArgs, UnwrapOrExit};
use crate::{input, ops};

#[derive(Args)]
pub struct ConvertCommand {
    /// Target style or alias (defaults to the configured style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Strings to convert (reads lines from stdin when omitted)
    pub inputs: Vec<String>,
}

impl ConvertCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config().unwrap_or_exit();
        // Resolve before reading stdin so a bad style fails immediately
        let style = config
            .resolve_style(self.style.as_deref())
            .unwrap_or_exit();

        let inputs = input::collect(&self.inputs)?;
        for line in ops::convert_all(&inputs, style) {
            println!("{}", line);
        }

        Ok(())
    }
}
