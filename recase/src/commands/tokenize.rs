use clap::Args;
use eyre::Result;

use crate::{input, ops};

#[derive(Args)]
pub struct TokenizeCommand {
    /// Print each word list as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Strings to tokenize (reads lines from stdin when omitted)
    pub inputs: Vec<String>,
}

impl TokenizeCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = input::collect(&self.inputs)?;
        for line in ops::tokenize_all(&inputs, self.json)? {
            println!("{}", line);
        }
        Ok(())
    }
}
