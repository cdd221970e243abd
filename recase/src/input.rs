//! Collecting the strings a command operates on.
//!
//! Inputs are `Option<String>`: a stdin line that is not valid UTF-8 carries
//! no text and converts to an empty line instead of aborting the batch.

use std::io::{self, BufRead};

use eyre::{Context, Result};

/// Use the positional arguments, or every stdin line when there are none.
pub fn collect(args: &[String]) -> Result<Vec<Option<String>>> {
    if !args.is_empty() {
        return Ok(args.iter().cloned().map(Some).collect());
    }
    read_lines(io::stdin().lock()).wrap_err("failed to read input from stdin")
}

/// Read all lines, dropping `\n` and `\r\n` terminators.
///
/// Lines that are not valid UTF-8 come back as `None`.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<Option<String>>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let text = String::from_utf8(bytes).ok();
            if text.is_none() {
                log::debug!("skipping input line that is not valid UTF-8");
            }
            Ok(text)
        })
        .collect()
}
