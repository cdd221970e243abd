//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod styles;

pub use check::CheckReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use styles::{StyleInfo, StylesReport};
