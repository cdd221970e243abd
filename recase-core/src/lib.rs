//! Word tokenization and case formatting engine.
//!
//! Splits identifier-like strings into lowercase words and reassembles them
//! in a target naming convention:
//!
//! ```
//! use recase_core::{CaseStyle, convert};
//!
//! assert_eq!(convert("firstName", CaseStyle::Kebab), "first-name");
//! assert_eq!(convert("user@name!", CaseStyle::Camel), "userName");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod boundary;
mod error;
mod formatter;
mod style;
mod text;
mod tokenizer;
mod word;

pub use error::{Error, Result};
pub use formatter::{convert, convert_named, format, format_named};
pub use style::CaseStyle;
pub use text::Text;
pub use tokenizer::tokenize;
pub use word::{TokenSequence, Word};
