use miette::Diagnostic;
use thiserror::Error;

/// Result type for engine operations that can violate the caller contract.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised at the engine's call boundary.
///
/// Malformed *input text* is never an error; it tokenizes to nothing. These
/// variants cover arguments the caller controls: the style selector and
/// hand-built words.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unknown case style '{name}'")]
    #[diagnostic(code(recase::unknown_style), help("valid styles are: {expected}"))]
    UnknownStyle { name: String, expected: String },

    #[error("invalid word '{word}': {reason}")]
    #[diagnostic(
        code(recase::invalid_word),
        help("words may only contain ASCII letters and digits")
    )]
    InvalidWord { word: String, reason: &'static str },
}

impl Error {
    /// Create an unknown style error listing every built-in style name.
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Error::UnknownStyle {
            name: name.into(),
            expected: crate::CaseStyle::names(),
        }
    }

    pub(crate) fn invalid_word(word: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidWord {
            word: word.into(),
            reason,
        }
    }
}
