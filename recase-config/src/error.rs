use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of the config being validated.
///
/// Carried through validation so every error can point into the file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown style error pointing at the offending value.
    pub fn unknown_style_error(
        &self,
        name: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownStyle {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            expected: recase_core::CaseStyle::names(),
        })
    }

    /// Create an invalid alias error pointing at the alias key.
    pub fn invalid_alias_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAlias {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(recase::config::io),
        help("pass --config only for files that exist, or create a recase.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recase.toml")]
    #[diagnostic(code(recase::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown case style '{name}'")]
    #[diagnostic(code(recase::config::unknown_style), help("valid styles are: {expected}"))]
    UnknownStyle {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a built-in style")]
        span: SourceSpan,
        name: String,
        expected: String,
    },

    #[error("invalid alias '{name}'")]
    #[diagnostic(code(recase::config::invalid_alias), help("{reason}"))]
    InvalidAlias {
        #[source_code]
        src: NamedSource<String>,
        #[label("alias defined here")]
        span: SourceSpan,
        name: String,
        reason: String,
    },
}
