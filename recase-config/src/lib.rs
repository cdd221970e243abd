//! `recase.toml` parsing and validation.
//!
//! The config file is optional. It sets the style used when none is given
//! and defines extra names for built-in styles:
//!
//! ```toml
//! [defaults]
//! style = "snake"
//!
//! [aliases]
//! css = "kebab"
//! js = "camel"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

pub use error::{Error, Result, SourceContext};
use indexmap::IndexMap;
use recase_core::CaseStyle;

/// Style used when neither the command line nor the config picks one.
pub const DEFAULT_STYLE: CaseStyle = CaseStyle::Kebab;

/// Validated contents of a `recase.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `None` when the file does not set `defaults.style`
    default_style: Option<CaseStyle>,
    aliases: IndexMap<String, CaseStyle>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse_config(s, Config::FILENAME)
    }
}

impl Config {
    /// Conventional config file name.
    pub const FILENAME: &'static str = "recase.toml";

    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config = parse::parse_config(&content, &path.display().to_string())?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config for a run.
    ///
    /// An explicit path must exist. Without one, `recase.toml` in `search_dir`
    /// is used when present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = Self::default_path(search_dir);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            log::debug!("no {} in {}, using defaults", Self::FILENAME, search_dir.display());
            Ok(Self::default())
        }
    }

    /// Where `load` looks for a config inside `dir`.
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(Self::FILENAME)
    }

    pub fn default_style(&self) -> CaseStyle {
        self.default_style.unwrap_or(DEFAULT_STYLE)
    }

    /// Whether the default style was set in the file.
    pub fn has_explicit_default(&self) -> bool {
        self.default_style.is_some()
    }

    /// User-defined aliases in file order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, CaseStyle)> {
        self.aliases.iter().map(|(name, style)| (name.as_str(), *style))
    }

    /// Resolve a style name against the aliases, then the built-in names.
    ///
    /// `None` selects the default style.
    pub fn resolve_style(&self, name: Option<&str>) -> recase_core::Result<CaseStyle> {
        let Some(name) = name else {
            return Ok(self.default_style());
        };
        let key = name.trim().to_ascii_lowercase();
        match self.aliases.get(&key) {
            Some(style) => Ok(*style),
            None => name.parse(),
        }
    }
}
