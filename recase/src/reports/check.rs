//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of a validated recase.toml.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub default_style: &'static str,
    /// Whether the default came from the file or the built-in fallback.
    pub default_is_explicit: bool,
    /// (alias, style) pairs in file order.
    pub aliases: Vec<(String, &'static str)>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let default = if self.default_is_explicit {
            self.default_style.to_string()
        } else {
            format!("{} (built-in)", self.default_style)
        };
        out.key_value_indented("default style", &default);

        let count = self.aliases.len();
        out.key_value_indented(
            "aliases",
            &format!("{} alias{}", count, if count == 1 { "" } else { "es" }),
        );
        for (alias, style) in &self.aliases {
            out.preformatted(&format!("    {} -> {}", alias, style));
        }
    }
}
