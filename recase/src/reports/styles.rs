//! Styles command report data structures.

use super::output::{Output, Report};

/// One built-in style as shown to the user.
#[derive(Debug)]
pub struct StyleInfo {
    /// Canonical name.
    pub name: &'static str,
    /// Built-in alternative names.
    pub aliases: &'static [&'static str],
    /// Sample phrase rendered in the style.
    pub example: String,
}

/// Report listing every style plus the configured aliases.
#[derive(Debug)]
pub struct StylesReport {
    pub styles: Vec<StyleInfo>,
    /// User aliases from recase.toml as (alias, style) pairs.
    pub user_aliases: Vec<(String, &'static str)>,
    pub default_style: &'static str,
}

impl Report for StylesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Styles");
        let width = self.styles.iter().map(|s| s.name.len()).max().unwrap_or(0);
        let example_width = self
            .styles
            .iter()
            .map(|s| s.example.len())
            .max()
            .unwrap_or(0);
        for style in &self.styles {
            out.preformatted(&format!(
                "  {:<width$}  {:<example_width$}  {}",
                style.name,
                style.example,
                style.aliases.join(", "),
            ));
        }

        if !self.user_aliases.is_empty() {
            out.newline();
            out.section("Aliases");
            for (alias, style) in &self.user_aliases {
                out.list_item(&format!("{} -> {}", alias, style));
            }
        }

        out.newline();
        out.key_value("Default", self.default_style);
    }
}
