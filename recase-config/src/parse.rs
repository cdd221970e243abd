//! Raw TOML shape and validation into [`Config`].

use indexmap::IndexMap;
use recase_core::CaseStyle;
use serde::Deserialize;
use toml::Spanned;

use crate::{Config, Result, error::SourceContext};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    defaults: RawDefaults,
    #[serde(default)]
    aliases: IndexMap<Spanned<String>, Spanned<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefaults {
    style: Option<Spanned<String>>,
}

/// Parse and validate config content.
pub(crate) fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let default_style = raw
        .defaults
        .style
        .as_ref()
        .map(|style| builtin_style(&ctx, style))
        .transpose()?;

    let mut aliases = IndexMap::with_capacity(raw.aliases.len());
    for (key, target) in &raw.aliases {
        let name = key.get_ref().trim().to_ascii_lowercase();
        if let Some(reason) = alias_problem(&name) {
            return Err(ctx.invalid_alias_error(key.get_ref(), reason, key.span()));
        }
        let style = builtin_style(&ctx, target)?;
        if aliases.insert(name, style).is_some() {
            return Err(ctx.invalid_alias_error(
                key.get_ref(),
                "alias is defined more than once (alias names ignore case)",
                key.span(),
            ));
        }
    }

    Ok(Config {
        default_style,
        aliases,
    })
}

/// Aliases may only point at built-in styles, never at other aliases.
fn builtin_style(ctx: &SourceContext, name: &Spanned<String>) -> Result<CaseStyle> {
    name.get_ref()
        .parse()
        .map_err(|_| ctx.unknown_style_error(name.get_ref(), name.span()))
}

fn alias_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("alias names must not be empty".to_string());
    }
    if name.contains(char::is_whitespace) {
        return Some("alias names must not contain whitespace".to_string());
    }
    if CaseStyle::is_known_name(name) {
        return Some(format!("'{name}' is already the name of a built-in style"));
    }
    None
}
