//! Command logic kept apart from argument parsing and printing.

use std::path::Path;

use eyre::Result;
use recase_config::Config;
use recase_core::{CaseStyle, convert, tokenize};

use crate::reports::{CheckReport, StyleInfo, StylesReport};

/// Convert every input, one output per input.
///
/// Inputs without text convert to empty strings.
pub fn convert_all(inputs: &[Option<String>], style: CaseStyle) -> Vec<String> {
    log::debug!("converting {} input(s) to {}", inputs.len(), style);
    inputs.iter().map(|input| convert(input, style)).collect()
}

/// Tokenize every input into a printable line.
///
/// Lines are space-separated words, or JSON arrays when `json` is set.
pub fn tokenize_all(inputs: &[Option<String>], json: bool) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| -> Result<String> {
            let words = tokenize(input);
            if json {
                Ok(serde_json::to_string(&words)?)
            } else {
                Ok(words.to_string())
            }
        })
        .collect()
}

/// Build the styles listing for the given config.
pub fn styles(config: &Config) -> StylesReport {
    StylesReport {
        styles: CaseStyle::ALL
            .iter()
            .map(|style| StyleInfo {
                name: style.as_str(),
                aliases: style.aliases(),
                example: style.example(),
            })
            .collect(),
        user_aliases: user_aliases(config),
        default_style: config.default_style().as_str(),
    }
}

/// Build the summary for a config that passed validation.
pub fn check(config: &Config, path: &Path) -> CheckReport {
    CheckReport {
        config_path: path.to_path_buf(),
        default_style: config.default_style().as_str(),
        default_is_explicit: config.has_explicit_default(),
        aliases: user_aliases(config),
    }
}

fn user_aliases(config: &Config) -> Vec<(String, &'static str)> {
    config
        .aliases()
        .map(|(alias, style)| (alias.to_string(), style.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{BufferOutput, Report};

    fn strings(items: &[&str]) -> Vec<Option<String>> {
        items.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_convert_all_keeps_order_and_blanks() {
        let inputs = strings(&["firstName", "", "User ID", "@@"]);
        assert_eq!(
            convert_all(&inputs, CaseStyle::Snake),
            ["first_name", "", "user_id", ""]
        );
    }

    #[test]
    fn test_inputs_without_text_become_blank() {
        let inputs = vec![
            Some("firstName".to_string()),
            None,
            Some("User ID".to_string()),
        ];
        assert_eq!(
            convert_all(&inputs, CaseStyle::Snake),
            ["first_name", "", "user_id"]
        );
        assert_eq!(
            tokenize_all(&inputs, true).unwrap(),
            [r#"["first","name"]"#, "[]", r#"["user","id"]"#]
        );
    }

    #[test]
    fn test_tokenize_all() {
        let inputs = strings(&["someValue_here", "!!"]);
        assert_eq!(tokenize_all(&inputs, false).unwrap(), ["some value here", ""]);
        assert_eq!(
            tokenize_all(&inputs, true).unwrap(),
            [r#"["some","value","here"]"#, "[]"]
        );
    }

    #[test]
    fn test_styles_report() {
        let config: Config = "[defaults]\nstyle = \"snake\"\n[aliases]\njs = \"camel\"\n"
            .parse()
            .unwrap();
        let mut out = BufferOutput::default();
        styles(&config).render(&mut out);
        insta::assert_snapshot!(out.text, @r"
        Styles:
          kebab     user-account-id  kebab-case, kebabcase, dash
          camel     userAccountId    camelcase, camel-case, lower-camel
          pascal    UserAccountId    pascalcase, pascal-case, upper-camel
          snake     user_account_id  snake_case, snakecase, snake-case
          dot       user.account.id  dot.case, dotcase, dot-case
          constant  USER_ACCOUNT_ID  screaming_snake_case, screaming-snake, constant_case, upper-snake
          train     User-Account-Id  train-case, traincase, header
          title     User Account Id  title case, titlecase, title-case
          flat      useraccountid    flatcase, flat-case

        Aliases:
          - js -> camel

        Default: snake
        ");
    }

    #[test]
    fn test_check_report() {
        let config: Config = "[aliases]\ncss = \"kebab\"\nbash = \"snake\"\n"
            .parse()
            .unwrap();
        let mut out = BufferOutput::default();
        check(&config, Path::new("recase.toml")).render(&mut out);
        insta::assert_snapshot!(out.text, @r"
        ✓ recase.toml is valid

          default style: kebab (built-in)
          aliases: 2 aliases
            css -> kebab
            bash -> snake
        ");
    }
}
