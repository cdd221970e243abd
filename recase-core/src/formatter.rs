//! Reassembling words into a naming convention.

use crate::{CaseStyle, Result, Text, TokenSequence, tokenize};

/// Render a word sequence in the given style.
///
/// The empty sequence renders as the empty string for every style.
pub fn format(tokens: &TokenSequence, style: CaseStyle) -> String {
    let policy = style.policy();
    let mut out = String::new();
    for (i, word) in tokens.iter().enumerate() {
        if i == 0 {
            (policy.first)(word.as_str(), &mut out);
        } else {
            out.push_str(policy.separator);
            (policy.rest)(word.as_str(), &mut out);
        }
    }
    out
}

/// Render a word sequence in the style selected by `name`.
///
/// Unknown style names fail with [`Error::UnknownStyle`](crate::Error::UnknownStyle).
pub fn format_named(tokens: &TokenSequence, name: &str) -> Result<String> {
    let style: CaseStyle = name.parse()?;
    Ok(format(tokens, style))
}

/// Tokenize `input` and render it in `style`.
pub fn convert<T: Text + ?Sized>(input: &T, style: CaseStyle) -> String {
    format(&tokenize(input), style)
}

/// Tokenize `input` and render it in the style selected by `name`.
///
/// The style is resolved before the input is looked at, so an unknown name
/// fails even for empty input.
pub fn convert_named<T: Text + ?Sized>(input: &T, name: &str) -> Result<String> {
    let style: CaseStyle = name.parse()?;
    Ok(convert(input, style))
}
