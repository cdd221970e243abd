//! Boundary detection rules.
//!
//! Each rule is a pure string-to-string pass that marks word boundaries with
//! [`BOUNDARY`]. Rules run in the fixed order of [`PIPELINE`], and each pass
//! sees the complete output of the previous one.

/// Marker written wherever two words meet.
pub const BOUNDARY: char = ' ';

/// Explicit word separators. Any run of these counts as one boundary.
pub const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// A named boundary-insertion pass.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryRule {
    /// Short identifier used in trace output
    pub name: &'static str,
    /// The pass itself
    pub apply: fn(&str) -> String,
}

/// Boundary rules in application order.
pub const PIPELINE: [BoundaryRule; 3] = [
    BoundaryRule {
        name: "case-transition",
        apply: split_case_transitions,
    },
    BoundaryRule {
        name: "separators",
        apply: collapse_separators,
    },
    BoundaryRule {
        name: "noise",
        apply: mark_noise,
    },
];

/// Run every rule of [`PIPELINE`] over `input`.
pub fn annotate(input: &str) -> String {
    PIPELINE.iter().fold(input.to_string(), |text, rule| {
        let next = (rule.apply)(&text);
        log::trace!("boundary rule {}: {:?} -> {:?}", rule.name, text, next);
        next
    })
}

/// Insert a boundary between a lowercase letter and a following uppercase letter.
///
/// Only lower-to-upper transitions count, so runs of capitals stay together:
/// `XMLHttpRequest` becomes `XMLHttp Request`.
pub fn split_case_transitions(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
            out.push(BOUNDARY);
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Replace each run of spaces, hyphens and underscores with a single boundary.
pub fn collapse_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if SEPARATORS.contains(&c) {
            if !in_run {
                out.push(BOUNDARY);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Turn every remaining ASCII symbol or control character into a boundary.
///
/// Non-ASCII characters are left alone; word cleaning strips them later
/// without splitting the word.
pub fn mark_noise(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_alphanumeric() {
                BOUNDARY
            } else {
                c
            }
        })
        .collect()
}
