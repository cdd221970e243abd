//! The closed set of output naming conventions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::Error;

/// Output naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CaseStyle {
    /// `user-account-id`
    Kebab,
    /// `userAccountId`
    Camel,
    /// `UserAccountId`
    Pascal,
    /// `user_account_id`
    Snake,
    /// `user.account.id`
    Dot,
    /// `USER_ACCOUNT_ID`
    Constant,
    /// `User-Account-Id`
    Train,
    /// `User Account Id`
    Title,
    /// `useraccountid`
    Flat,
}

/// How a single word is cased before it is appended to the output.
pub(crate) type WordCasing = fn(&str, &mut String);

/// Separator plus per-word casing for one style.
#[derive(Clone, Copy)]
pub(crate) struct StylePolicy {
    pub separator: &'static str,
    pub first: WordCasing,
    pub rest: WordCasing,
}

impl StylePolicy {
    const fn uniform(separator: &'static str, casing: WordCasing) -> Self {
        Self {
            separator,
            first: casing,
            rest: casing,
        }
    }
}

fn lower(word: &str, out: &mut String) {
    out.extend(word.chars().map(|c| c.to_ascii_lowercase()));
}

fn upper(word: &str, out: &mut String) {
    out.extend(word.chars().map(|c| c.to_ascii_uppercase()));
}

fn capitalize(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

impl CaseStyle {
    /// Every style, in display order.
    pub const ALL: [CaseStyle; 9] = [
        CaseStyle::Kebab,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Dot,
        CaseStyle::Constant,
        CaseStyle::Train,
        CaseStyle::Title,
        CaseStyle::Flat,
    ];

    /// Canonical style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Dot => "dot",
            CaseStyle::Constant => "constant",
            CaseStyle::Train => "train",
            CaseStyle::Title => "title",
            CaseStyle::Flat => "flat",
        }
    }

    /// Alternative names accepted when parsing, lowercase.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CaseStyle::Kebab => &["kebab-case", "kebabcase", "dash"],
            CaseStyle::Camel => &["camelcase", "camel-case", "lower-camel"],
            CaseStyle::Pascal => &["pascalcase", "pascal-case", "upper-camel"],
            CaseStyle::Snake => &["snake_case", "snakecase", "snake-case"],
            CaseStyle::Dot => &["dot.case", "dotcase", "dot-case"],
            CaseStyle::Constant => &[
                "screaming_snake_case",
                "screaming-snake",
                "constant_case",
                "upper-snake",
            ],
            CaseStyle::Train => &["train-case", "traincase", "header"],
            CaseStyle::Title => &["title case", "titlecase", "title-case"],
            CaseStyle::Flat => &["flatcase", "flat-case"],
        }
    }

    /// Canonical names of all styles, comma separated.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(CaseStyle::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check whether `name` refers to a built-in style, ignoring case.
    pub fn is_known_name(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    fn lookup(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == name || style.aliases().contains(&name.as_str()))
    }

    /// A sample phrase rendered in this style, for help output.
    pub fn example(&self) -> String {
        crate::convert("user account id", *self)
    }

    pub(crate) fn policy(&self) -> StylePolicy {
        match self {
            CaseStyle::Kebab => StylePolicy::uniform("-", lower),
            CaseStyle::Snake => StylePolicy::uniform("_", lower),
            CaseStyle::Dot => StylePolicy::uniform(".", lower),
            CaseStyle::Flat => StylePolicy::uniform("", lower),
            CaseStyle::Constant => StylePolicy::uniform("_", upper),
            CaseStyle::Pascal => StylePolicy::uniform("", capitalize),
            CaseStyle::Train => StylePolicy::uniform("-", capitalize),
            CaseStyle::Title => StylePolicy::uniform(" ", capitalize),
            CaseStyle::Camel => StylePolicy {
                separator: "",
                first: lower,
                rest: capitalize,
            },
        }
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| Error::unknown_style(s))
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for CaseStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
