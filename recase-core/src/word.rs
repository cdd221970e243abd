//! Words and word sequences produced by the tokenizer.

use std::{fmt, slice};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Result};

/// A non-empty run of ASCII letters and digits, stored lowercase.
///
/// Words carry no casing of their own; formatters reapply casing per style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Word(String);

impl Word {
    /// Build a word from caller-supplied text.
    ///
    /// Fails when the text is empty or contains anything other than ASCII
    /// letters and digits. The stored form is lowercased.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::invalid_word(text, "word is empty"));
        }
        if !text.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::invalid_word(
                text,
                "word contains a separator or symbol",
            ));
        }
        Ok(Self(text.to_ascii_lowercase()))
    }

    /// Strip everything but ASCII letters and digits from a raw candidate.
    ///
    /// Returns `None` when nothing survives.
    pub(crate) fn clean(candidate: &str) -> Option<Self> {
        let cleaned: String = candidate
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        (!cleaned.is_empty()).then_some(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl TryFrom<String> for Word {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Word::new(&s)
    }
}

impl Serialize for Word {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered words extracted from one input, in left-to-right order.
///
/// An empty sequence means the input had no usable content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    words: Vec<Word>,
}

impl TokenSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a sequence from arbitrary strings, validating each one as a [`Word`].
    ///
    /// The first invalid entry aborts construction.
    pub fn try_from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Borrow the words as plain string slices.
    pub fn to_strs(&self) -> Vec<&str> {
        self.words.iter().map(Word::as_str).collect()
    }
}

impl FromIterator<Word> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenSequence {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Words joined by single spaces.
impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_new_lowercases() {
        assert_eq!(Word::new("HeLLo").unwrap().as_str(), "hello");
        assert_eq!(Word::new("v2").unwrap().as_str(), "v2");
    }

    #[test]
    fn test_word_new_rejects_invalid() {
        assert!(matches!(
            Word::new(""),
            Err(Error::InvalidWord { reason: "word is empty", .. })
        ));
        assert!(Word::new("two words").is_err());
        assert!(Word::new("kebab-case").is_err());
        assert!(Word::new("snake_case").is_err());
        assert!(Word::new("naïve").is_err());
    }

    #[test]
    fn test_word_clean() {
        assert_eq!(Word::clean("user@").unwrap().as_str(), "user");
        assert_eq!(Word::clean("Caf\u{e9}").unwrap().as_str(), "caf");
        assert!(Word::clean("@#!").is_none());
        assert!(Word::clean("").is_none());
    }

    #[test]
    fn test_sequence_try_from_words() {
        let seq = TokenSequence::try_from_words(["Hello", "WORLD"]).unwrap();
        assert_eq!(seq.to_strs(), vec!["hello", "world"]);

        let err = TokenSequence::try_from_words(vec!["ok".to_string(), "not ok".to_string()]);
        assert!(matches!(err, Err(Error::InvalidWord { word, .. }) if word == "not ok"));
    }

    #[test]
    fn test_sequence_display() {
        let seq = TokenSequence::try_from_words(["a", "b", "c"]).unwrap();
        assert_eq!(seq.to_string(), "a b c");
        assert_eq!(TokenSequence::empty().to_string(), "");
    }

    #[test]
    fn test_sequence_serde() {
        let seq = TokenSequence::try_from_words(["user", "id"]).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"["user","id"]"#);

        let back: TokenSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);

        let bad: std::result::Result<TokenSequence, _> = serde_json::from_str(r#"["a b"]"#);
        assert!(bad.is_err());
    }
}
