//! Loosely typed input accepted by the tokenizer.

use std::borrow::Cow;

/// A value that may or may not carry text.
///
/// The tokenizer accepts anything implementing this trait. Values without
/// text (`None`, non-string TOML or JSON values) tokenize to an empty
/// sequence instead of failing.
pub trait Text {
    /// Borrow the textual content, if any.
    fn as_text(&self) -> Option<&str>;
}

impl Text for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Text> Text for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::as_text)
    }
}

impl Text for toml::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl Text for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}
