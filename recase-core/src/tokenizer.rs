use crate::{
    Text, TokenSequence, Word,
    boundary::{self, BOUNDARY},
};

/// Split an input into cleaned, lowercase words.
///
/// Never fails. Inputs without text, empty strings and strings made only of
/// separators or symbols all yield an empty sequence.
pub fn tokenize<T: Text + ?Sized>(input: &T) -> TokenSequence {
    let Some(text) = input.as_text() else {
        log::trace!("input carries no text, no words");
        return TokenSequence::empty();
    };

    let annotated = boundary::annotate(text);
    let words: TokenSequence = annotated.split(BOUNDARY).filter_map(Word::clean).collect();
    log::trace!("tokenized {:?} into {} word(s)", text, words.len());
    words
}
