//! Word tokens and the tokenizer that produces them.

mod text_utils;

use alloc::{string::String, vec::Vec};
use core::slice;

pub use text_utils::count_words;

use crate::orp::{PivotParts, pivot_parts};
use text_utils::next_word_at;

/// One non-empty, whitespace-free word and its 0-based position in the text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordToken {
    text: String,
    ordinal: usize,
}

impl WordToken {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Length in chars, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    pub fn pivot_parts(&self) -> PivotParts<'_> {
        pivot_parts(&self.text)
    }
}

/// Ordered words of one loaded text. Replaced wholesale on reload.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSequence {
    words: Vec<WordToken>,
}

impl WordSequence {
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Splits `text` on runs of whitespace, dropping empty pieces.
    pub fn tokenize(text: &str) -> Self {
        let mut words = Vec::with_capacity(count_words(text));
        let mut cursor = 0usize;

        while let Some((word, next_cursor)) = next_word_at(text, cursor) {
            words.push(WordToken {
                text: String::from(word),
                ordinal: words.len(),
            });
            cursor = next_cursor;
        }

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordToken> {
        self.words.get(index)
    }

    /// Index of the final word, `None` for an empty sequence.
    pub fn last_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }

    pub fn iter(&self) -> slice::Iter<'_, WordToken> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a WordToken;
    type IntoIter = slice::Iter<'a, WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn tokenize(text: &str) -> WordSequence {
    WordSequence::tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn words(sequence: &WordSequence) -> Vec<&str> {
        sequence.iter().map(WordToken::as_str).collect()
    }

    #[test]
    fn splits_sentence_into_words() {
        let sequence = tokenize("Hello world.");
        assert_eq!(words(&sequence), ["Hello", "world."]);
        assert_eq!(sequence.get(1).map(WordToken::ordinal), Some(1));
        assert_eq!(sequence.last_index(), Some(1));
    }

    #[test]
    fn blank_input_yields_empty_sequence() {
        for text in ["", "   ", "\n\t \r\n"] {
            let sequence = tokenize(text);
            assert!(sequence.is_empty());
            assert_eq!(sequence.last_index(), None);
        }
    }

    #[test]
    fn tokens_never_contain_whitespace() {
        let text = "  Paste your own text here \n\n to get\tstarted.  \u{00a0}ok ";
        let sequence = tokenize(text);

        for token in &sequence {
            assert!(!token.as_str().is_empty());
            assert!(!token.as_str().chars().any(char::is_whitespace));
        }

        let joined: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(words(&sequence), joined);
    }

    #[test]
    fn ordinals_follow_sequence_order() {
        let sequence = tokenize("a b c d");
        for (expected, token) in sequence.iter().enumerate() {
            assert_eq!(token.ordinal(), expected);
        }
    }

    #[test]
    fn char_len_counts_chars_not_bytes() {
        let sequence = tokenize("señorío");
        let token = sequence.get(0).unwrap();
        assert_eq!(token.char_len(), 7);
        assert_eq!(token.last_char(), Some('o'));
    }
}
