//! Optimal Recognition Point partitioning.
//!
//! The pivot sits at char index `ceil((len - 1) / 2)`: the exact center of odd
//! length words and just right of center for even ones, so the left part is
//! never longer than the right part plus one.

/// Left/pivot/right view of one word. Concatenating the three parts gives the
/// word back unchanged.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PivotParts<'a> {
    pub left: &'a str,
    /// Exactly one char, or empty for an empty word.
    pub pivot: &'a str,
    pub right: &'a str,
}

impl PivotParts<'_> {
    pub fn pivot_char(&self) -> Option<char> {
        self.pivot.chars().next()
    }

    /// Chars before the pivot, used by renderers to align the pivot column.
    pub fn left_chars(&self) -> usize {
        self.left.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pivot.is_empty()
    }
}

pub fn pivot_char_index(word: &str) -> usize {
    word.chars().count().saturating_sub(1).div_ceil(2)
}

pub fn pivot_parts(word: &str) -> PivotParts<'_> {
    let pivot_index = pivot_char_index(word);
    let mut chars = word.char_indices().skip(pivot_index);

    let Some((start, pivot)) = chars.next() else {
        return PivotParts::default();
    };
    let end = start + pivot.len_utf8();

    PivotParts {
        left: &word[..start],
        pivot: &word[start..end],
        right: &word[end..],
    }
}
