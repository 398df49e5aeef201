//! Shared text shaping and truncation policies for compact UI surfaces.

use core::{fmt::Write, str};

use heapless::String;

pub const PROGRESS_LABEL_BYTES: usize = 64;
pub const PREVIEW_MAX_CHARS: usize = 24;

/// Percentage of the text already passed, rounded half up. `0` for empty text.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let index = index.min(total) as u64;
    let total = total as u64;
    ((index * 200 + total) / (total * 2)) as u8
}

/// `"{index} / {total} words"`.
pub fn progress_label(index: usize, total: usize) -> String<PROGRESS_LABEL_BYTES> {
    let mut out = String::new();
    // Two usize values plus the suffix always fit the buffer.
    let _ = write!(out, "{} / {} words", index, total);
    out
}

/// Copies `word` into `out`, cutting it at `max_chars` and appending `...`
/// when it does not fit.
pub fn preview_word<'a>(word: &str, out: &'a mut [u8], max_chars: usize) -> &'a str {
    let mut len = 0usize;
    let mut truncated = false;

    for (char_count, ch) in word.chars().enumerate() {
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if char_count >= max_chars || len + encoded.len() > out.len() {
            truncated = true;
            break;
        }

        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
    }

    if len == 0 {
        return "";
    }

    if truncated && len + 3 <= out.len() {
        out[len..len + 3].copy_from_slice(b"...");
        len += 3;
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_like_a_progress_bar() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(0, 80), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(80, 80), 100);
        assert_eq!(progress_percent(90, 80), 100);
    }

    #[test]
    fn label_lists_index_and_total() {
        assert_eq!(progress_label(12, 80).as_str(), "12 / 80 words");
        assert_eq!(progress_label(0, 0).as_str(), "0 / 0 words");
        let max = progress_label(usize::MAX, usize::MAX);
        assert!(max.as_str().ends_with(" words"));
    }

    #[test]
    fn preview_keeps_short_words() {
        let mut out = [0u8; 64];
        assert_eq!(preview_word("Ready?", &mut out, PREVIEW_MAX_CHARS), "Ready?");
    }

    #[test]
    fn preview_truncates_long_words() {
        let mut out = [0u8; 64];
        assert_eq!(preview_word("saccadic", &mut out, 4), "sacc...");
        assert_eq!(preview_word("añejo", &mut out, 2), "añ...");
    }

    #[test]
    fn preview_of_empty_word_is_empty() {
        let mut out = [0u8; 8];
        assert_eq!(preview_word("", &mut out, 4), "");
        assert_eq!(preview_word("word", &mut [], 4), "");
    }
}
