//! View model handed to whatever draws the reader.

use heapless::String;

use crate::{orp::PivotParts, text_policy::PROGRESS_LABEL_BYTES};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackPhase {
    /// Paused, or never started.
    Idle,
    /// An advance is pending.
    Playing,
    /// Stopped on the last word after reading through.
    Finished,
}

/// Snapshot of everything a renderer needs after a controller mutation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayState<'a> {
    /// Word at `current_index`, empty when no text is loaded.
    pub word: &'a str,
    pub parts: PivotParts<'a>,
    pub next_word: Option<&'a str>,
    pub current_index: usize,
    pub total_words: usize,
    pub is_playing: bool,
    pub phase: PlaybackPhase,
    pub wpm: u16,
    pub progress_pct: u8,
    pub progress_label: String<PROGRESS_LABEL_BYTES>,
    /// Bumped on every mutation; equal revisions mean equal state.
    pub revision: u32,
}
