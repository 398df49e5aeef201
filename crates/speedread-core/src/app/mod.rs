//! Playback state machine for RSVP reading.
//!
//! The controller owns no timer. A runtime feeds it a monotonic `now_ms`
//! through [`PlaybackController::tick`] (or fires the handle returned by
//! [`PlaybackController::next_advance`] when its own timer expires), and every
//! other operation takes effect immediately.

use log::{debug, info, warn};

use crate::{
    content::WordSequence,
    input::{InputEvent, InputProvider},
    orp::pivot_parts,
    pacing::{PacingConfig, delay_ms_ceil, word_delay},
    render::{DisplayState, PlaybackPhase},
    text_policy::{progress_label, progress_percent},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    pub pacing: PacingConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 60,
            max_wpm: 1500,
            wpm_step: 10,
            pacing: PacingConfig::default(),
        }
    }
}

/// The single pending advance while playing.
///
/// Handles are unique per scheduling decision; once the controller leaves the
/// `Playing` state or reschedules, older handles no longer fire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AdvanceHandle {
    generation: u32,
    due_ms: u64,
}

impl AdvanceHandle {
    pub const fn due_ms(self) -> u64 {
        self.due_ms
    }

    pub const fn is_due(self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PlaybackState {
    Idle,
    Playing { advance: AdvanceHandle },
    Finished,
}

pub struct PlaybackController {
    config: ReaderConfig,
    words: WordSequence,
    current_index: usize,
    state: PlaybackState,
    generation: u32,
    pending_redraw: bool,
    revision: u32,
    words_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
