use std::io::{self, Write};

use log::warn;
use speedread_core::{
    render::{DisplayState, PlaybackPhase},
    text_policy::{PREVIEW_MAX_CHARS, preview_word},
};

const PIVOT_STYLE: &str = "\x1b[1;31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Prints one line per frame with the pivot char pinned to a fixed column.
pub(super) struct TerminalRenderer {
    anchor_column: usize,
    last_revision: Option<u32>,
    fault_logged: bool,
}

impl TerminalRenderer {
    pub(super) fn new(word_columns: usize, orp_anchor_percent: usize) -> Self {
        Self {
            anchor_column: word_columns * orp_anchor_percent.min(100) / 100,
            last_revision: None,
            fault_logged: false,
        }
    }

    pub(super) fn render(&mut self, display: &DisplayState<'_>) {
        if self.last_revision == Some(display.revision) {
            return;
        }
        self.last_revision = Some(display.revision);

        if let Err(err) = self.write_frame(display)
            && !self.fault_logged
        {
            warn!("terminal: frame write failed: {}", err);
            self.fault_logged = true;
        }
    }

    pub(super) fn finish(&mut self) {
        let _ = io::stdout().flush();
    }

    fn write_frame(&self, display: &DisplayState<'_>) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let parts = display.parts;
        let pad = self.anchor_column.saturating_sub(parts.left_chars());
        let marker = match display.phase {
            PlaybackPhase::Playing => ">",
            PlaybackPhase::Idle => "||",
            PlaybackPhase::Finished => "[]",
        };

        let mut preview = [0u8; 96];
        let next = display
            .next_word
            .map_or("", |word| preview_word(word, &mut preview, PREVIEW_MAX_CHARS));

        writeln!(
            out,
            "{:pad$}{}{}{}{}{}  {:<2} {} ({}%) {} wpm  next: {}",
            "",
            parts.left,
            PIVOT_STYLE,
            parts.pivot,
            RESET_STYLE,
            parts.right,
            marker,
            display.progress_label,
            display.progress_pct,
            display.wpm,
            next,
            pad = pad,
        )?;
        out.flush()
    }
}
