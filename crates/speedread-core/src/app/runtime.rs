impl PlaybackController {
    /// Runs the pending advance if it is due, then reports whether anything
    /// changed since the previous tick.
    ///
    /// At most one word is advanced per tick; the next delay is measured from
    /// `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if let PlaybackState::Playing { advance } = self.state
            && advance.is_due(now_ms)
        {
            self.advance_word(now_ms);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn next_advance(&self) -> Option<AdvanceHandle> {
        match self.state {
            PlaybackState::Playing { advance } => Some(advance),
            PlaybackState::Idle | PlaybackState::Finished => None,
        }
    }

    /// Performs the advance behind `handle` if it is still the pending one.
    ///
    /// Returns `false` for a canceled or superseded handle, which leaves the
    /// state untouched.
    pub fn fire_advance(&mut self, handle: AdvanceHandle, now_ms: u64) -> bool {
        match self.state {
            PlaybackState::Playing { advance } if advance == handle => {
                self.advance_word(now_ms);
                true
            }
            _ => {
                debug!(
                    "playback: ignoring stale advance generation={}",
                    handle.generation
                );
                false
            }
        }
    }

    fn advance_word(&mut self, now_ms: u64) {
        if self.current_index + 1 >= self.words.len() {
            self.state = PlaybackState::Finished;
            info!(
                "playback: finished on word {}/{}",
                self.current_index + 1,
                self.words.len()
            );
        } else {
            self.current_index += 1;
            self.words_since_drain = self.words_since_drain.saturating_add(1);
            self.schedule_advance(now_ms);
        }

        self.mark_changed();
    }

    /// Enters `Playing` with a fresh advance for the current word, replacing
    /// any previous one.
    fn schedule_advance(&mut self, now_ms: u64) {
        let delay = word_delay(self.current_word(), self.config.wpm, &self.config.pacing);
        self.generation = self.generation.wrapping_add(1);
        let advance = AdvanceHandle {
            generation: self.generation,
            due_ms: now_ms.saturating_add(delay_ms_ceil(delay)),
        };
        self.state = PlaybackState::Playing { advance };
    }

    /// Drops the pending advance, if any, and leaves the controller idle.
    fn cancel_advance(&mut self) -> Option<AdvanceHandle> {
        let canceled = self.next_advance();
        self.state = PlaybackState::Idle;
        canceled
    }
}
