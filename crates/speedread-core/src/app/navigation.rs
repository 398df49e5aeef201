impl PlaybackController {
    /// Replaces the text, rewinding to the first word and pausing.
    pub fn load_text(&mut self, text: &str) {
        let canceled = self.cancel_advance();
        self.words = WordSequence::tokenize(text);
        self.current_index = 0;
        self.mark_changed();
        debug!(
            "playback: loaded words={} canceled_advance={}",
            self.words.len(),
            canceled.is_some()
        );
    }

    /// Starts playing from the current word, or from the start when sitting
    /// on the last word. No-op for empty text or when already playing.
    pub fn play(&mut self, now_ms: u64) {
        let Some(last_index) = self.words.last_index() else {
            debug!("playback: play ignored, no words loaded");
            return;
        };

        let at_end = self.current_index >= last_index;
        if self.is_playing() && !at_end {
            return;
        }

        if at_end {
            self.current_index = 0;
        }
        self.schedule_advance(now_ms);
        self.mark_changed();
        debug!(
            "playback: play index={} total={} wpm={}",
            self.current_index,
            self.words.len(),
            self.config.wpm
        );
    }

    /// Stops at the current word. A finished or idle controller is left as is.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }

        self.cancel_advance();
        self.mark_changed();
        debug!("playback: pause index={}", self.current_index);
    }

    pub fn toggle(&mut self, now_ms: u64) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    /// Jumps to `index`, clamped to the loaded words, and pauses.
    pub fn seek(&mut self, index: usize) {
        let target = index.min(self.words.last_index().unwrap_or(0));
        let canceled = self.cancel_advance();
        self.current_index = target;
        self.mark_changed();
        debug!(
            "playback: seek index={} requested={} canceled_advance={}",
            target,
            index,
            canceled.is_some()
        );
    }

    pub fn step_back(&mut self) {
        self.seek(self.current_index.saturating_sub(1));
    }

    pub fn step_forward(&mut self) {
        self.seek(self.current_index.saturating_add(1));
    }

    pub fn reset(&mut self) {
        self.cancel_advance();
        self.current_index = 0;
        self.mark_changed();
        debug!("playback: reset");
    }

    /// Stores a new rate, clamped to the configured bounds. A pending advance
    /// keeps its deadline; the rate applies from the next scheduled word.
    pub fn set_wpm(&mut self, wpm: u16) -> bool {
        let next = wpm.clamp(self.config.min_wpm, self.config.max_wpm);
        if next == self.config.wpm {
            return false;
        }

        self.config.wpm = next;
        self.mark_changed();
        debug!("playback: wpm={} requested={}", next, wpm);
        true
    }

    pub fn adjust_wpm(&mut self, increase: bool) -> bool {
        let next = if increase {
            self.config.wpm.saturating_add(self.config.wpm_step)
        } else {
            self.config.wpm.saturating_sub(self.config.wpm_step)
        };

        self.set_wpm(next)
    }
}
