impl PlaybackController {
    pub fn new(mut config: ReaderConfig) -> Self {
        if config.max_wpm < config.min_wpm {
            core::mem::swap(&mut config.max_wpm, &mut config.min_wpm);
        }
        config.min_wpm = config.min_wpm.max(1);
        config.max_wpm = config.max_wpm.max(config.min_wpm);
        config.wpm = config.wpm.clamp(config.min_wpm, config.max_wpm);
        config.wpm_step = config.wpm_step.max(1);

        Self {
            config,
            words: WordSequence::new(),
            current_index: 0,
            state: PlaybackState::Idle,
            generation: 0,
            pending_redraw: true,
            revision: 0,
            words_since_drain: 0,
        }
    }

    pub fn with_text(config: ReaderConfig, text: &str) -> Self {
        let mut controller = Self::new(config);
        controller.load_text(text);
        controller
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn phase(&self) -> PlaybackPhase {
        match self.state {
            PlaybackState::Idle => PlaybackPhase::Idle,
            PlaybackState::Playing { .. } => PlaybackPhase::Playing,
            PlaybackState::Finished => PlaybackPhase::Finished,
        }
    }

    /// Changes on every mutation. Renderers compare it to skip redundant
    /// redraws.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Word at the current index, empty when no text is loaded.
    pub fn current_word(&self) -> &str {
        self.words
            .get(self.current_index)
            .map_or("", |token| token.as_str())
    }

    pub fn display(&self) -> DisplayState<'_> {
        let word = self.current_word();
        let total_words = self.words.len();
        let next_word = self
            .words
            .get(self.current_index + 1)
            .map(|token| token.as_str());

        DisplayState {
            word,
            parts: pivot_parts(word),
            next_word,
            current_index: self.current_index,
            total_words,
            is_playing: self.is_playing(),
            phase: self.phase(),
            wpm: self.config.wpm,
            progress_pct: progress_percent(self.current_index, total_words),
            progress_label: progress_label(self.current_index, total_words),
            revision: self.revision,
        }
    }

    pub fn with_display<F>(&self, f: F)
    where
        F: FnOnce(DisplayState<'_>),
    {
        f(self.display());
    }

    /// Words advanced by the timer since the previous call.
    pub fn drain_word_updates(&mut self) -> u32 {
        let count = self.words_since_drain;
        self.words_since_drain = 0;
        count
    }

    fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.pending_redraw = true;
    }
}
