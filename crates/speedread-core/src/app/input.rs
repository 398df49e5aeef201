impl PlaybackController {
    /// Applies every queued event. Stops at the first provider error and
    /// returns it; events applied before the error stay applied.
    pub fn process_inputs<IN>(&mut self, input: &mut IN, now_ms: u64) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
    {
        let mut applied = 0usize;

        loop {
            match input.poll_event() {
                Ok(Some(event)) => {
                    self.apply_input_event(event, now_ms);
                    applied += 1;
                }
                Ok(None) => return Ok(applied),
                Err(err) => {
                    warn!("input: provider failed after {} events", applied);
                    return Err(err);
                }
            }
        }
    }

    pub fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::TogglePlayback => self.toggle(now_ms),
            InputEvent::Play => self.play(now_ms),
            InputEvent::Pause => self.pause(),
            InputEvent::Reset => self.reset(),
            InputEvent::Seek(index) => self.seek(index),
            InputEvent::StepBack => self.step_back(),
            InputEvent::StepForward => self.step_forward(),
            InputEvent::SetWpm(wpm) => {
                let _ = self.set_wpm(wpm);
            }
            InputEvent::Faster => {
                let _ = self.adjust_wpm(true);
            }
            InputEvent::Slower => {
                let _ = self.adjust_wpm(false);
            }
        }
    }
}
