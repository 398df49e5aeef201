use log::{debug, warn};
use speedread_core::input::{
    QueuedInput,
    keys::{Key, key_event},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct ScriptedKey {
    at_ms: u64,
    key: Key,
}

const fn at(at_ms: u64, key: Key) -> ScriptedKey {
    ScriptedKey { at_ms, key }
}

const DEMO_KEYS: [ScriptedKey; 9] = [
    at(600, Key::Space),
    at(3_000, Key::Up),
    at(3_000, Key::Up),
    at(3_000, Key::Up),
    at(6_000, Key::Space),
    at(7_000, Key::Left),
    at(7_400, Key::Char('x')),
    at(8_000, Key::Down),
    at(8_200, Key::Space),
];

/// Timed key presses standing in for a keyboard.
pub(super) struct KeyScript {
    steps: &'static [ScriptedKey],
    cursor: usize,
}

impl KeyScript {
    pub(super) const fn demo() -> Self {
        Self {
            steps: &DEMO_KEYS,
            cursor: 0,
        }
    }

    pub(super) fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor)
    }

    pub(super) fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    pub(super) fn next_due_ms(&self) -> Option<u64> {
        self.steps.get(self.cursor).map(|step| step.at_ms)
    }

    /// Moves every due key into `input`. A full queue leaves the rest for the
    /// next call.
    pub(super) fn release_due<const N: usize>(&mut self, now_ms: u64, input: &mut QueuedInput<N>) {
        while let Some(step) = self.steps.get(self.cursor)
            && step.at_ms <= now_ms
        {
            match key_event(step.key) {
                Some(event) => {
                    if input.push(event).is_err() {
                        warn!("script: input queue full, deferring {:?}", step.key);
                        return;
                    }
                    debug!("script: {:?} -> {:?} at {}ms", step.key, event, now_ms);
                }
                None => debug!("script: unbound key {:?}", step.key),
            }
            self.cursor += 1;
        }
    }
}
