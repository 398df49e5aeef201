//! Keyboard bindings for reader mode.

use super::InputEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    Home,
    Char(char),
}

/// Maps a key press to a controller action. Unbound keys map to `None`.
pub fn key_event(key: Key) -> Option<InputEvent> {
    match key {
        Key::Space | Key::Char(' ') => Some(InputEvent::TogglePlayback),
        Key::Left => Some(InputEvent::StepBack),
        Key::Right => Some(InputEvent::StepForward),
        Key::Up | Key::Char('+') => Some(InputEvent::Faster),
        Key::Down | Key::Char('-') => Some(InputEvent::Slower),
        Key::Home | Key::Char('r') | Key::Char('R') => Some(InputEvent::Reset),
        Key::Char(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_playback() {
        assert_eq!(key_event(Key::Space), Some(InputEvent::TogglePlayback));
        assert_eq!(key_event(Key::Char(' ')), Some(InputEvent::TogglePlayback));
    }

    #[test]
    fn arrows_step_and_change_rate() {
        assert_eq!(key_event(Key::Left), Some(InputEvent::StepBack));
        assert_eq!(key_event(Key::Right), Some(InputEvent::StepForward));
        assert_eq!(key_event(Key::Up), Some(InputEvent::Faster));
        assert_eq!(key_event(Key::Down), Some(InputEvent::Slower));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(key_event(Key::Char('x')), None);
        assert_eq!(key_event(Key::Home), Some(InputEvent::Reset));
    }
}
