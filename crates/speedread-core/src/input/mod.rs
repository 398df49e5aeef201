//! Input abstraction layer.

pub mod keys;
mod queue;

pub use queue::QueuedInput;

/// Logical actions consumed by the playback controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TogglePlayback,
    Play,
    Pause,
    Reset,
    Seek(usize),
    StepBack,
    StepForward,
    SetWpm(u16),
    Faster,
    Slower,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
