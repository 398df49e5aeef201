use core::convert::Infallible;

use heapless::Deque;

use super::{InputEvent, InputProvider};

/// Fixed-capacity FIFO of events pushed by a runner and drained by the
/// controller.
#[derive(Debug)]
pub struct QueuedInput<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> QueuedInput<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Queues `event`, handing it back when the queue is full.
    pub fn push(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.events.push_back(event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<const N: usize> Default for QueuedInput<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> InputProvider for QueuedInput<N> {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order() {
        let mut input = QueuedInput::<4>::new();
        input.push(InputEvent::Play).unwrap();
        input.push(InputEvent::Seek(3)).unwrap();

        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Play)));
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Seek(3))));
        assert_eq!(input.poll_event(), Ok(None));
    }

    #[test]
    fn full_queue_returns_event() {
        let mut input = QueuedInput::<1>::new();
        input.push(InputEvent::Play).unwrap();
        assert_eq!(input.push(InputEvent::Pause), Err(InputEvent::Pause));
        assert_eq!(input.len(), 1);
    }
}
