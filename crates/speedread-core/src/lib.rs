//! Pacing engine for RSVP speed reading.
//!
//! [`app::PlaybackController`] walks a tokenized text one word at a time on a
//! caller-supplied millisecond clock, timing each word with [`pacing`] and
//! splitting it around its ORP pivot with [`orp`].

#![no_std]

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod orp;
pub mod pacing;
pub mod render;
pub mod text_policy;
