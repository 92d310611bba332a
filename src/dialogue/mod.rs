//! Dialogue state machine: message reveal and sequencing.

mod message;
mod sequencer;

pub use message::MessageAnimator;
pub use sequencer::{text_speed_duration, DialogueSequencer};
