//! Dialogue Simulator
//!
//! A linear dialogue box: messages are revealed one character at a time
//! and the player advances through them with a single input. The state
//! machine drives host widgets through small capability traits; an
//! in-memory widget host and an XML layout loader come with it.

pub mod config;
pub mod dialogue;
pub mod dump;
pub mod error;
pub mod event;
pub mod loader;
pub mod surface;
pub mod timer;
pub mod widget;
pub mod xml;

pub use config::DialogueConfig;
pub use dialogue::{DialogueSequencer, MessageAnimator};
pub use error::{Error, Result};
pub use event::DialogueEvent;
