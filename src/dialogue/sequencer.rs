//! Plays an ordered list of messages, one per advance.

use super::message::MessageAnimator;
use crate::config::DEFAULT_TEXT_SPEED;
use crate::error::{Error, Result};
use crate::event::{DialogueEvent, EventQueue};
use crate::surface::{MessageSurface, Visibility};
use std::time::Duration;

/// A linear dialogue: shows one message at a time and advances on input.
///
/// Advancing is two-stage. The first [`advance`](Self::advance) on a message
/// that is still revealing only completes the reveal; the next one moves on.
pub struct DialogueSequencer {
    name: String,
    messages: Vec<MessageAnimator>,
    current: usize,
    text_speed: Duration,
    /// The dialogue box as a whole.
    root: Option<Box<dyn Visibility>>,
    end_prompt: Option<Box<dyn Visibility>>,
    enabled: bool,
    active: bool,
    events: EventQueue,
}

impl DialogueSequencer {
    /// Build a dialogue from its message surfaces, in display order.
    ///
    /// Configuration problems are logged, not returned: sources without a
    /// text surface are skipped, and a dialogue that ends up empty refuses
    /// to [`start`](Self::start).
    pub fn new(name: impl Into<String>, text_speed: f64, sources: Vec<Box<dyn MessageSurface>>) -> Self {
        let name = name.into();
        let text_speed = text_speed_duration(text_speed).unwrap_or_else(|e| {
            tracing::warn!("({}) {}; using {}s", name, e, DEFAULT_TEXT_SPEED);
            Duration::from_secs_f64(DEFAULT_TEXT_SPEED)
        });

        if sources.is_empty() {
            tracing::error!(
                "({}) Dialogue list not set correctly. Please ensure there is at least 1 message",
                name
            );
        }

        let messages: Vec<MessageAnimator> = sources
            .into_iter()
            .filter_map(|source| MessageAnimator::new(source, text_speed).ok())
            .collect();

        if messages.is_empty() {
            tracing::warn!("({}) Unable to find any dialogue messages", name);
        }

        Self {
            name,
            messages,
            current: 0,
            text_speed,
            root: None,
            end_prompt: None,
            enabled: true,
            active: false,
            events: EventQueue::new(),
        }
    }

    /// Attach the object that represents the whole dialogue box.
    pub fn with_root(mut self, root: Box<dyn Visibility>) -> Self {
        self.root = Some(root);
        self
    }

    /// Attach the prompt shown once a message is fully revealed.
    pub fn with_end_prompt(mut self, prompt: Box<dyn Visibility>) -> Self {
        self.end_prompt = Some(prompt);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn text_speed(&self) -> Duration {
        self.text_speed
    }

    /// Index of the displayed message; equals [`len`](Self::len) once finished.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_message(&self) -> Option<&MessageAnimator> {
        if self.active {
            self.messages.get(self.current)
        } else {
            None
        }
    }

    pub fn messages(&self) -> &[MessageAnimator] {
        &self.messages
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether every message was shown and dismissed.
    pub fn is_finished(&self) -> bool {
        !self.messages.is_empty() && self.current >= self.messages.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// While disabled, [`advance`](Self::advance) is ignored.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn end_prompt_visible(&self) -> bool {
        self.end_prompt.as_ref().is_some_and(|p| p.is_visible())
    }

    /// Open the dialogue box at the first message.
    pub fn start(&mut self) -> Result<()> {
        if self.messages.is_empty() {
            let err = Error::EmptyDialogue(self.name.clone());
            tracing::error!("{}", err);
            return Err(err);
        }

        self.hide_all_messages();
        self.current = 0;
        if let Some(root) = &mut self.root {
            root.set_visible(true);
        }
        self.active = true;
        self.events.push(DialogueEvent::Started);
        self.show_current();
        self.hide_end_prompt();

        tracing::info!("({}) Dialogue started with {} messages", self.name, self.messages.len());
        Ok(())
    }

    /// Hide every message and the prompt, and stop all reveals.
    pub fn stop(&mut self) {
        self.hide_all_messages();
        if self.active {
            self.hide_end_prompt();
            self.active = false;
            self.events.push(DialogueEvent::Stopped);
        }
    }

    /// Handle the user's advance input.
    pub fn advance(&mut self) {
        if !self.enabled || !self.active {
            return;
        }
        let Some(message) = self.messages.get_mut(self.current) else {
            return;
        };

        if !message.is_fully_revealed() {
            message.reveal_fully();
            self.on_message_fully_revealed();
            return;
        }

        message.hide();
        self.show_end_prompt();
        self.current += 1;

        if self.current >= self.messages.len() {
            self.finish();
        } else {
            self.show_current();
            self.hide_end_prompt();
        }
    }

    /// Let `dt` of host time pass for the displayed message.
    pub fn update(&mut self, dt: Duration) {
        if !self.active {
            return;
        }
        let revealed = match self.messages.get_mut(self.current) {
            Some(message) => message.update(dt),
            None => false,
        };
        if revealed {
            self.on_message_fully_revealed();
        }
    }

    /// Called when the displayed message finishes revealing.
    pub fn on_message_fully_revealed(&mut self) {
        self.events.push(DialogueEvent::MessageRevealed { index: self.current });
        self.show_end_prompt();
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<DialogueEvent> {
        self.events.drain()
    }

    fn show_current(&mut self) {
        if let Some(message) = self.messages.get_mut(self.current) {
            tracing::debug!("({}) Showing message {} ({})", self.name, self.current, message.name());
            message.show();
            self.events.push(DialogueEvent::MessageShown { index: self.current });
        }
    }

    fn finish(&mut self) {
        self.hide_all_messages();
        self.active = false;
        self.hide_end_prompt();
        if let Some(root) = &mut self.root {
            root.set_visible(false);
        }
        self.events.push(DialogueEvent::Finished);
        tracing::info!("({}) End of messages", self.name);
    }

    fn hide_all_messages(&mut self) {
        for message in &mut self.messages {
            message.hide();
        }
    }

    fn show_end_prompt(&mut self) {
        if let Some(prompt) = &mut self.end_prompt {
            prompt.set_visible(true);
            self.events.push(DialogueEvent::PromptShown);
        }
    }

    fn hide_end_prompt(&mut self) {
        if let Some(prompt) = &mut self.end_prompt {
            prompt.set_visible(false);
            self.events.push(DialogueEvent::PromptHidden);
        }
    }
}

impl std::fmt::Debug for DialogueSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueSequencer")
            .field("name", &self.name)
            .field("messages", &self.messages)
            .field("current", &self.current)
            .field("enabled", &self.enabled)
            .field("active", &self.active)
            .finish()
    }
}

/// Convert a seconds-per-character setting to a tick interval.
pub fn text_speed_duration(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(Error::InvalidTextSpeed(seconds));
    }
    match Duration::try_from_secs_f64(seconds) {
        Ok(interval) if !interval.is_zero() => Ok(interval),
        _ => Err(Error::InvalidTextSpeed(seconds)),
    }
}
