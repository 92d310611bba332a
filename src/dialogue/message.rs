//! A single dialogue message with typewriter-style reveal.

use crate::error::{Error, Result};
use crate::surface::{MessageSurface, Visibility};
use crate::timer::Ticker;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Reveals one message's text a grapheme at a time.
///
/// The full text is whatever the surface displayed when the animator was
/// created. While active, the surface always shows exactly the first
/// [`revealed_count`](Self::revealed_count) graphemes of it.
pub struct MessageAnimator {
    surface: Box<dyn MessageSurface>,
    name: String,
    full_text: String,
    /// Byte offset where each grapheme prefix ends; `boundaries[0] == 0`.
    boundaries: Vec<usize>,
    revealed: usize,
    active: bool,
    ticker: Ticker,
}

impl MessageAnimator {
    /// Capture the surface's current text as the message to reveal.
    pub fn new(mut surface: Box<dyn MessageSurface>, text_speed: Duration) -> Result<Self> {
        let name = surface.name();
        let Some(text) = surface.text_surface() else {
            let err = Error::MissingTextSurface(name);
            tracing::error!("{}", err);
            return Err(err);
        };
        let full_text = text.read_current_text();

        let mut boundaries = vec![0];
        boundaries.extend(
            full_text
                .grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );

        Ok(Self {
            surface,
            name,
            full_text,
            boundaries,
            revealed: 0,
            active: false,
            ticker: Ticker::new(text_speed),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Length of the full text in graphemes.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// The revealed prefix of the full text.
    pub fn revealed_text(&self) -> &str {
        &self.full_text[..self.boundaries[self.revealed]]
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= self.len()
    }

    pub fn is_visible(&self) -> bool {
        self.surface.is_visible()
    }

    /// Restart the reveal from an empty string.
    pub fn activate(&mut self) {
        self.deactivate();
        self.revealed = 0;
        self.active = true;
        self.write_revealed();
        self.ticker.start();
    }

    pub fn deactivate(&mut self) {
        self.ticker.cancel();
        self.active = false;
    }

    /// Show the surface and start revealing.
    pub fn show(&mut self) {
        self.surface.set_visible(true);
        self.activate();
    }

    /// Stop revealing and hide the surface.
    pub fn hide(&mut self) {
        self.deactivate();
        self.surface.set_visible(false);
    }

    /// Reveal one more grapheme.
    ///
    /// Returns true when this call finished the reveal.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        if self.revealed < self.len() {
            self.revealed += 1;
            self.write_revealed();
            tracing::trace!("({}) Animating text {}/{}", self.name, self.revealed, self.len());
        }

        if self.is_fully_revealed() {
            tracing::debug!("({}) is displaying end of message prompt", self.name);
            self.ticker.cancel();
            return true;
        }
        false
    }

    /// Let `dt` of host time pass, ticking once per elapsed interval.
    ///
    /// Returns true when the reveal finished during this update.
    pub fn update(&mut self, dt: Duration) -> bool {
        let due = self.ticker.advance(dt) as usize;
        let fires = due.min(self.len() - self.revealed + 1);
        for _ in 0..fires {
            if !self.ticker.is_running() {
                break;
            }
            if self.tick() {
                return true;
            }
        }
        false
    }

    /// Skip to the end of the message.
    pub fn reveal_fully(&mut self) {
        self.revealed = self.len();
        self.ticker.cancel();
        self.write_revealed();
    }

    fn write_revealed(&mut self) {
        let end = self.boundaries[self.revealed];
        match self.surface.text_surface() {
            Some(text) => text.write_text(&self.full_text[..end]),
            None => tracing::warn!("({}) Text surface disappeared", self.name),
        }
    }
}

impl std::fmt::Debug for MessageAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageAnimator")
            .field("name", &self.name)
            .field("full_text", &self.full_text)
            .field("revealed", &self.revealed)
            .field("active", &self.active)
            .finish()
    }
}
