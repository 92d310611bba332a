//! In-memory widget host: frames with text and visibility.

mod frame;
mod handle;
mod registry;

pub use frame::Frame;
pub use handle::FrameHandle;
pub use registry::WidgetRegistry;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique widget ID.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Widget types supported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    Frame,
    FontString,
    Texture,
}

impl WidgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "Frame",
            Self::FontString => "FontString",
            Self::Texture => "Texture",
        }
    }

    /// Whether widgets of this type carry a text surface.
    pub fn has_text(&self) -> bool {
        matches!(self, Self::FontString)
    }
}
