//! Host capabilities the dialogue state machine drives.
//!
//! The sequencer never talks to a renderer directly. Whatever owns the
//! actual UI implements these traits; [`crate::widget::FrameHandle`] is the
//! in-memory implementation used by the CLI and the tests.

/// Something that can be shown or hidden.
pub trait Visibility {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// Something that displays a string.
pub trait TextSurface {
    /// Text currently displayed. Read once, when a message is set up.
    fn read_current_text(&self) -> String;
    fn write_text(&mut self, text: &str);
}

/// The host object behind a single dialogue message.
pub trait MessageSurface: Visibility {
    /// Name used in diagnostics.
    fn name(&self) -> String;

    /// The text capability, if this object has one.
    fn text_surface(&mut self) -> Option<&mut dyn TextSurface>;
}
