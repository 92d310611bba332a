//! Shared handle to a frame in the registry.

use super::WidgetRegistry;
use crate::surface::{MessageSurface, TextSurface, Visibility};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a frame, implementing the dialogue capabilities.
#[derive(Clone)]
pub struct FrameHandle {
    pub id: u64,
    pub widgets: Rc<RefCell<WidgetRegistry>>,
}

impl FrameHandle {
    pub fn new(id: u64, widgets: Rc<RefCell<WidgetRegistry>>) -> Self {
        Self { id, widgets }
    }

    /// Current text, or `None` if the frame is gone or has no text.
    pub fn text(&self) -> Option<String> {
        self.widgets.borrow().get(self.id).and_then(|f| f.text.clone())
    }

    fn has_text(&self) -> bool {
        self.widgets
            .borrow()
            .get(self.id)
            .is_some_and(|f| f.widget_type.has_text())
    }
}

impl std::fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameHandle").field("id", &self.id).finish()
    }
}

impl Visibility for FrameHandle {
    fn set_visible(&mut self, visible: bool) {
        if let Some(frame) = self.widgets.borrow_mut().get_mut(self.id) {
            frame.visible = visible;
        }
    }

    fn is_visible(&self) -> bool {
        self.widgets.borrow().get(self.id).is_some_and(|f| f.visible)
    }
}

impl TextSurface for FrameHandle {
    fn read_current_text(&self) -> String {
        self.text().unwrap_or_default()
    }

    fn write_text(&mut self, text: &str) {
        if let Some(frame) = self.widgets.borrow_mut().get_mut(self.id) {
            frame.text = Some(text.to_string());
        }
    }
}

impl MessageSurface for FrameHandle {
    fn name(&self) -> String {
        self.widgets
            .borrow()
            .get(self.id)
            .map(|f| f.display_name())
            .unwrap_or_else(|| format!("(missing #{})", self.id))
    }

    fn text_surface(&mut self) -> Option<&mut dyn TextSurface> {
        if self.has_text() {
            Some(self as &mut dyn TextSurface)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Frame, WidgetType};

    fn registry() -> Rc<RefCell<WidgetRegistry>> {
        Rc::new(RefCell::new(WidgetRegistry::new()))
    }

    #[test]
    fn test_write_text_updates_registry() {
        let widgets = registry();
        let id = widgets.borrow_mut().register(Frame::font_string(Some("Line".into()), None, "Hi"));
        let mut handle = FrameHandle::new(id, Rc::clone(&widgets));

        assert_eq!(handle.read_current_text(), "Hi");
        handle.write_text("Bye");
        assert_eq!(widgets.borrow().get(id).unwrap().text.as_deref(), Some("Bye"));
    }

    #[test]
    fn test_plain_frame_has_no_text_surface() {
        let widgets = registry();
        let id = widgets.borrow_mut().register(Frame::new(WidgetType::Frame, None, None));
        let mut handle = FrameHandle::new(id, widgets);
        assert!(handle.text_surface().is_none());
    }

    #[test]
    fn test_visibility_roundtrip() {
        let widgets = registry();
        let id = widgets.borrow_mut().register(Frame::new(WidgetType::Texture, None, None));
        let mut handle = FrameHandle::new(id, widgets);
        handle.set_visible(false);
        assert!(!handle.is_visible());
        handle.set_visible(true);
        assert!(handle.is_visible());
    }
}
