//! Frame widget - the base container for UI elements.

use super::{next_widget_id, WidgetType};

/// A Frame is the base widget type of the host.
#[derive(Debug)]
pub struct Frame {
    /// Unique widget ID.
    pub id: u64,
    /// Widget type.
    pub widget_type: WidgetType,
    /// Global name (optional).
    pub name: Option<String>,
    /// Parent widget ID.
    pub parent_id: Option<u64>,
    /// Child widget IDs, in creation order.
    pub children: Vec<u64>,
    /// Whether the frame itself is shown (ignores ancestors).
    pub visible: bool,
    /// Text content (for FontString widgets).
    pub text: Option<String>,
}

impl Frame {
    pub fn new(widget_type: WidgetType, name: Option<String>, parent_id: Option<u64>) -> Self {
        Self {
            id: next_widget_id(),
            widget_type,
            name,
            parent_id,
            children: Vec::new(),
            visible: true,
            text: widget_type.has_text().then(String::new),
        }
    }

    /// Create a FontString preloaded with `text`.
    pub fn font_string(name: Option<String>, parent_id: Option<u64>, text: &str) -> Self {
        let mut frame = Self::new(WidgetType::FontString, name, parent_id);
        frame.text = Some(text.to_string());
        frame
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Name for diagnostics, falling back to the widget type and ID.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("(anon {} #{})", self.widget_type.as_str(), self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_string_starts_with_text() {
        let frame = Frame::font_string(Some("Line".into()), None, "Hello");
        assert_eq!(frame.text.as_deref(), Some("Hello"));
        assert!(frame.visible);
    }

    #[test]
    fn test_plain_frame_has_no_text() {
        let frame = Frame::new(WidgetType::Frame, None, None);
        assert!(frame.text.is_none());
        assert!(frame.display_name().starts_with("(anon Frame #"));
    }
}
