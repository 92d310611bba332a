//! Registry of every widget in the host.

use super::Frame;
use std::collections::HashMap;

/// Registry of all widgets in the UI.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    /// Widgets by ID.
    widgets: HashMap<u64, Frame>,
    /// Widget IDs by name.
    names: HashMap<String, u64>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new widget, linking it under its parent if it has one.
    pub fn register(&mut self, widget: Frame) -> u64 {
        let id = widget.id;
        if let Some(ref name) = widget.name {
            if let Some(previous) = self.names.insert(name.clone(), id) {
                tracing::warn!("Widget name {:?} re-registered (was id={})", name, previous);
            }
        }
        let parent_id = widget.parent_id;
        self.widgets.insert(id, widget);
        if let Some(parent_id) = parent_id {
            self.add_child(parent_id, id);
        }
        id
    }

    /// Get a widget by ID.
    pub fn get(&self, id: u64) -> Option<&Frame> {
        self.widgets.get(&id)
    }

    /// Get a mutable widget by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Frame> {
        self.widgets.get_mut(&id)
    }

    /// Get a widget by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Frame> {
        self.names.get(name).and_then(|id| self.widgets.get(id))
    }

    /// Get a widget ID by name.
    pub fn get_id_by_name(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    fn add_child(&mut self, parent_id: u64, child_id: u64) {
        match self.widgets.get_mut(&parent_id) {
            Some(parent) => parent.children.push(child_id),
            None => tracing::warn!("Parent id={} not found for child id={}", parent_id, child_id),
        }
    }

    /// Child IDs of `id`, in creation order.
    pub fn children(&self, id: u64) -> &[u64] {
        self.widgets.get(&id).map(|w| w.children.as_slice()).unwrap_or(&[])
    }

    /// IDs of frames without a parent, sorted by ID (creation order).
    pub fn root_ids(&self) -> Vec<u64> {
        let mut roots: Vec<u64> = self
            .widgets
            .values()
            .filter(|w| w.parent_id.is_none())
            .map(|w| w.id)
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Whether a widget and all of its ancestors are shown.
    pub fn is_effectively_visible(&self, id: u64) -> bool {
        let mut current = Some(id);
        while let Some(check_id) = current {
            match self.widgets.get(&check_id) {
                Some(w) if w.visible => current = w.parent_id,
                _ => return false,
            }
        }
        true
    }
}
