//! Frame tree dump for diagnostics.

use crate::widget::WidgetRegistry;
use std::fmt::Write;

/// Render every root frame and its descendants, one frame per line.
///
/// With `visible_only`, frames hidden directly or through an ancestor are
/// left out along with their subtrees.
pub fn format_frame_tree(widgets: &WidgetRegistry, visible_only: bool) -> String {
    let mut out = String::new();
    for id in widgets.root_ids() {
        format_frame(widgets, id, 0, visible_only, &mut out);
    }
    out
}

/// Dump the frame tree to stdout.
pub fn print_frame_tree(widgets: &WidgetRegistry, visible_only: bool) {
    print!("{}", format_frame_tree(widgets, visible_only));
}

fn format_frame(widgets: &WidgetRegistry, id: u64, depth: usize, visible_only: bool, out: &mut String) {
    let Some(frame) = widgets.get(id) else { return };
    if visible_only && !widgets.is_effectively_visible(id) {
        return;
    }

    let state = if frame.visible { "shown" } else { "hidden" };
    let _ = write!(
        out,
        "{:indent$}{} [{}] ({})",
        "",
        frame.display_name(),
        frame.widget_type.as_str(),
        state,
        indent = depth * 2
    );
    if let Some(text) = &frame.text {
        let _ = write!(out, " {:?}", text);
    }
    out.push('\n');

    for &child in &frame.children {
        format_frame(widgets, child, depth + 1, visible_only, out);
    }
}
