//! Dialogue loader - builds frames and sequencers from layout files.

use crate::config::DEFAULT_TEXT_SPEED;
use crate::dialogue::DialogueSequencer;
use crate::surface::MessageSurface;
use crate::widget::{Frame, FrameHandle, WidgetRegistry, WidgetType};
use crate::xml::{parse_xml_file, DialogueXml, MessageXml, UiXml};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// How text speed is chosen for loaded dialogues.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Used when a dialogue doesn't set `textSpeed`.
    pub default_text_speed: f64,
    /// Wins over every layout value when set.
    pub text_speed_override: Option<f64>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            default_text_speed: DEFAULT_TEXT_SPEED,
            text_speed_override: None,
        }
    }
}

/// A dialogue built from a layout, with the frame that holds it.
#[derive(Debug)]
pub struct LoadedDialogue {
    pub root_id: u64,
    pub sequencer: DialogueSequencer,
}

/// Load every dialogue in a layout file.
pub fn load_layout_file(
    widgets: &Rc<RefCell<WidgetRegistry>>,
    path: &Path,
    options: &LoadOptions,
) -> crate::Result<Vec<LoadedDialogue>> {
    let ui = parse_xml_file(path)?;
    tracing::debug!("Loaded {} dialogue(s) from {}", ui.dialogues.len(), path.display());
    Ok(load_layout(widgets, &ui, options))
}

/// Build frames and sequencers for every dialogue in a parsed layout.
pub fn load_layout(
    widgets: &Rc<RefCell<WidgetRegistry>>,
    ui: &UiXml,
    options: &LoadOptions,
) -> Vec<LoadedDialogue> {
    ui.dialogues
        .iter()
        .map(|dialogue| build_dialogue(widgets, dialogue, options))
        .collect()
}

/// Create the dialogue's frames, all hidden until the dialogue starts.
fn build_dialogue(
    widgets: &Rc<RefCell<WidgetRegistry>>,
    xml: &DialogueXml,
    options: &LoadOptions,
) -> LoadedDialogue {
    let mut registry = widgets.borrow_mut();

    let mut root = Frame::new(WidgetType::Frame, Some(xml.name.clone()), None);
    root.hide();
    let root_id = registry.register(root);

    let message_ids: Vec<u64> = xml
        .messages()
        .iter()
        .map(|message| {
            let mut frame = message_frame(message, root_id);
            frame.hide();
            registry.register(frame)
        })
        .collect();

    let prompt_id = xml.end_prompt.as_ref().map(|prompt| {
        let mut frame = Frame::new(WidgetType::Texture, prompt.name.clone(), Some(root_id));
        frame.hide();
        registry.register(frame)
    });
    drop(registry);

    let text_speed = options
        .text_speed_override
        .or(xml.text_speed)
        .unwrap_or(options.default_text_speed);

    let sources: Vec<Box<dyn MessageSurface>> = message_ids
        .into_iter()
        .map(|id| Box::new(FrameHandle::new(id, Rc::clone(widgets))) as Box<dyn MessageSurface>)
        .collect();

    let mut sequencer = DialogueSequencer::new(xml.name.clone(), text_speed, sources)
        .with_root(Box::new(FrameHandle::new(root_id, Rc::clone(widgets))));
    if let Some(prompt_id) = prompt_id {
        sequencer = sequencer.with_end_prompt(Box::new(FrameHandle::new(prompt_id, Rc::clone(widgets))));
    }

    LoadedDialogue { root_id, sequencer }
}

fn message_frame(message: &MessageXml, parent_id: u64) -> Frame {
    match message {
        MessageXml::FontString(fs) => {
            Frame::font_string(fs.name.clone(), Some(parent_id), fs.text.as_deref().unwrap_or(""))
        }
        MessageXml::Frame(region) => Frame::new(WidgetType::Frame, region.name.clone(), Some(parent_id)),
        MessageXml::Texture(region) => Frame::new(WidgetType::Texture, region.name.clone(), Some(parent_id)),
    }
}
