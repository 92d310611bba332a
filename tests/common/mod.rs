//! Shared test helpers.

use dialogue_sim::surface::MessageSurface;
use dialogue_sim::widget::{Frame, FrameHandle, WidgetRegistry, WidgetType};
use dialogue_sim::DialogueSequencer;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Sample layout shipped with the crate.
#[allow(dead_code)]
pub fn sample_layout() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("layouts").join("intro.xml")
}

/// A dialogue box built directly in a registry, without a layout file.
#[allow(dead_code)]
pub struct TestDialogue {
    pub widgets: Rc<RefCell<WidgetRegistry>>,
    pub root: u64,
    pub prompt: u64,
    pub lines: Vec<u64>,
    pub sequencer: DialogueSequencer,
}

#[allow(dead_code)]
impl TestDialogue {
    pub fn new(texts: &[&str], text_speed: f64) -> Self {
        let widgets = Rc::new(RefCell::new(WidgetRegistry::new()));
        let (root, prompt, lines) = {
            let mut reg = widgets.borrow_mut();
            let root = reg.register(Frame::new(WidgetType::Frame, Some("TestDialogue".into()), None));
            let prompt = reg.register(Frame::new(WidgetType::Texture, Some("TestPrompt".into()), Some(root)));
            let lines: Vec<u64> = texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let mut line = Frame::font_string(Some(format!("TestLine{}", i)), Some(root), text);
                    line.hide();
                    reg.register(line)
                })
                .collect();
            (root, prompt, lines)
        };

        let sources: Vec<Box<dyn MessageSurface>> = lines
            .iter()
            .map(|&id| Box::new(FrameHandle::new(id, Rc::clone(&widgets))) as Box<dyn MessageSurface>)
            .collect();
        let sequencer = DialogueSequencer::new("TestDialogue", text_speed, sources)
            .with_root(Box::new(FrameHandle::new(root, Rc::clone(&widgets))))
            .with_end_prompt(Box::new(FrameHandle::new(prompt, Rc::clone(&widgets))));

        Self { widgets, root, prompt, lines, sequencer }
    }

    pub fn visible(&self, id: u64) -> bool {
        self.widgets.borrow().get(id).map(|f| f.visible).unwrap_or(false)
    }

    pub fn text(&self, id: u64) -> String {
        self.widgets
            .borrow()
            .get(id)
            .and_then(|f| f.text.clone())
            .unwrap_or_default()
    }

    pub fn line_text(&self, index: usize) -> String {
        self.text(self.lines[index])
    }
}
