//! XML type definitions for dialogue layout files.

use serde::Deserialize;

/// Root element of a layout file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "Ui")]
pub struct UiXml {
    #[serde(rename = "Dialogue", default)]
    pub dialogues: Vec<DialogueXml>,
}

/// A dialogue box definition.
#[derive(Debug, Deserialize, Clone)]
pub struct DialogueXml {
    #[serde(rename = "@name")]
    pub name: String,
    /// Seconds per revealed character.
    #[serde(rename = "@textSpeed")]
    pub text_speed: Option<f64>,

    #[serde(rename = "Messages")]
    pub messages: Option<MessagesXml>,
    #[serde(rename = "EndPrompt")]
    pub end_prompt: Option<RegionXml>,
}

impl DialogueXml {
    /// Message elements in display order.
    pub fn messages(&self) -> &[MessageXml] {
        self.messages.as_ref().map(|m| m.children.as_slice()).unwrap_or(&[])
    }
}

/// Ordered message children.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessagesXml {
    #[serde(rename = "$value", default)]
    pub children: Vec<MessageXml>,
}

/// Elements allowed inside `<Messages>`.
///
/// Only FontStrings carry text; other widgets are accepted so a layout
/// mistake is reported when the dialogue is built instead of failing the
/// whole file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum MessageXml {
    FontString(FontStringXml),
    Frame(RegionXml),
    Texture(RegionXml),
}

impl MessageXml {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::FontString(f) => f.name.as_deref(),
            Self::Frame(r) | Self::Texture(r) => r.name.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FontStringXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@text")]
    pub text: Option<String>,
}

/// A widget with no content beyond its name.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RegionXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
}
