use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("({0}) Unable to find a text surface on this object")]
    MissingTextSurface(String),

    #[error("({0}) Dialogue has no messages to display")]
    EmptyDialogue(String),

    #[error("Invalid text speed: {0} (expected a finite number of seconds > 0)")]
    InvalidTextSpeed(f64),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Widget not found: {0}")]
    WidgetNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
