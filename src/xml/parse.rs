//! XML parsing functions.

use super::types::UiXml;
use std::path::Path;

/// Parse a layout from a string.
pub fn parse_xml(xml: &str) -> Result<UiXml, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}

/// Parse a layout file from disk.
pub fn parse_xml_file(path: &Path) -> crate::Result<UiXml> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_xml(&contents)?)
}
