//! XML parsing for dialogue layout files.

mod parse;
mod types;

pub use parse::{parse_xml, parse_xml_file};
pub use types::{DialogueXml, FontStringXml, MessageXml, MessagesXml, RegionXml, UiXml};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialogue() {
        let xml = r#"
            <Ui>
                <Dialogue name="Intro" textSpeed="0.05">
                    <Messages>
                        <FontString name="IntroLine1" text="Hi"/>
                        <FontString text="Bye"/>
                    </Messages>
                    <EndPrompt name="IntroPrompt"/>
                </Dialogue>
            </Ui>
        "#;

        let ui = parse_xml(xml).unwrap();
        assert_eq!(ui.dialogues.len(), 1);

        let dialogue = &ui.dialogues[0];
        assert_eq!(dialogue.name, "Intro");
        assert_eq!(dialogue.text_speed, Some(0.05));
        assert_eq!(dialogue.messages().len(), 2);
        assert_eq!(dialogue.messages()[0].name(), Some("IntroLine1"));
        assert_eq!(
            dialogue.end_prompt.as_ref().and_then(|p| p.name.as_deref()),
            Some("IntroPrompt")
        );
    }

    #[test]
    fn test_message_order_is_kept_across_types() {
        let xml = r#"
            <Ui>
                <Dialogue name="Mixed">
                    <Messages>
                        <FontString name="A" text="a"/>
                        <Frame name="B"/>
                        <FontString name="C" text="c"/>
                    </Messages>
                </Dialogue>
            </Ui>
        "#;

        let ui = parse_xml(xml).unwrap();
        let names: Vec<_> = ui.dialogues[0].messages().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec![Some("A"), Some("B"), Some("C")]);
        assert!(matches!(ui.dialogues[0].messages()[1], MessageXml::Frame(_)));
        assert!(ui.dialogues[0].end_prompt.is_none());
        assert!(ui.dialogues[0].text_speed.is_none());
    }

    #[test]
    fn test_dialogue_without_messages() {
        let ui = parse_xml(r#"<Ui><Dialogue name="Nothing"/></Ui>"#).unwrap();
        assert!(ui.dialogues[0].messages().is_empty());
    }

    #[test]
    fn test_missing_dialogue_name_is_an_error() {
        assert!(parse_xml(r#"<Ui><Dialogue/></Ui>"#).is_err());
    }
}
