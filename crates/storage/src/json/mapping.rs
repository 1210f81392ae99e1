use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use study_core::model::{Card, MISSING_ANSWER, MISSING_PROMPT};

use crate::repository::StorageError;

/// On-disk shape of a card.
///
/// Field names match the subject files written by earlier versions of the app.
/// Absent or null fields are filled with placeholders here so the domain never
/// sees an optional prompt or answer. Numbers and booleans are kept as their
/// JSON text so hand-edited files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CardRecord {
    #[serde(
        rename = "naslov",
        default = "missing_prompt",
        deserialize_with = "prompt_text"
    )]
    pub prompt: String,
    #[serde(
        rename = "puni_odgovor",
        default = "missing_answer",
        deserialize_with = "answer_text"
    )]
    pub answer: String,
}

fn missing_prompt() -> String {
    MISSING_PROMPT.to_owned()
}

fn missing_answer() -> String {
    MISSING_ANSWER.to_owned()
}

fn prompt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?, MISSING_PROMPT))
}

fn answer_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?, MISSING_ANSWER))
}

fn value_text(value: Value, placeholder: &str) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => placeholder.to_owned(),
        other => other.to_string(),
    }
}

impl CardRecord {
    pub(crate) fn from_card(card: &Card) -> Self {
        Self {
            prompt: card.prompt().to_owned(),
            answer: card.answer().to_owned(),
        }
    }

    pub(crate) fn into_card(self) -> Card {
        Card::new(self.prompt, self.answer)
    }
}

/// Parse a subject file. Returns `None` when the content is not a list of records.
pub(crate) fn decode_cards(raw: &str) -> Option<Vec<Card>> {
    let records: Vec<CardRecord> = serde_json::from_str(raw).ok()?;
    Some(records.into_iter().map(CardRecord::into_card).collect())
}

/// Serialize a full card set, indented by four spaces.
pub(crate) fn encode_cards(cards: &[Card]) -> Result<Vec<u8>, StorageError> {
    let records: Vec<CardRecord> = cards.iter().map(CardRecord::from_card).collect();
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_legacy_field_names() {
        let raw = r#"[{"naslov": "Q1", "puni_odgovor": "A1"}]"#;
        assert_eq!(decode_cards(raw), Some(vec![Card::new("Q1", "A1")]));
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let raw = r#"[{"naslov": "Only a title"}, {"puni_odgovor": "Only an answer"}]"#;
        let cards = decode_cards(raw).unwrap();
        assert_eq!(cards[0].answer(), MISSING_ANSWER);
        assert_eq!(cards[1].prompt(), MISSING_PROMPT);
    }

    #[test]
    fn non_string_values_are_kept_as_text() {
        let raw = r#"[{"naslov": "WW2 end?", "puni_odgovor": 1945},
                      {"naslov": null, "puni_odgovor": true}]"#;
        let cards = decode_cards(raw).unwrap();
        assert_eq!(cards[0], Card::new("WW2 end?", "1945"));
        assert_eq!(cards[1].prompt(), MISSING_PROMPT);
        assert_eq!(cards[1].answer(), "true");
    }

    #[test]
    fn non_list_content_is_rejected() {
        assert_eq!(decode_cards("{\"naslov\": \"x\"}"), None);
        assert_eq!(decode_cards("not json"), None);
        assert_eq!(decode_cards(""), None);
    }

    #[test]
    fn encoding_keeps_non_ascii_and_uses_four_spaces() {
        let bytes = encode_cards(&[Card::new("Šta je ćelija?", "Osnovna jedinica.")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Šta je ćelija?"));
        assert!(text.contains("\n    {\n        \"naslov\""));
    }
}
