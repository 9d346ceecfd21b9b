use serde::Deserialize;

/// Kind labels the stock UI offers selectors for. The set is open: a deck
/// file can carry any label, these are just the two with dedicated keys.
pub const SENTENCE_KIND: &str = "sentence";
pub const VOCABULARY_KIND: &str = "vocabulary";

/// One prompt/answer pair tagged with a category label.
///
/// Every field defaults to the empty string, so a record missing a field
/// renders as empty text instead of failing the whole deck. The aliases
/// accept the field spellings older deck files use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Flashcard {
    #[serde(default, alias = "type")]
    pub kind: String,
    #[serde(default, alias = "chinese")]
    pub prompt: String,
    #[serde(default, alias = "english")]
    pub answer: String,
}

impl Flashcard {
    pub fn new(
        kind: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Flashcard {
            kind: kind.into(),
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// Human-facing label for a kind selector.
pub fn kind_label(kind: &str) -> String {
    match kind {
        SENTENCE_KIND => "Sentences".to_string(),
        VOCABULARY_KIND => "Vocabulary".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let card: Flashcard = serde_json::from_str(r#"{"kind": "sentence"}"#).unwrap();
        assert_eq!(card.kind, "sentence");
        assert_eq!(card.prompt, "");
        assert_eq!(card.answer, "");
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let card: Flashcard =
            serde_json::from_str(r#"{"type": "vocabulary", "chinese": "书", "english": "book"}"#)
                .unwrap();
        assert_eq!(card, Flashcard::new("vocabulary", "书", "book"));
    }

    #[test]
    fn stock_kinds_have_fixed_labels() {
        assert_eq!(kind_label(SENTENCE_KIND), "Sentences");
        assert_eq!(kind_label(VOCABULARY_KIND), "Vocabulary");
    }

    #[test]
    fn other_kinds_are_capitalized() {
        assert_eq!(kind_label("idiom"), "Idiom");
        assert_eq!(kind_label(""), "");
    }
}
