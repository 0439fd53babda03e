//! Alignment records and the word bank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::occurrence;
use super::verse_object::{ALIGNMENT_TAG, ObjectKind, VerseObject, WORD_TAG};

/// A word reference carried by alignments and the word bank.
///
/// `word` is the surface form. `occurrence` is 1-based within the verse and
/// `occurrences` is the total count of that form. Other attributes
/// (`strong`, `lemma`, `morph`, `tw`, ...) ride along.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordObject {
    #[serde(default)]
    pub word: String,

    #[serde(
        default,
        deserialize_with = "occurrence::deserialize",
        skip_serializing_if = "occurrence::is_unset"
    )]
    pub occurrence: u32,

    #[serde(
        default,
        deserialize_with = "occurrence::deserialize",
        skip_serializing_if = "occurrence::is_unset"
    )]
    pub occurrences: u32,

    #[serde(default, alias = "strongs", skip_serializing_if = "Option::is_none")]
    pub strong: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph: Option<String>,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl WordObject {
    pub fn new(word: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        Self {
            word: word.into(),
            occurrence,
            occurrences,
            ..Default::default()
        }
    }

    pub fn with_strong(mut self, strong: impl Into<String>) -> Self {
        self.strong = Some(strong.into());
        self
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_morph(mut self, morph: impl Into<String>) -> Self {
        self.morph = Some(morph.into());
        self
    }

    /// Same surface word at the same occurrence.
    pub fn same_word(&self, other: &WordObject) -> bool {
        self.word == other.word && self.occurrence == other.occurrence
    }

    /// Alignment-format view of a verse object.
    ///
    /// The word is the object's `text`, falling back to `content` for
    /// milestones. Structural fields (`tag`, `type`, `children`, `endTag`)
    /// are dropped; everything else is kept.
    pub fn from_verse_object(object: &VerseObject) -> Self {
        let word = object
            .text
            .clone()
            .or_else(|| object.content.clone())
            .unwrap_or_default();
        Self {
            word,
            occurrence: object.occurrence,
            occurrences: object.occurrences,
            strong: object.strong.clone(),
            lemma: object.lemma.clone(),
            morph: object.morph.clone(),
            attributes: object.attributes.clone(),
        }
    }

    /// Target-language word object for a bottom word.
    pub fn to_word_object(&self) -> VerseObject {
        VerseObject {
            tag: Some(WORD_TAG.to_string()),
            kind: ObjectKind::Word,
            text: Some(self.word.clone()),
            occurrence: self.occurrence,
            occurrences: self.occurrences,
            strong: self.strong.clone(),
            lemma: self.lemma.clone(),
            morph: self.morph.clone(),
            attributes: self.attributes.clone(),
            ..Default::default()
        }
    }

    /// Alignment milestone for a top word, initially with empty children.
    ///
    /// The word becomes the milestone's `content`; the `tw` attribute is
    /// not carried into the verse.
    pub fn to_milestone(&self) -> VerseObject {
        let mut attributes = self.attributes.clone();
        attributes.remove("tw");
        VerseObject {
            tag: Some(ALIGNMENT_TAG.to_string()),
            kind: ObjectKind::Milestone,
            content: Some(self.word.clone()),
            occurrence: self.occurrence,
            occurrences: self.occurrences,
            strong: self.strong.clone(),
            lemma: self.lemma.clone(),
            morph: self.morph.clone(),
            children: Some(Vec::new()),
            attributes,
            ..Default::default()
        }
    }
}

/// One alignment: source-language top words joined to target-language
/// bottom words.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    #[serde(default)]
    pub top_words: Vec<WordObject>,
    #[serde(default)]
    pub bottom_words: Vec<WordObject>,
}

impl Alignment {
    pub fn new(top_words: Vec<WordObject>, bottom_words: Vec<WordObject>) -> Self {
        Self {
            top_words,
            bottom_words,
        }
    }

    /// An original-language word with nothing aligned to it yet.
    pub fn blank(top_word: WordObject) -> Self {
        Self {
            top_words: vec![top_word],
            bottom_words: Vec::new(),
        }
    }

    /// True if no target word is aligned yet.
    pub fn is_blank(&self) -> bool {
        self.bottom_words.is_empty()
    }
}

/// Editor-side alignment state for a verse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentData {
    #[serde(default)]
    pub alignments: Vec<Alignment>,
    #[serde(default)]
    pub word_bank: Vec<WordObject>,
}

/// Result of splitting an aligned verse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmergeResult {
    pub alignment: Vec<Alignment>,
    pub word_bank: Vec<WordObject>,
}

impl From<UnmergeResult> for AlignmentData {
    fn from(result: UnmergeResult) -> Self {
        Self {
            alignments: result.alignment,
            word_bank: result.word_bank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alignment_json_shape() {
        let alignment = Alignment::new(
            vec![WordObject::new("hola", 1, 1).with_strong("x1")],
            vec![WordObject::new("hello", 1, 1)],
        );
        assert_eq!(
            serde_json::to_value(&alignment).unwrap(),
            json!({
                "topWords": [{"word": "hola", "occurrence": 1, "occurrences": 1, "strong": "x1"}],
                "bottomWords": [{"word": "hello", "occurrence": 1, "occurrences": 1}]
            })
        );
    }

    #[test]
    fn test_from_milestone_uses_content() {
        let milestone = VerseObject::milestone("λόγος", 1, 1, vec![]).with_lemma("λόγος");
        let word = WordObject::from_verse_object(&milestone);
        assert_eq!(word.word, "λόγος");
        assert_eq!(word.lemma.as_deref(), Some("λόγος"));
    }

    #[test]
    fn test_to_milestone_drops_tw() {
        let mut top = WordObject::new("Θεός", 1, 1);
        top.attributes.insert("tw".into(), json!("rc://en/tw/dict/bible/kt/god"));
        top.attributes.insert("note".into(), json!("kept"));

        let milestone = top.to_milestone();
        assert_eq!(milestone.content.as_deref(), Some("Θεός"));
        assert!(milestone.text.is_none());
        assert!(!milestone.attributes.contains_key("tw"));
        assert_eq!(milestone.attributes.get("note"), Some(&json!("kept")));
        assert_eq!(milestone.children, Some(vec![]));
    }

    #[test]
    fn test_is_blank_ignores_top_words() {
        assert!(Alignment::blank(WordObject::new("δὲ", 1, 1)).is_blank());
        assert!(Alignment::default().is_blank());
        // bottom words without top words still count as aligned
        let orphan = Alignment::new(vec![], vec![WordObject::new("and", 1, 1)]);
        assert!(!orphan.is_blank());
    }

    #[test]
    fn test_alignment_data_defaults() {
        let data: AlignmentData = serde_json::from_value(json!({"alignments": []})).unwrap();
        assert!(data.word_bank.is_empty());
    }
}
