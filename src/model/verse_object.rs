//! Verse object tree nodes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::occurrence;

/// Tag used for target-language word objects.
pub const WORD_TAG: &str = "w";
/// Tag used for alignment milestones.
pub const ALIGNMENT_TAG: &str = "zaln";
/// Tag used for key-term milestones.
pub const KEY_TERM_TAG: &str = "k";

/// Kind of a verse object (`type` in the JSON format).
///
/// Word, text and milestone drive alignment; every other kind (footnotes,
/// paragraphs, quotes, sections, ...) passes through opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ObjectKind {
    /// Object without a `type` attribute (e.g. character style markers).
    #[default]
    Untyped,
    Word,
    Text,
    Milestone,
    Other(String),
}

impl ObjectKind {
    pub fn is_untyped(&self) -> bool {
        matches!(self, ObjectKind::Untyped)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ObjectKind::Untyped => "",
            ObjectKind::Word => "word",
            ObjectKind::Text => "text",
            ObjectKind::Milestone => "milestone",
            ObjectKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ObjectKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => ObjectKind::Untyped,
            "word" => ObjectKind::Word,
            "text" => ObjectKind::Text,
            "milestone" => ObjectKind::Milestone,
            _ => ObjectKind::Other(value),
        }
    }
}

impl From<&str> for ObjectKind {
    fn from(value: &str) -> Self {
        ObjectKind::from(value.to_string())
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ObjectKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObjectKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ObjectKind::from(value))
    }
}

/// A node of the nested verse-object tree.
///
/// This mirrors the JSON verse-object format used by translation editors:
/// words, literal text, alignment milestones and opaque markers share one shape.
/// `children` distinguishes "no children" (`None`) from "empty children".
/// Attributes this crate does not interpret are kept in `attributes` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerseObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "ObjectKind::is_untyped")]
    pub kind: ObjectKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

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

    #[serde(rename = "endTag", default, skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VerseObject>>,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl VerseObject {
    /// Create a `\w` word object.
    pub fn word(text: impl Into<String>, occurrence: u32, occurrences: u32) -> Self {
        Self {
            tag: Some(WORD_TAG.to_string()),
            kind: ObjectKind::Word,
            text: Some(text.into()),
            occurrence,
            occurrences,
            ..Default::default()
        }
    }

    /// Create a literal text object.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ObjectKind::Text,
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Create an alignment milestone wrapping `children`.
    pub fn milestone(
        content: impl Into<String>,
        occurrence: u32,
        occurrences: u32,
        children: Vec<VerseObject>,
    ) -> Self {
        Self {
            tag: Some(ALIGNMENT_TAG.to_string()),
            kind: ObjectKind::Milestone,
            content: Some(content.into()),
            occurrence,
            occurrences,
            children: Some(children),
            ..Default::default()
        }
    }

    /// Create an opaque marker object such as a footnote.
    pub fn marker(tag: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            tag: Some(tag.into()),
            kind,
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

    pub fn is_word(&self) -> bool {
        self.kind == ObjectKind::Word
    }

    pub fn is_text(&self) -> bool {
        self.kind == ObjectKind::Text
    }

    pub fn is_milestone(&self) -> bool {
        self.kind == ObjectKind::Milestone
    }

    /// Text of a word object, or `None` for anything else.
    pub fn word_text(&self) -> Option<&str> {
        if self.is_word() {
            self.text.as_deref()
        } else {
            None
        }
    }

    /// Milestone identity used to join non-contiguous spans of one alignment.
    pub fn same_milestone(&self, other: &VerseObject) -> bool {
        self.kind == other.kind && self.content == other.content && self.occurrence == other.occurrence
    }

    /// Copy of this object without nested children (used by the arena tree).
    pub(crate) fn shallow_clone(&self) -> VerseObject {
        VerseObject {
            tag: self.tag.clone(),
            kind: self.kind.clone(),
            text: self.text.clone(),
            content: self.content.clone(),
            occurrence: self.occurrence,
            occurrences: self.occurrences,
            strong: self.strong.clone(),
            lemma: self.lemma.clone(),
            morph: self.morph.clone(),
            end_tag: self.end_tag.clone(),
            children: None,
            attributes: self.attributes.clone(),
        }
    }
}
