//! USFM verse fragment writer.

use std::io::{self, Write};

use serde_json::Value;

use crate::model::{ObjectKind, VerseObject};

use super::markers::starts_line;

/// Configuration for USFM output.
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Start every `\w` word and alignment milestone on a new line.
    pub forced_new_lines: bool,
}

/// Serializes verse objects as a USFM verse fragment.
///
/// # Example
///
/// ```
/// use versealign::VerseObject;
/// use versealign::markup::UsfmWriter;
///
/// let objects = vec![
///     VerseObject::milestone("λόγος", 1, 1, vec![VerseObject::word("word", 1, 1)]),
///     VerseObject::text("."),
/// ];
/// assert_eq!(
///     UsfmWriter::new().to_usfm(&objects),
///     r#"\zaln-s |x-occurrence="1" x-occurrences="1" x-content="λόγος"\*\w word|x-occurrence="1" x-occurrences="1"\w*\zaln-e\*."#
/// );
/// ```
pub struct UsfmWriter {
    config: WriterConfig,
}

impl UsfmWriter {
    /// Create a new writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Configure the writer with custom settings.
    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Write the fragment to any `Write` destination.
    pub fn write<W: Write>(&self, objects: &[VerseObject], writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_usfm(objects).as_bytes())
    }

    /// Render the fragment as a string.
    pub fn to_usfm(&self, objects: &[VerseObject]) -> String {
        let mut out = String::new();
        for object in objects {
            self.write_object(object, &mut out);
        }
        out
    }

    fn write_object(&self, object: &VerseObject, out: &mut String) {
        match &object.kind {
            ObjectKind::Text => {
                out.push_str(object.text.as_deref().unwrap_or_default());
            }
            ObjectKind::Word => {
                self.new_line(out);
                let tag = object.tag.as_deref().unwrap_or("w");
                out.push('\\');
                out.push_str(tag);
                out.push(' ');
                out.push_str(object.text.as_deref().unwrap_or_default());
                let attributes = word_attributes(object);
                if !attributes.is_empty() {
                    out.push('|');
                    out.push_str(&attributes);
                }
                out.push('\\');
                out.push_str(tag);
                out.push('*');
            }
            ObjectKind::Milestone => {
                self.new_line(out);
                let tag = object.tag.as_deref().unwrap_or("zaln");
                out.push('\\');
                out.push_str(tag);
                out.push_str("-s |");
                out.push_str(&milestone_attributes(object));
                out.push_str("\\*");
                for child in object.children.iter().flatten() {
                    self.write_object(child, out);
                }
                out.push('\\');
                out.push_str(tag);
                out.push_str("-e\\*");
            }
            kind => {
                let Some(tag) = object.tag.as_deref() else {
                    out.push_str(object.text.as_deref().unwrap_or_default());
                    return;
                };
                if starts_line(kind) && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\\');
                out.push_str(tag);
                if let Some(Value::String(number)) = object.attributes.get("number") {
                    out.push(' ');
                    out.push_str(number);
                }

                out.push(' ');
                if let Some(body) = object.content.as_deref().or(object.text.as_deref()) {
                    out.push_str(body);
                }
                for child in object.children.iter().flatten() {
                    self.write_object(child, out);
                }
                if let Some(end) = &object.end_tag {
                    out.push('\\');
                    out.push_str(end);
                }
            }
        }
    }

    fn new_line(&self, out: &mut String) {
        if self.config.forced_new_lines && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
    }
}

impl Default for UsfmWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize verse objects with the default writer.
pub fn serialize_verse(objects: &[VerseObject]) -> String {
    UsfmWriter::new().to_usfm(objects)
}

fn push_attribute(parts: &mut Vec<String>, key: &str, value: &str) {
    parts.push(format!("{key}=\"{value}\""));
}

fn push_extra_attributes(parts: &mut Vec<String>, object: &VerseObject) {
    for (key, value) in &object.attributes {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Null => continue,
            other => other.to_string(),
        };
        push_attribute(parts, &format!("x-{key}"), &value);
    }
}

fn push_occurrences(parts: &mut Vec<String>, object: &VerseObject) {
    if object.occurrence > 0 {
        push_attribute(parts, "x-occurrence", &object.occurrence.to_string());
    }
    if object.occurrences > 0 {
        push_attribute(parts, "x-occurrences", &object.occurrences.to_string());
    }
}

fn word_attributes(object: &VerseObject) -> String {
    let mut parts = Vec::new();
    if let Some(lemma) = &object.lemma {
        push_attribute(&mut parts, "lemma", lemma);
    }
    if let Some(strong) = &object.strong {
        push_attribute(&mut parts, "strong", strong);
    }
    if let Some(morph) = &object.morph {
        push_attribute(&mut parts, "x-morph", morph);
    }
    push_extra_attributes(&mut parts, object);
    push_occurrences(&mut parts, object);
    parts.join(" ")
}

fn milestone_attributes(object: &VerseObject) -> String {
    let mut parts = Vec::new();
    if let Some(strong) = &object.strong {
        push_attribute(&mut parts, "x-strong", strong);
    }
    if let Some(lemma) = &object.lemma {
        push_attribute(&mut parts, "x-lemma", lemma);
    }
    if let Some(morph) = &object.morph {
        push_attribute(&mut parts, "x-morph", morph);
    }
    push_extra_attributes(&mut parts, object);
    push_occurrences(&mut parts, object);
    if let Some(content) = &object.content {
        push_attribute(&mut parts, "x-content", content);
    }
    parts.join(" ")
}
