//! Core data model for verse alignment.
//!
//! This module contains:
//! - Verse objects (words, text, milestones, opaque markers)
//! - Alignment records and the word bank
//! - Verse input that may be raw text or already-parsed objects

mod alignment;
mod verse_object;

pub use alignment::{Alignment, AlignmentData, UnmergeResult, WordObject};
pub use verse_object::{ALIGNMENT_TAG, KEY_TERM_TAG, ObjectKind, VerseObject, WORD_TAG};

use serde::Deserialize;

use crate::error::Result;

/// A verse given either as a plain string or as verse objects.
#[derive(Debug, Clone, Copy)]
pub enum VerseData<'a> {
    Text(&'a str),
    Objects(&'a [VerseObject]),
}

impl<'a> From<&'a str> for VerseData<'a> {
    fn from(text: &'a str) -> Self {
        VerseData::Text(text)
    }
}

impl<'a> From<&'a String> for VerseData<'a> {
    fn from(text: &'a String) -> Self {
        VerseData::Text(text.as_str())
    }
}

impl<'a> From<&'a [VerseObject]> for VerseData<'a> {
    fn from(objects: &'a [VerseObject]) -> Self {
        VerseData::Objects(objects)
    }
}

impl<'a> From<&'a Vec<VerseObject>> for VerseData<'a> {
    fn from(objects: &'a Vec<VerseObject>) -> Self {
        VerseData::Objects(objects.as_slice())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VerseObjectsDocument {
    Wrapped {
        #[serde(rename = "verseObjects")]
        verse_objects: Vec<VerseObject>,
    },
    Bare(Vec<VerseObject>),
}

/// Parse verse objects from JSON, accepting either a bare array or a
/// `{"verseObjects": [...]}` wrapper.
pub fn verse_objects_from_json(json: &str) -> Result<Vec<VerseObject>> {
    let document: VerseObjectsDocument = serde_json::from_str(json)?;
    Ok(match document {
        VerseObjectsDocument::Wrapped { verse_objects } => verse_objects,
        VerseObjectsDocument::Bare(objects) => objects,
    })
}

/// Lenient occurrence counters.
///
/// Occurrence values arrive as numbers or numeric strings. They are parsed
/// once at the boundary; anything unparsable becomes 0, which never matches
/// a real occurrence.
pub(crate) mod occurrence {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce(&value))
    }

    pub fn coerce(value: &Value) -> u32 {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            Value::String(s) => parse_leading(s),
            _ => 0,
        }
    }

    /// Leading decimal digits of `s`, ignoring surrounding whitespace.
    pub fn parse_leading(s: &str) -> u32 {
        let s = s.trim_start();
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        s[..end].parse().unwrap_or(0)
    }

    pub fn is_unset(value: &u32) -> bool {
        *value == 0
    }
}
