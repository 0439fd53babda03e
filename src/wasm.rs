//! WASM bindings for browser-based alignment editors.
//!
//! Inputs and outputs are JSON strings in the verse-object and alignment
//! formats. Failures are thrown as `{message, type}` objects serialized to
//! JSON, so editors can branch on `type == "InvalidatedAlignments"`.

use wasm_bindgen::prelude::*;

use crate::align::{get_blank_alignment_data_for_verse, merge, unmerge};
use crate::model::{AlignmentData, VerseData, VerseObject, verse_objects_from_json};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js_error(error: crate::Error) -> JsValue {
    JsValue::from_str(&error.to_payload().to_string())
}

/// Merge alignment data into the target-language verse text.
///
/// Takes `{alignments, wordBank}` JSON and returns the aligned verse
/// objects as JSON, or `null` when the text diverged from blank data.
#[wasm_bindgen]
pub fn merge_json(
    alignment_data: &str,
    verse_text: &str,
    use_verse_text: bool,
) -> Result<String, JsValue> {
    let data: AlignmentData =
        serde_json::from_str(alignment_data).map_err(|e| to_js_error(e.into()))?;
    let merged = merge(&data.alignments, &data.word_bank, verse_text, use_verse_text)
        .map_err(to_js_error)?;
    serde_json::to_string(&merged).map_err(|e| to_js_error(e.into()))
}

/// Split aligned verse objects into `{alignment, wordBank}` JSON.
///
/// `reference` is the original-language verse, either as plain text or as
/// verse-object JSON.
#[wasm_bindgen]
pub fn unmerge_json(verse_objects: &str, reference: &str) -> Result<String, JsValue> {
    let objects = verse_objects_from_json(verse_objects).map_err(to_js_error)?;
    let reference_objects = reference_objects(reference);
    let data = match &reference_objects {
        Some(objects) => VerseData::Objects(objects),
        None => VerseData::Text(reference),
    };
    let result = unmerge(&objects, data);
    serde_json::to_string(&result).map_err(|e| to_js_error(e.into()))
}

/// Blank `{alignments, wordBank}` JSON for an unaligned verse.
#[wasm_bindgen]
pub fn blank_alignments_json(source_verse: &str, target_text: &str) -> Result<String, JsValue> {
    let source = verse_objects_from_json(source_verse).map_err(to_js_error)?;
    let data = get_blank_alignment_data_for_verse(&source, target_text);
    serde_json::to_string(&data).map_err(|e| to_js_error(e.into()))
}

fn reference_objects(reference: &str) -> Option<Vec<VerseObject>> {
    let trimmed = reference.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        verse_objects_from_json(trimmed).ok()
    } else {
        None
    }
}
