//! # versealign
//!
//! Word alignment between an original-language verse and its translation.
//!
//! An aligned verse is a tree of verse objects in which original-language
//! words are milestones wrapping the target-language words aligned to them.
//! Alignment editors work on a flat form instead: a list of
//! `{topWords, bottomWords}` pairs plus a word bank of unaligned words.
//!
//! ## Features
//!
//! - [`merge`] alignment data and verse text into aligned verse objects
//! - [`unmerge`] aligned verse objects back into alignments and a word bank
//! - Blank alignment state for unaligned verses
//! - USFM verse fragment parsing and serialization
//! - Morphology code decoding for display
//!
//! ## Quick Start
//!
//! ```
//! use versealign::{Alignment, WordObject, merge, unmerge};
//!
//! let alignments = vec![
//!     Alignment::new(vec![WordObject::new("hola", 1, 1)], vec![WordObject::new("hello", 1, 1)]),
//!     Alignment::new(vec![WordObject::new("mundo", 1, 1)], vec![WordObject::new("world", 1, 1)]),
//! ];
//!
//! // Nest the target words inside their source-word milestones
//! let verse = merge(&alignments, &[], "hello world", false).unwrap().unwrap();
//! assert_eq!(verse.len(), 3);
//!
//! // And take them apart again, ordered by the source verse
//! let result = unmerge(&verse, "hola mundo");
//! assert_eq!(result.alignment, alignments);
//! assert!(result.word_bank.is_empty());
//! ```
//!
//! ## Working with USFM
//!
//! ```
//! use versealign::markup::{parse_verse, serialize_verse};
//!
//! let usfm = r#"\zaln-s |x-occurrence="1" x-occurrences="1" x-content="λόγος"\*\w word|x-occurrence="1" x-occurrences="1"\w*\zaln-e\*"#;
//! let objects = parse_verse(usfm);
//! assert_eq!(objects[0].content.as_deref(), Some("λόγος"));
//! assert_eq!(serialize_verse(&objects), usfm);
//! ```

pub mod align;
pub mod error;
pub mod markup;
pub mod model;
pub mod morph;
pub mod tokenizer;
pub mod tree;
pub mod words;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use align::{
    MergeConfig, Merger, generate_blank_alignments, generate_word_bank,
    get_blank_alignment_data_for_verse, merge, order_alignments, unmerge, verse_has_alignments,
};
pub use error::{Error, Result};
pub use model::{
    Alignment, AlignmentData, ObjectKind, UnmergeResult, VerseData, VerseObject, WordObject,
    verse_objects_from_json,
};
