//! Blank alignment tests.
//!
//! Covers the state an editor starts from before any word is aligned.

use serde_json::json;
use versealign::{
    AlignmentData, VerseObject, generate_blank_alignments, generate_word_bank,
    get_blank_alignment_data_for_verse, merge, unmerge, verse_has_alignments,
    verse_objects_from_json,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{}", FIXTURES_DIR, name)).expect("Failed to read fixture")
}

fn titus_source() -> Vec<VerseObject> {
    verse_objects_from_json(&fixture("tit_1_1/source.json")).expect("Failed to parse source")
}

fn titus_text() -> String {
    fixture("tit_1_1/target.txt").trim_end().to_string()
}

// ============================================================================
// Blank State
// ============================================================================

#[test]
fn test_blank_alignments_carry_source_attributes() {
    let alignments = generate_blank_alignments(&titus_source());
    assert_eq!(alignments.len(), 7);
    assert!(alignments.iter().all(|a| a.bottom_words.is_empty()));

    assert_eq!(
        serde_json::to_value(&alignments[2]).unwrap(),
        json!({
            "topWords": [{
                "word": "Θεοῦ", "occurrence": 1, "occurrences": 1,
                "strong": "G23160", "lemma": "θεός", "morph": "Gr,N,,,,,GMS,"
            }],
            "bottomWords": []
        })
    );
}

#[test]
fn test_word_bank_counts_repeated_words() {
    let bank = generate_word_bank(titus_text().as_str());
    let words: Vec<(&str, u32, u32)> = bank
        .iter()
        .map(|w| (w.word.as_str(), w.occurrence, w.occurrences))
        .collect();

    assert_eq!(words.len(), 11);
    assert_eq!(words[3], ("of", 1, 2));
    assert_eq!(words[8], ("of", 2, 2));
    assert_eq!(words[10], ("Christ", 1, 1));
}

#[test]
fn test_blank_data_for_verse() {
    let text = titus_text();
    let data = get_blank_alignment_data_for_verse(&titus_source(), text.as_str());

    assert_eq!(data.alignments.len(), 7);
    assert_eq!(data.word_bank.len(), 11);
    assert!(!verse_has_alignments(&data));

    let aligned: AlignmentData = serde_json::from_str(&fixture("tit_1_1/alignment.json")).unwrap();
    assert!(verse_has_alignments(&aligned));
}

// ============================================================================
// Editing From Blank
// ============================================================================

#[test]
fn test_blank_data_merges_to_bare_words() {
    let text = titus_text();
    let data = get_blank_alignment_data_for_verse(&titus_source(), text.as_str());

    let merged = merge(&data.alignments, &data.word_bank, &text, false)
        .unwrap()
        .unwrap();
    assert!(merged.iter().all(|o| !o.is_milestone()));
    assert_eq!(merged.iter().filter(|o| o.is_word()).count(), 11);

    let result = unmerge(&merged, &titus_source());
    assert_eq!(result.alignment, data.alignments);
    assert_eq!(result.word_bank.len(), 11);
}

#[test]
fn test_reset_after_text_edit() {
    let edited = titus_text().replace("servant", "slave");
    let data = get_blank_alignment_data_for_verse(&titus_source(), edited.as_str());

    assert!(data.word_bank.iter().any(|w| w.word == "slave"));
    assert!(!data.word_bank.iter().any(|w| w.word == "servant"));
}
