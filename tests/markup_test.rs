//! USFM markup tests.
//!
//! Writes aligned verses as USFM and reads them back, the way alignment
//! editors store a verse between sessions.

use versealign::markup::{UsfmWriter, WriterConfig, parse_verse, remove_marker, serialize_verse};
use versealign::{AlignmentData, ObjectKind, VerseObject, merge, unmerge, verse_objects_from_json};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{}", FIXTURES_DIR, name)).expect("Failed to read fixture")
}

fn titus_alignment() -> AlignmentData {
    serde_json::from_str(&fixture("tit_1_1/alignment.json")).expect("Failed to parse alignment")
}

fn titus_merged() -> Vec<VerseObject> {
    let data = titus_alignment();
    let text = fixture("tit_1_1/target.txt");
    merge(&data.alignments, &data.word_bank, text.trim_end(), false)
        .expect("merge failed")
        .expect("verse text diverged")
}

// ============================================================================
// Aligned USFM
// ============================================================================

#[test]
fn test_aligned_usfm_is_stable() {
    let usfm = serialize_verse(&titus_merged());
    assert!(usfm.starts_with(r#"\zaln-s |x-strong="G39720" x-lemma="Παῦλος" x-morph="Gr,N,,,,,NMS," x-occurrence="1" x-occurrences="1" x-content="Παῦλος"\*\w Paul|"#));
    assert!(usfm.ends_with(r"\zaln-e\*,"));

    let reparsed = parse_verse(&usfm);
    assert_eq!(serialize_verse(&reparsed), usfm);
}

#[test]
fn test_alignments_survive_usfm() {
    let usfm = serialize_verse(&titus_merged());
    let source =
        verse_objects_from_json(&fixture("tit_1_1/source.json")).expect("Failed to parse source");

    let result = unmerge(&parse_verse(&usfm), &source);
    assert_eq!(result.alignment, titus_alignment().alignments);
    assert!(result.word_bank.is_empty());
}

#[test]
fn test_parsed_milestone_fields() {
    let objects = parse_verse(&serialize_verse(&titus_merged()));
    let servant = &objects[2];

    assert_eq!(servant.kind, ObjectKind::Milestone);
    assert_eq!(servant.content.as_deref(), Some("δοῦλος"));
    assert_eq!(servant.strong.as_deref(), Some("G14010"));
    assert_eq!(
        servant.children.as_ref().unwrap(),
        &vec![
            VerseObject::word("a", 1, 1),
            VerseObject::text(" "),
            VerseObject::word("servant", 1, 1),
        ]
    );
}

#[test]
fn test_forced_new_lines() {
    let objects = vec![
        VerseObject::milestone("λόγος", 1, 1, vec![VerseObject::word("word", 1, 1)]),
        VerseObject::text(" "),
        VerseObject::word("here", 1, 1),
    ];
    let writer = UsfmWriter::new().with_config(WriterConfig {
        forced_new_lines: true,
    });
    let usfm = writer.to_usfm(&objects);

    assert_eq!(usfm.lines().count(), 3);
    assert!(usfm.lines().nth(2).unwrap().starts_with(r"\w here|"));
}

// ============================================================================
// Marker Removal
// ============================================================================

#[test]
fn test_remove_footnotes_and_poetry() {
    let text = "\\q1 Blessed is the man \\f + \\ft or person\\f*who walks";
    assert_eq!(remove_marker(text, None), "1 Blessed is the man who walks");
}

#[test]
fn test_remove_selected_markers() {
    let text = "\\p \\q1 text \\f + note\\f*";
    assert_eq!(remove_marker(text, Some(&["p", "q1"])), "  text \\f + note\\f*");
}
