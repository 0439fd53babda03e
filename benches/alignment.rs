//! Benchmarks for the alignment engine.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use versealign::markup::{parse_verse, serialize_verse};
use versealign::tree::get_ordered_verse_objects_from_string;
use versealign::{AlignmentData, generate_blank_alignments, merge, unmerge, verse_objects_from_json};

const ALIGNMENT_JSON: &str = include_str!("../tests/fixtures/tit_1_1/alignment.json");
const SOURCE_JSON: &str = include_str!("../tests/fixtures/tit_1_1/source.json");
const TARGET_TEXT: &str = include_str!("../tests/fixtures/tit_1_1/target.txt");

fn target() -> &'static str {
    TARGET_TEXT.trim_end()
}

// ============================================================================
// Engine Benchmarks
// ============================================================================

fn bench_merge(c: &mut Criterion) {
    let data: AlignmentData = serde_json::from_str(ALIGNMENT_JSON).unwrap();

    c.bench_function("merge", |b| {
        b.iter(|| merge(&data.alignments, &data.word_bank, target(), false).unwrap());
    });
}

fn bench_unmerge(c: &mut Criterion) {
    let data: AlignmentData = serde_json::from_str(ALIGNMENT_JSON).unwrap();
    let source = verse_objects_from_json(SOURCE_JSON).unwrap();
    let merged = merge(&data.alignments, &data.word_bank, target(), false)
        .unwrap()
        .unwrap();

    c.bench_function("unmerge", |b| {
        b.iter(|| unmerge(&merged, &source));
    });
}

fn bench_blank_alignments(c: &mut Criterion) {
    let source = verse_objects_from_json(SOURCE_JSON).unwrap();

    c.bench_function("generate_blank_alignments", |b| {
        b.iter(|| generate_blank_alignments(&source));
    });
}

// ============================================================================
// Word Map and USFM Benchmarks
// ============================================================================

fn bench_word_map(c: &mut Criterion) {
    c.bench_function("word_map_from_string", |b| {
        b.iter(|| get_ordered_verse_objects_from_string(target()));
    });
}

fn bench_usfm_round_trip(c: &mut Criterion) {
    let data: AlignmentData = serde_json::from_str(ALIGNMENT_JSON).unwrap();
    let merged = merge(&data.alignments, &data.word_bank, target(), false)
        .unwrap()
        .unwrap();
    let usfm = serialize_verse(&merged);

    c.bench_function("usfm_round_trip", |b| {
        b.iter(|| serialize_verse(&parse_verse(&usfm)));
    });
}

criterion_group!(
    benches,
    // Engine
    bench_merge,
    bench_unmerge,
    bench_blank_alignments,
    // Word map and USFM
    bench_word_map,
    bench_usfm_round_trip,
);
criterion_main!(benches);
