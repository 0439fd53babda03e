//! The alignment engine.
//!
//! [`merge`] folds an editor's alignments and word bank into the nested
//! verse-object form; [`unmerge`] takes that form apart again. The blank
//! generators produce the starting state for an unaligned verse.

mod blank;
mod merge;
mod unmerge;

pub use blank::{
    generate_blank_alignments, generate_word_bank, get_blank_alignment_data_for_verse,
    verse_has_alignments,
};
pub use merge::{
    MergeConfig, Merger, has_alignments, merge, should_tolerate_partial_mismatch,
    verse_string_words_contained_in_alignments,
};
pub use unmerge::{
    compare_occurrences, index_of_first_milestone, index_of_milestone, order_alignments, unmerge,
};
