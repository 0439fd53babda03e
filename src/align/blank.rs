//! Blank alignment state for verses that have not been aligned yet.

use crate::model::{Alignment, AlignmentData, VerseData, WordObject};
use crate::words::{get_occurrence, get_occurrences, get_word_list};

/// One empty alignment per word of the original-language verse.
///
/// Each top word carries the source word's `strong`, `lemma` and `morph`.
///
/// # Examples
///
/// ```
/// use versealign::VerseObject;
/// use versealign::align::generate_blank_alignments;
///
/// let verse = vec![VerseObject::word("Θεός", 1, 1).with_strong("G23160")];
/// let alignments = generate_blank_alignments(&verse);
/// assert_eq!(alignments[0].top_words[0].strong.as_deref(), Some("G23160"));
/// assert!(alignments[0].bottom_words.is_empty());
/// ```
pub fn generate_blank_alignments<'a>(verse_data: impl Into<VerseData<'a>>) -> Vec<Alignment> {
    let words = get_word_list(verse_data);
    words
        .iter()
        .enumerate()
        .map(|(index, source)| {
            let text = source.text.clone().unwrap_or_default();
            let top_word = WordObject {
                occurrence: get_occurrence(&words, index, &text),
                occurrences: get_occurrences(&words, &text),
                word: text,
                strong: source.strong.clone(),
                lemma: source.lemma.clone(),
                morph: source.morph.clone(),
                attributes: Default::default(),
            };
            Alignment::blank(top_word)
        })
        .collect()
}

/// Every word of the target-language verse as an unaligned word-bank entry.
pub fn generate_word_bank<'a>(verse_data: impl Into<VerseData<'a>>) -> Vec<WordObject> {
    let words = get_word_list(verse_data);
    words
        .iter()
        .enumerate()
        .map(|(index, object)| {
            let text = object.text.clone().unwrap_or_default();
            WordObject::new(
                text.clone(),
                get_occurrence(&words, index, &text),
                get_occurrences(&words, &text),
            )
        })
        .collect()
}

/// Reset alignment state: blank alignments for the source verse and every
/// target word in the word bank.
pub fn get_blank_alignment_data_for_verse<'a, 'b>(
    source: impl Into<VerseData<'a>>,
    target: impl Into<VerseData<'b>>,
) -> AlignmentData {
    AlignmentData {
        alignments: generate_blank_alignments(source),
        word_bank: generate_word_bank(target),
    }
}

/// True if any alignment has at least one bottom word.
pub fn verse_has_alignments(data: &AlignmentData) -> bool {
    data.alignments.iter().any(|a| !a.is_blank())
}
