//! Splitting an aligned verse back into alignments and a word bank.

use tracing::{debug, trace};

use crate::model::{Alignment, UnmergeResult, VerseData, VerseObject, WordObject};
use crate::tree::{OrderedVerse, build_ordered_verse_objects, get_ordered_verse_objects};
use crate::words::get_word_list;

/// Split aligned verse objects into alignments and the unaligned words.
///
/// Milestones with the same kind, content and occurrence anywhere at the
/// top level are folded into one alignment, so a source word aligned to
/// non-adjacent target words comes back as a single entry. Alignments are
/// ordered by `reference`, the source-language verse; source words with no
/// alignment get an empty one in their place.
///
/// Never fails: malformed nesting degrades to best-effort grouping.
pub fn unmerge<'a>(verse_objects: &[VerseObject], reference: impl Into<VerseData<'a>>) -> UnmergeResult {
    let mut accumulated: Vec<Alignment> = Vec::new();
    let mut bases: Vec<(&VerseObject, usize)> = Vec::new();

    let mut pending: Vec<&VerseObject> = verse_objects.iter().rev().collect();
    while let Some(object) = pending.pop() {
        let index = match bases.iter().find(|(base, _)| base.same_milestone(object)) {
            Some(&(_, index)) => index,
            None => {
                accumulated.push(Alignment::default());
                bases.push((object, accumulated.len() - 1));
                accumulated.len() - 1
            }
        };
        add_verse_object_to_alignment(object, &mut accumulated[index]);

        if !object.is_milestone()
            && let Some(children) = &object.children
        {
            pending.extend(children.iter().rev());
        }
    }

    let mut word_bank = Vec::new();
    let mut unordered = Vec::new();
    for alignment in accumulated {
        if alignment.top_words.is_empty() {
            word_bank.extend(alignment.bottom_words);
        } else {
            unordered.push(alignment);
        }
    }
    debug!(
        alignments = unordered.len(),
        word_bank = word_bank.len(),
        "unmerged verse"
    );

    let alignment = match reference.into() {
        VerseData::Text(text) => order_alignments(text, unordered),
        VerseData::Objects(objects) => {
            let words = get_word_list(objects);
            order_by_verse(get_ordered_verse_objects(&words), unordered)
        }
    };
    UnmergeResult {
        alignment,
        word_bank,
    }
}

/// Add a milestone's top words and all nested bottom words to `alignment`.
fn add_verse_object_to_alignment(object: &VerseObject, alignment: &mut Alignment) {
    let mut pending = vec![object];
    while let Some(object) = pending.pop() {
        match &object.children {
            Some(children) if object.is_milestone() && !children.is_empty() => {
                let top_word = WordObject::from_verse_object(object);
                if !alignment.top_words.iter().any(|w| w.same_word(&top_word)) {
                    alignment.top_words.push(top_word);
                }
                pending.extend(children.iter().rev());
            }
            None if object.is_word() => {
                alignment.bottom_words.push(WordObject::from_verse_object(object));
            }
            _ => {}
        }
    }
}

/// Order alignments by the words of a reference verse.
///
/// Each reference word takes the alignment whose first top word it is.
/// A word that is a later top word of some alignment is skipped; a word
/// found in no alignment gets a blank alignment at its position. Leftover
/// alignments are appended at the end.
pub fn order_alignments<'a>(
    reference: impl Into<VerseData<'a>>,
    unordered: Vec<Alignment>,
) -> Vec<Alignment> {
    order_by_verse(build_ordered_verse_objects(reference), unordered)
}

fn order_by_verse(mut verse: OrderedVerse, mut unordered: Vec<Alignment>) -> Vec<Alignment> {
    let word_count = verse.word_count();
    let mut ordered = Vec::with_capacity(unordered.len() + word_count);

    for i in 0..word_count {
        let Some(mut word) = verse.word(i).cloned() else {
            continue;
        };
        let mut index = index_of_first_milestone(&unordered, &word);

        // the word may have been split from punctuation attached in the source
        if index.is_none()
            && let Some(next) = verse.following(i)
            && let Some(first) = verse
                .tree
                .object(next)
                .filter(|object| object.is_text())
                .and_then(|object| object.text.as_deref())
                .and_then(|text| text.chars().next())
                .filter(|c| !c.is_whitespace())
        {
            let original = word.text.clone();
            word.text.get_or_insert_with(String::new).push(first);
            index = index_of_first_milestone(&unordered, &word);
            match index {
                Some(_) => {
                    trace!(word = ?word.text, "matched with trailing punctuation");
                    if let Some(node) = verse.tree.node_mut(next)
                        && let Some(text) = node.object.text.as_mut()
                    {
                        text.drain(..first.len_utf8());
                    }
                }
                None => word.text = original,
            }
        }

        if let Some(index) = index {
            ordered.push(unordered.remove(index));
            continue;
        }

        let placed = index_of_milestone(&unordered, &word).is_some()
            || index_of_milestone(&ordered, &word).is_some();
        if !placed {
            trace!(word = ?word.text, occurrence = word.occurrence, "unaligned source word");
            ordered.push(Alignment::blank(WordObject::from_verse_object(&word)));
        }
    }

    if !unordered.is_empty() {
        trace!(count = unordered.len(), "appending alignments missing from reference");
        ordered.append(&mut unordered);
    }
    ordered
}

/// Index of the alignment whose first top word matches a word object.
pub fn index_of_first_milestone(alignments: &[Alignment], word: &VerseObject) -> Option<usize> {
    if !word.is_word() {
        return None;
    }
    alignments.iter().position(|alignment| {
        alignment
            .top_words
            .first()
            .is_some_and(|top| top_word_matches(top, word))
    })
}

/// Index of the alignment with any top word matching a word object.
pub fn index_of_milestone(alignments: &[Alignment], word: &VerseObject) -> Option<usize> {
    if !word.is_word() {
        return None;
    }
    alignments.iter().position(|alignment| {
        alignment
            .top_words
            .iter()
            .any(|top| top_word_matches(top, word))
    })
}

fn top_word_matches(top: &WordObject, word: &VerseObject) -> bool {
    word.text.as_deref() == Some(top.word.as_str()) && compare_occurrences(top.occurrence, word.occurrence)
}

/// Occurrences match when equal and set.
pub fn compare_occurrences(a: u32, b: u32) -> bool {
    a == b && a != 0
}
