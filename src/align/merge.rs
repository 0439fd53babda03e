//! Merging alignment data into target-language verse text.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Alignment, VerseObject, WordObject};
use crate::tree::{
    Node, NodeId, OrderedVerse, VerseTree, delete_indices, get_ordered_verse_objects_from_string,
    group_consecutive_numbers,
};

/// Configuration for merging.
#[derive(Debug, Clone, Default)]
pub struct MergeConfig {
    /// When the verse text has diverged from alignment data that holds no
    /// alignments, return the parsed verse instead of `None`.
    pub use_verse_text: bool,
}

/// Rebuilds an aligned verse from alignments, a word bank and the
/// target-language verse text.
///
/// Every bottom word of an alignment ends up nested inside milestones made
/// from its top words (the first top word outermost). Adjacent bottom words
/// share one milestone; non-adjacent spans each get their own copy.
///
/// # Example
///
/// ```
/// use versealign::align::Merger;
/// use versealign::{Alignment, WordObject};
///
/// let alignments = vec![
///     Alignment::new(vec![WordObject::new("λόγος", 1, 1)], vec![WordObject::new("word", 1, 1)]),
/// ];
/// let objects = Merger::new().merge(&alignments, &[], "word").unwrap().unwrap();
/// assert_eq!(objects[0].content.as_deref(), Some("λόγος"));
/// ```
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a new merger with default configuration.
    pub fn new() -> Self {
        Self {
            config: MergeConfig::default(),
        }
    }

    /// Configure the merger with custom settings.
    pub fn with_config(mut self, config: MergeConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge alignment data into `verse_text`.
    ///
    /// Returns `Ok(None)` (or the parsed verse, with `use_verse_text`) when
    /// the text no longer matches alignment data that has no alignments.
    /// Fails with [`Error::InvalidatedAlignments`] when it does not match
    /// data that has.
    pub fn merge(
        &self,
        alignments: &[Alignment],
        word_bank: &[WordObject],
        verse_text: &str,
    ) -> Result<Option<Vec<VerseObject>>> {
        let mut verse = get_ordered_verse_objects_from_string(verse_text);
        let aligned = has_alignments(alignments);
        debug!(
            alignments = alignments.len(),
            word_bank = word_bank.len(),
            words = verse.word_count(),
            "merging verse"
        );

        let missing = verse_string_words_contained_in_alignments(alignments, word_bank, &verse);
        if !missing.is_empty() {
            let joined = missing
                .iter()
                .filter_map(|object| object.text.as_deref())
                .collect::<Vec<_>>()
                .join(", ");
            if aligned {
                return Err(Error::invalidated(format!(
                    "The words \"{joined}\" from the target language verse are not in the alignment data."
                )));
            }
            warn!(words = %joined, "verse text changed, falling back to unaligned verse");
            return Ok(self.unaligned(&verse));
        }

        for bottom_word in word_bank {
            let object = bottom_word.to_word_object();
            match verse.index_of_verse_object(&object) {
                Some(index) => {
                    let node = verse.word_map[index].node;
                    verse.tree.set_node(node, Node::leaf(object));
                }
                None if aligned => {
                    return Err(Error::invalidated(format!(
                        "Word \"{}\" is in wordBank, but missing from target language verse.",
                        bottom_word.word
                    )));
                }
                None => {
                    warn!(word = %bottom_word.word, "word bank entry missing from verse text");
                    return Ok(self.unaligned(&verse));
                }
            }
        }

        let mut consumed: HashSet<usize> = HashSet::new();
        let mut indices_to_delete: Vec<isize> = Vec::new();
        for alignment in alignments {
            if alignment.bottom_words.is_empty() {
                continue;
            }
            if alignment.top_words.is_empty() {
                let words: Vec<&str> = alignment.bottom_words.iter().map(|w| w.word.as_str()).collect();
                return Err(Error::invalidated(format!(
                    "The words \"{}\" are aligned to no source words.",
                    words.join(", ")
                )));
            }
            let deleted = merge_alignment(&mut verse, alignment, &mut consumed)?;
            indices_to_delete.extend(deleted);
        }

        delete_indices(&mut verse.tree, &indices_to_delete, &verse.word_map);
        Ok(Some(verse.to_objects()))
    }

    fn unaligned(&self, verse: &OrderedVerse) -> Option<Vec<VerseObject>> {
        self.config.use_verse_text.then(|| verse.to_objects())
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge with a one-off configuration.
pub fn merge(
    alignments: &[Alignment],
    word_bank: &[WordObject],
    verse_text: &str,
    use_verse_text: bool,
) -> Result<Option<Vec<VerseObject>>> {
    Merger::new()
        .with_config(MergeConfig { use_verse_text })
        .merge(alignments, word_bank, verse_text)
}

/// Place one alignment's milestones into the verse and return the word-map
/// indices left to delete.
fn merge_alignment(
    verse: &mut OrderedVerse,
    alignment: &Alignment,
    consumed: &mut HashSet<usize>,
) -> Result<Vec<isize>> {
    let mut replacements: BTreeMap<usize, VerseObject> = BTreeMap::new();
    for bottom_word in &alignment.bottom_words {
        let object = bottom_word.to_word_object();
        let Some(index) = verse.index_of_verse_object(&object) else {
            let json = serde_json::to_string(&object)?;
            return Err(Error::invalidated(format!(
                "VerseObject not found in verseText while merging:{json}"
            )));
        };
        if !consumed.insert(index) {
            return Err(Error::invalidated(format!(
                "Word \"{}\" is aligned more than once.",
                bottom_word.word
            )));
        }
        replacements.insert(index, object);
    }

    let indices: Vec<isize> = replacements.keys().map(|&i| i as isize).collect();
    let groups = group_consecutive_numbers(&indices, &verse.tree, &mut verse.word_map);

    let mut to_delete = Vec::new();
    for group in groups {
        let mut children = Vec::with_capacity(group.len() * 2);
        for &index in &group {
            let location = verse.word_map[index as usize];
            if let Some(between) = location.include_between
                && let Some(separator) = verse.tree.child_at(location.parent, between)
            {
                children.push(separator);
            }
            if let Some(object) = replacements.get(&(index as usize)) {
                children.push(verse.tree.alloc_node(Node::leaf(object.clone())));
            }
        }

        let Some((&first, rest)) = group.split_first() else {
            continue;
        };
        let milestone = nest_milestones(&mut verse.tree, &alignment.top_words, children);
        let node = verse.word_map[first as usize].node;
        verse.tree.set_node(node, milestone);
        to_delete.extend_from_slice(rest);
    }
    Ok(to_delete)
}

/// Build milestones for `top_words`, each nested in the previous one, with
/// `children` placed in the innermost. Returns the outermost node unallocated.
fn nest_milestones(tree: &mut VerseTree, top_words: &[WordObject], children: Vec<NodeId>) -> Node {
    let mut children = children;
    let mut milestones = top_words.iter().rev().map(|top_word| {
        let mut object = top_word.to_milestone();
        object.children = None;
        object
    });

    let mut current = match milestones.next() {
        Some(innermost) => Node::branch(innermost, children),
        None => return Node::branch(VerseObject::default(), children),
    };
    for object in milestones {
        children = vec![tree.alloc_node(current)];
        current = Node::branch(object, children);
    }
    current
}

/// True if any alignment has bottom words.
pub fn has_alignments(alignments: &[Alignment]) -> bool {
    alignments.iter().any(|a| !a.is_blank())
}

/// A verse whose alignment data has no bottom words can tolerate text edits
/// without losing work.
pub fn should_tolerate_partial_mismatch(alignments: &[Alignment]) -> bool {
    !has_alignments(alignments)
}

/// Words of `verse` found neither in the word bank nor among any
/// alignment's bottom words.
///
/// Words are matched on text, occurrence and occurrences.
pub fn verse_string_words_contained_in_alignments(
    alignments: &[Alignment],
    word_bank: &[WordObject],
    verse: &OrderedVerse,
) -> Vec<VerseObject> {
    let matches = |object: &VerseObject, word: &WordObject| {
        object.text.as_deref() == Some(word.word.as_str())
            && object.occurrence == word.occurrence
            && object.occurrences == word.occurrences
    };

    verse
        .words()
        .filter(|object| object.is_word())
        .filter(|object| {
            let in_bank = word_bank.iter().any(|w| matches(object, w));
            let in_alignments = alignments
                .iter()
                .any(|a| a.bottom_words.iter().any(|w| matches(object, w)));
            !in_bank && !in_alignments
        })
        .cloned()
        .collect()
}
