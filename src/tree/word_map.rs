//! Ordered verse objects and the word map.
//!
//! Building an [`OrderedVerse`] copies the input into a fresh arena,
//! numbers every word's `occurrence`/`occurrences` across the whole verse
//! and records one [`WordLocation`] per word in reading order. Merge and
//! unmerge address "the Nth word" through that map.

use std::collections::HashMap;

use crate::markup;
use crate::model::{VerseData, VerseObject};
use crate::tokenizer::{is_word_token, tokenize_with_punctuation};

use super::{Node, NodeId, Parent, VerseTree};

/// Where a word lives in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLocation {
    /// Child list holding the word.
    pub parent: Parent,
    /// Position within that list.
    pub pos: usize,
    /// Handle of the word node.
    pub node: NodeId,
    /// Whitespace separator between this word and the previous word of its
    /// run, set by [`group_consecutive_numbers`](super::group_consecutive_numbers).
    pub include_between: Option<usize>,
}

/// Word locations in reading order.
pub type WordMap = Vec<WordLocation>;

/// A verse copy with occurrences filled in and its word map.
#[derive(Debug, Clone, Default)]
pub struct OrderedVerse {
    pub tree: VerseTree,
    pub word_map: WordMap,
}

impl OrderedVerse {
    /// Index a tree, numbering word occurrences in pre-order.
    pub fn from_tree(tree: VerseTree) -> Self {
        let word_map = tree
            .iter_preorder()
            .filter(|slot| tree.object(slot.node).is_some_and(VerseObject::is_word))
            .map(|slot| WordLocation {
                parent: slot.parent,
                pos: slot.pos,
                node: slot.node,
                include_between: None,
            })
            .collect();
        let mut verse = Self { tree, word_map };
        verse.number_occurrences();
        verse
    }

    fn number_occurrences(&mut self) {
        let texts: Vec<String> = self
            .word_map
            .iter()
            .map(|loc| {
                self.tree
                    .object(loc.node)
                    .and_then(|o| o.text.clone())
                    .unwrap_or_default()
            })
            .collect();

        let mut totals: HashMap<&str, u32> = HashMap::new();
        for text in &texts {
            *totals.entry(text.as_str()).or_default() += 1;
        }

        let mut seen: HashMap<&str, u32> = HashMap::new();
        for (location, text) in self.word_map.iter().zip(&texts) {
            let count = seen.entry(text.as_str()).or_default();
            *count += 1;
            if let Some(node) = self.tree.node_mut(location.node) {
                node.object.occurrence = *count;
                node.object.occurrences = totals.get(text.as_str()).copied().unwrap_or(*count);
            }
        }
    }

    /// Number of words in the map.
    pub fn word_count(&self) -> usize {
        self.word_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Object currently stored behind word-map entry `index`.
    pub fn word(&self, index: usize) -> Option<&VerseObject> {
        self.word_map
            .get(index)
            .and_then(|loc| self.tree.object(loc.node))
    }

    /// Objects behind every word-map entry, in order.
    pub fn words(&self) -> impl Iterator<Item = &VerseObject> + '_ {
        self.word_map
            .iter()
            .filter_map(|loc| self.tree.object(loc.node))
    }

    /// Node that follows word `index` in its child list.
    pub fn following(&self, index: usize) -> Option<NodeId> {
        let location = self.word_map.get(index)?;
        self.tree.child_at(location.parent, location.pos + 1)
    }

    /// First word-map entry whose object has the same text, occurrence,
    /// kind and tag as `target`. Occurrences are not compared.
    pub fn index_of_verse_object(&self, target: &VerseObject) -> Option<usize> {
        self.word_map.iter().position(|loc| {
            self.tree.object(loc.node).is_some_and(|object| {
                object.text == target.text
                    && object.occurrence == target.occurrence
                    && object.kind == target.kind
                    && object.tag == target.tag
            })
        })
    }

    /// Nested verse objects for the current tree.
    pub fn to_objects(&self) -> Vec<VerseObject> {
        self.tree.to_objects()
    }
}

/// Build an ordered verse from either raw text or verse objects.
pub fn build_ordered_verse_objects<'a>(data: impl Into<VerseData<'a>>) -> OrderedVerse {
    match data.into() {
        VerseData::Text(text) => get_ordered_verse_objects_from_string(text),
        VerseData::Objects(objects) => get_ordered_verse_objects(objects),
    }
}

/// Copy verse objects and renumber their words.
pub fn get_ordered_verse_objects(objects: &[VerseObject]) -> OrderedVerse {
    OrderedVerse::from_tree(VerseTree::from_objects(objects))
}

/// Parse a verse string and split its text into word and text objects.
///
/// Markers recognised by [`markup::parse_verse`] (footnotes, character
/// styles, paragraph markers, `\w` words) are kept; every run of plain
/// text is broken into words and the whitespace/punctuation between them.
///
/// # Examples
///
/// ```
/// use versealign::tree::get_ordered_verse_objects_from_string;
///
/// let verse = get_ordered_verse_objects_from_string("hello, world.");
/// let texts: Vec<_> = verse.to_objects().into_iter().map(|o| o.text.unwrap()).collect();
/// assert_eq!(texts, vec!["hello", ", ", "world", "."]);
/// assert_eq!(verse.word_count(), 2);
/// ```
pub fn get_ordered_verse_objects_from_string(text: &str) -> OrderedVerse {
    if text.is_empty() {
        return OrderedVerse::default();
    }

    let mut tree = VerseTree::new();
    let mut stack: Vec<(Parent, Vec<VerseObject>)> = vec![(Parent::Root, markup::parse_verse(text))];

    while let Some((parent, objects)) = stack.pop() {
        for mut object in objects {
            if object.is_text() {
                if let Some(text) = object.text.as_deref() {
                    split_text_into(&mut tree, parent, text);
                }
                continue;
            }

            let inner_text = if object.is_word() { None } else { object.text.take() };
            let children = object.children.take();
            let has_children = children.is_some();
            let id = tree.alloc_node(Node {
                object,
                children: children.as_ref().map(|_| Vec::new()),
            });
            tree.append_child(parent, id);

            let text_parent = if has_children { Parent::Node(id) } else { parent };
            if let Some(text) = inner_text.as_deref() {
                split_text_into(&mut tree, text_parent, text);
            }
            if let Some(children) = children {
                stack.push((Parent::Node(id), children));
            }
        }
    }

    OrderedVerse::from_tree(tree)
}

/// Append the words and separators of `text` to a child list, extending a
/// trailing text node where possible.
fn split_text_into(tree: &mut VerseTree, parent: Parent, text: &str) {
    for token in tokenize_with_punctuation(text) {
        if is_word_token(token) {
            let id = tree.alloc_node(Node::leaf(VerseObject::word(token, 0, 0)));
            tree.append_child(parent, id);
            continue;
        }

        let last = tree.children(parent).last().copied();
        let extended = last
            .and_then(|id| tree.node_mut(id))
            .filter(|node| node.object.is_text())
            .map(|node| {
                node.object.text.get_or_insert_with(String::new).push_str(token);
            })
            .is_some();
        if !extended {
            let id = tree.alloc_node(Node::leaf(VerseObject::text(token)));
            tree.append_child(parent, id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectKind;
    use proptest::prelude::*;
    use serde_json::json;

    fn objects_json(verse: &OrderedVerse) -> serde_json::Value {
        serde_json::to_value(verse.to_objects()).unwrap()
    }

    #[test]
    fn test_words_without_punctuation() {
        let verse = get_ordered_verse_objects_from_string("hello world");
        assert_eq!(
            objects_json(&verse),
            json!([
                {"tag": "w", "type": "word", "text": "hello", "occurrence": 1, "occurrences": 1},
                {"type": "text", "text": " "},
                {"tag": "w", "type": "word", "text": "world", "occurrence": 1, "occurrences": 1}
            ])
        );
        assert_eq!(verse.word_count(), 2);
    }

    #[test]
    fn test_repeated_words_and_punctuation() {
        let verse = get_ordered_verse_objects_from_string("son of David, son of Abraham.");
        let summary: Vec<(String, u32, u32)> = verse
            .words()
            .map(|w| (w.text.clone().unwrap(), w.occurrence, w.occurrences))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("son".into(), 1, 2),
                ("of".into(), 1, 2),
                ("David".into(), 1, 1),
                ("son".into(), 2, 2),
                ("of".into(), 2, 2),
                ("Abraham".into(), 1, 1),
            ]
        );
        let objects = verse.to_objects();
        assert_eq!(objects[5], VerseObject::text(", "));
        assert_eq!(objects.last(), Some(&VerseObject::text(".")));
    }

    #[test]
    fn test_embedded_footnote() {
        let verse = get_ordered_verse_objects_from_string(
            "son of Abraham. \\f Footnotes are content in their own object.\\f*",
        );
        let objects = verse.to_objects();
        assert_eq!(verse.word_count(), 3);
        assert_eq!(objects[objects.len() - 2], VerseObject::text(". "));

        let footnote = objects.last().unwrap();
        assert_eq!(footnote.tag.as_deref(), Some("f"));
        assert_eq!(footnote.kind, ObjectKind::Other("footnote".into()));
        assert_eq!(footnote.end_tag.as_deref(), Some("f*"));
        assert_eq!(
            footnote.content.as_deref(),
            Some("Footnotes are content in their own object.")
        );
    }

    #[test]
    fn test_words_inside_character_style() {
        let verse = get_ordered_verse_objects_from_string("the \\nd Lord\\nd* said");
        assert_eq!(verse.word_count(), 3);
        let location = verse.word_map[1];
        assert!(matches!(location.parent, Parent::Node(_)));
        assert_eq!(verse.word(1).unwrap().text.as_deref(), Some("Lord"));
    }

    #[test]
    fn test_empty_string() {
        let verse = get_ordered_verse_objects_from_string("");
        assert!(verse.is_empty());
        assert_eq!(verse.word_count(), 0);
    }

    #[test]
    fn test_nested_occurrences_are_renumbered() {
        let objects = vec![
            VerseObject::milestone("καὶ", 1, 1, vec![VerseObject::word("and", 7, 7)]),
            VerseObject::text(" "),
            VerseObject::word("and", 0, 0),
        ];
        let verse = get_ordered_verse_objects(&objects);
        let occurrences: Vec<(u32, u32)> =
            verse.words().map(|w| (w.occurrence, w.occurrences)).collect();
        assert_eq!(occurrences, vec![(1, 2), (2, 2)]);
        // the caller's objects are untouched
        assert_eq!(objects[0].children.as_ref().unwrap()[0].occurrence, 7);
    }

    #[test]
    fn test_index_of_verse_object() {
        let verse = get_ordered_verse_objects_from_string("son of David, son");
        let target = VerseObject::word("son", 2, 99);
        assert_eq!(verse.index_of_verse_object(&target), Some(3));
        assert_eq!(verse.index_of_verse_object(&VerseObject::word("son", 3, 2)), None);
    }

    #[test]
    fn test_following_node() {
        let verse = get_ordered_verse_objects_from_string("David, son");
        let next = verse.following(0).unwrap();
        assert_eq!(verse.tree.object(next), Some(&VerseObject::text(", ")));
        assert!(verse.following(1).is_none());
    }

    proptest! {
        #[test]
        fn occurrence_invariant_holds(words in prop::collection::vec("(and|the|God|said|light)", 0..30)) {
            let text = words.join(" ");
            let verse = get_ordered_verse_objects_from_string(&text);
            prop_assert_eq!(verse.word_count(), words.len());
            for word in verse.words() {
                let text = word.text.clone().unwrap();
                let total = words.iter().filter(|w| **w == text).count() as u32;
                prop_assert!(word.occurrence >= 1);
                prop_assert!(word.occurrence <= word.occurrences);
                prop_assert_eq!(word.occurrences, total);
            }
        }
    }
}
