//! Word lists extracted from verse objects.
//!
//! These helpers flatten milestone nesting, count occurrences over word
//! lists and order word objects by their position in a verse.

use std::collections::HashMap;

use crate::model::{ObjectKind, VerseData, VerseObject, WordObject};
use crate::tokenizer::{occurrence_in_string, occurrences_in_string, tokenize};
use crate::tree::get_ordered_verse_objects_from_string;

/// Anything that can be counted as a word of a verse.
pub trait WordText {
    /// Surface text, or `None` if this item is not a word.
    fn word_text(&self) -> Option<&str>;
}

impl WordText for VerseObject {
    fn word_text(&self) -> Option<&str> {
        VerseObject::word_text(self)
    }
}

impl WordText for WordObject {
    fn word_text(&self) -> Option<&str> {
        Some(&self.word)
    }
}

/// Word objects inside a verse object: the object itself if it is a word,
/// otherwise the words found anywhere among its descendants.
pub fn extract_words_from_verse_object(object: &VerseObject) -> Vec<VerseObject> {
    let mut words = Vec::new();
    let mut stack = vec![object];
    while let Some(current) = stack.pop() {
        if current.is_word() {
            words.push(current.clone());
        } else if let Some(children) = &current.children {
            stack.extend(children.iter().rev());
        }
    }
    words
}

/// Flat list of the word objects of a verse.
///
/// Strings are split with the word-map builder first, which also numbers
/// occurrences. Object input keeps the occurrences it carries.
pub fn get_word_list<'a>(data: impl Into<VerseData<'a>>) -> Vec<VerseObject> {
    match data.into() {
        VerseData::Text(text) => get_ordered_verse_objects_from_string(text)
            .words()
            .cloned()
            .collect(),
        VerseData::Objects(objects) => objects
            .iter()
            .flat_map(extract_words_from_verse_object)
            .collect(),
    }
}

/// Join the text of verse objects with single spaces.
///
/// Milestones contribute the words nested inside them. With a `filter`,
/// only objects of the listed kinds are included. No space is added after
/// a line break.
pub fn merge_verse_data(objects: &[VerseObject], filter: Option<&[ObjectKind]>) -> String {
    let mut verse_text = String::new();
    for part in objects {
        let words = if part.is_milestone() {
            extract_words_from_verse_object(part)
        } else {
            vec![part.clone()]
        };
        for word in &words {
            let included = filter.is_none_or(|kinds| kinds.contains(&word.kind));
            let Some(text) = word.text.as_deref().filter(|t| included && !t.is_empty()) else {
                continue;
            };
            if !verse_text.is_empty() && !verse_text.ends_with('\n') {
                verse_text.push(' ');
            }
            verse_text.push_str(text);
        }
    }
    verse_text
}

/// 1-based occurrence of `word` among the words in `items[..=index]`.
pub fn get_occurrence<T: WordText>(items: &[T], index: usize, word: &str) -> u32 {
    items
        .iter()
        .take(index + 1)
        .filter(|item| item.word_text() == Some(word))
        .count() as u32
}

/// Total number of `word` entries in `items`.
pub fn get_occurrences<T: WordText>(items: &[T], word: &str) -> u32 {
    items
        .iter()
        .filter(|item| item.word_text() == Some(word))
        .count() as u32
}

/// Word list of `objects` with occurrences renumbered over that list.
pub fn populate_occurrences_in_word_objects(objects: &[VerseObject]) -> Vec<VerseObject> {
    let mut words = get_word_list(objects);

    let mut totals: HashMap<String, u32> = HashMap::new();
    for word in &words {
        if let Some(text) = word.word_text() {
            *totals.entry(text.to_string()).or_default() += 1;
        }
    }

    let mut seen: HashMap<String, u32> = HashMap::new();
    for word in &mut words {
        let Some(text) = word.text.clone() else {
            continue;
        };
        let count = seen.entry(text.clone()).or_default();
        *count += 1;
        word.occurrence = *count;
        word.occurrences = totals.get(&text).copied().unwrap_or(*count);
    }
    words
}

/// Word objects for every word of a string.
///
/// # Examples
///
/// ```
/// use versealign::words::word_object_array_from_string;
///
/// let words = word_object_array_from_string("and God said and");
/// assert_eq!(words[3].word, "and");
/// assert_eq!((words[3].occurrence, words[3].occurrences), (2, 2));
/// ```
pub fn word_object_array_from_string(text: &str) -> Vec<WordObject> {
    tokenize(text)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            WordObject::new(
                word,
                occurrence_in_string(text, index, word),
                occurrences_in_string(text, word),
            )
        })
        .collect()
}

/// Order word objects by where they appear in a verse.
///
/// Words are located by text, occurrence and occurrences. Words not found
/// in the verse sort first; ties keep their input order.
pub fn sort_word_objects_by_string<'a>(
    words: &[WordObject],
    reference: impl Into<VerseData<'a>>,
) -> Vec<WordObject> {
    let reference: Vec<WordObject> = match reference.into() {
        VerseData::Text(text) => word_object_array_from_string(text),
        VerseData::Objects(objects) => populate_occurrences_in_word_objects(objects)
            .iter()
            .map(WordObject::from_verse_object)
            .collect(),
    };

    let mut keyed: Vec<(Option<usize>, &WordObject)> = words
        .iter()
        .map(|word| {
            let index = reference.iter().position(|r| {
                r.word == word.word
                    && r.occurrence == word.occurrence
                    && r.occurrences == word.occurrences
            });
            (index, word)
        })
        .collect();
    keyed.sort_by_key(|(index, _)| *index);
    keyed.into_iter().map(|(_, word)| word.clone()).collect()
}

/// Leaf objects of a verse: objects with children are replaced by their
/// flattened children.
pub fn get_words_from_verse_objects(objects: &[VerseObject]) -> Vec<VerseObject> {
    let mut leaves = Vec::new();
    let mut stack: Vec<&VerseObject> = objects.iter().rev().collect();
    while let Some(object) = stack.pop() {
        match &object.children {
            Some(children) => stack.extend(children.iter().rev()),
            None => leaves.push(object.clone()),
        }
    }
    leaves
}

/// Join the word texts of `items` with single spaces.
pub fn combine_verse_array<T: WordText>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.word_text().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}
