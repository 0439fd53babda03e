//! Grouping and bulk deletion of word-map slots.

use super::word_map::WordLocation;
use super::{NodeId, Parent, VerseTree};

/// Split word-map indices into runs of adjacent words.
///
/// Two indices join a run when their words sit in the same child list and
/// either touch (`pos` differs by 1) or are separated by exactly one
/// whitespace-only text node (`pos` differs by 2). In the second case the
/// separator position is recorded as `include_between` on the later word's
/// location so merge can fold it into the milestone and deletion can
/// remove it.
///
/// Negative and out-of-range indices are skipped.
pub fn group_consecutive_numbers(
    indices: &[isize],
    tree: &VerseTree,
    word_map: &mut [WordLocation],
) -> Vec<Vec<isize>> {
    let mut groups: Vec<Vec<isize>> = Vec::new();
    let mut last: Option<(Parent, usize)> = None;

    for &index in indices {
        let Some(location) = usize::try_from(index)
            .ok()
            .and_then(|i| word_map.get_mut(i))
        else {
            continue;
        };
        location.include_between = None;

        let joined = match last {
            Some((parent, pos)) if parent == location.parent => {
                if location.pos == pos + 1 {
                    true
                } else if location.pos == pos + 2 && is_blank_separator(tree, parent, pos + 1) {
                    location.include_between = Some(pos + 1);
                    true
                } else {
                    false
                }
            }
            _ => false,
        };

        match groups.last_mut() {
            Some(group) if joined => group.push(index),
            _ => groups.push(vec![index]),
        }
        last = Some((location.parent, location.pos));
    }
    groups
}

fn is_blank_separator(tree: &VerseTree, parent: Parent, pos: usize) -> bool {
    tree.child_at(parent, pos)
        .and_then(|id| tree.object(id))
        .is_some_and(|object| {
            object.is_text()
                && object
                    .text
                    .as_deref()
                    .is_some_and(|t| !t.is_empty() && t.chars().all(char::is_whitespace))
        })
}

/// Remove the words behind `indices` from their child lists.
///
/// Any `include_between` separator recorded for an index is removed too.
/// Slots are removed highest position first so pending positions stay
/// valid. Negative, out-of-range, duplicate or stale indices are ignored.
pub fn delete_indices(tree: &mut VerseTree, indices: &[isize], word_map: &[WordLocation]) {
    let mut targets: Vec<(Parent, usize, NodeId)> = Vec::new();
    for &index in indices {
        let Some(location) = usize::try_from(index).ok().and_then(|i| word_map.get(i)) else {
            continue;
        };
        targets.push((location.parent, location.pos, location.node));
        if let Some(between) = location.include_between
            && let Some(node) = tree.child_at(location.parent, between)
        {
            targets.push((location.parent, between, node));
        }
    }

    targets.sort_by(|a, b| b.1.cmp(&a.1));
    targets.dedup();

    for (parent, pos, node) in targets {
        tree.remove_child(parent, pos, node);
    }
}

/// Flatten one level of nesting.
///
/// Each item may be any iterable: a list, a slice, or an `Option` for a
/// single value that is not itself a list.
pub fn flatten_array<I>(items: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    items.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VerseObject;
    use proptest::prelude::*;
    use crate::tree::word_map::{get_ordered_verse_objects, get_ordered_verse_objects_from_string};

    fn words(texts: &[&str]) -> Vec<VerseObject> {
        texts.iter().map(|t| VerseObject::word(*t, 1, 1)).collect()
    }

    #[test]
    fn test_group_flat_runs() {
        let mut verse = get_ordered_verse_objects(&words(&["a", "b", "c", "d", "e", "f", "g"]));
        let groups = group_consecutive_numbers(&[0, 1, 2, 5, 6], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![0, 1, 2], vec![5, 6]]);
    }

    #[test]
    fn test_group_out_of_order_makes_singletons() {
        let mut verse = get_ordered_verse_objects(&words(&["a", "b", "c", "d", "e"]));
        let groups = group_consecutive_numbers(&[4, 3, 2, 1], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![4], vec![3], vec![2], vec![1]]);
    }

    #[test]
    fn test_group_respects_arrays() {
        let objects = vec![
            VerseObject::milestone("x", 1, 1, words(&["a", "b", "c"])),
            VerseObject::milestone("y", 1, 1, words(&["d", "e", "f"])),
        ];
        let mut verse = get_ordered_verse_objects(&objects);
        let groups = group_consecutive_numbers(&[1, 2, 3, 4], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_group_skips_negative() {
        let mut verse = get_ordered_verse_objects(&words(&["a", "b"]));
        let groups = group_consecutive_numbers(&[-1, 0, 1, 9], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![0, 1]]);
    }

    #[test]
    fn test_group_across_single_space() {
        let mut verse = get_ordered_verse_objects_from_string("son of David, son");
        // son(0) " "(1) of(2) " "(3) David(4) ", "(5) son(6)
        let groups = group_consecutive_numbers(&[0, 1, 2, 3], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![0, 1, 2], vec![3]]);
        assert_eq!(verse.word_map[1].include_between, Some(1));
        assert_eq!(verse.word_map[2].include_between, Some(3));
        assert_eq!(verse.word_map[3].include_between, None);
    }

    #[test]
    fn test_delete_ignores_invalid_indices() {
        let mut verse = get_ordered_verse_objects(&words(&["a", "b", "c", "d"]));
        delete_indices(&mut verse.tree, &[-1, 9999, 0], &verse.word_map);
        let texts: Vec<_> = verse
            .tree
            .to_objects()
            .into_iter()
            .map(|o| o.text.unwrap())
            .collect();
        assert_eq!(texts, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_delete_removes_flagged_separator() {
        let mut verse = get_ordered_verse_objects_from_string("son of David");
        let groups = group_consecutive_numbers(&[0, 1], &verse.tree, &mut verse.word_map);
        assert_eq!(groups, vec![vec![0, 1]]);

        delete_indices(&mut verse.tree, &[1, 1], &verse.word_map);
        let objects = verse.tree.to_objects();
        let texts: Vec<_> = objects.iter().map(|o| o.text.clone().unwrap()).collect();
        assert_eq!(texts, vec!["son", " ", "David"]);
    }

    #[test]
    fn test_flatten_array() {
        assert_eq!(flatten_array(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_array_mixed_items() {
        let groups = [vec![0isize, 1], vec![4]];
        assert_eq!(flatten_array(&groups), vec![&0, &1, &4]);

        // single values ride along as one-element options
        let values = [Some("a"), None, Some("b")];
        assert_eq!(flatten_array(values), vec!["a", "b"]);
    }

    proptest! {
        #[test]
        fn prop_delete_removes_each_valid_index_once(
            count in 1usize..10,
            indices in prop::collection::vec(-3isize..15, 0..10),
        ) {
            let texts: Vec<String> = (0..count).map(|i| format!("w{i}")).collect();
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let mut verse = get_ordered_verse_objects(&words(&refs));

            delete_indices(&mut verse.tree, &indices, &verse.word_map);

            let mut valid: Vec<isize> = indices
                .iter()
                .copied()
                .filter(|&i| i >= 0 && (i as usize) < count)
                .collect();
            valid.sort();
            valid.dedup();
            let remaining: Vec<String> = verse
                .tree
                .to_objects()
                .into_iter()
                .filter_map(|o| o.text)
                .collect();
            prop_assert_eq!(remaining.len(), count - valid.len());
            for i in valid {
                prop_assert!(!remaining.contains(&texts[i as usize]));
            }
        }
    }
}
