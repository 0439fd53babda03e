//! USFM verse fragments.
//!
//! Converts between a single verse's USFM text and verse objects, and
//! strips markers from display text.

mod markers;
mod parser;
mod patterns;
mod writer;

pub use parser::parse_verse;
pub use writer::{UsfmWriter, WriterConfig, serialize_verse};

use patterns::FOOTNOTE_RE;

/// Remove USFM markers from a string.
///
/// With `None`, footnotes (`\f ... \f*`) and `\q` markers are removed.
/// Otherwise each listed marker is removed: `f` strips whole footnotes,
/// any other name strips just the `\name` marker text.
///
/// # Examples
///
/// ```
/// use versealign::markup::remove_marker;
///
/// assert_eq!(remove_marker("Hi \\f + \\ft note\\f*there", None), "Hi there");
/// assert_eq!(remove_marker("\\q1 text", Some(&["q1"])), " text");
/// ```
pub fn remove_marker(text: &str, types: Option<&[&str]>) -> String {
    let wants = |name: &str| types.is_none_or(|types| types.contains(&name));

    let mut result = text.to_string();
    if wants("f") {
        result = FOOTNOTE_RE.replace_all(&result, "").into_owned();
    }
    if wants("q") {
        result = result.replace("\\q", "");
    }
    for marker in types.into_iter().flatten() {
        if matches!(*marker, "f" | "q") {
            continue;
        }
        if !result.contains('\\') {
            break;
        }
        result = result.replace(&format!("\\{marker}"), "");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_default_markers() {
        assert_eq!(
            remove_marker("\\q Blessed \\f + \\ft note\\f*is he", None),
            " Blessed is he"
        );
    }

    #[test]
    fn test_remove_selected_markers() {
        assert_eq!(remove_marker("a\\f x\\f* \\q b", Some(&["f"])), "a \\q b");
        assert_eq!(remove_marker("\\p one \\s2 two", Some(&["p", "s2"])), " one  two");
        assert_eq!(remove_marker("plain", Some(&["p"])), "plain");
    }
}
