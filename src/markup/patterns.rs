//! Cached regex patterns for USFM fragments.
//!
//! Uses LazyLock to compile patterns once on first use.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches `key="value"` attributes, capturing an optional `x-` prefix.
pub static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(x-)?([A-Za-z0-9_-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Matches a marker name right after a backslash, with optional `+`
/// nesting prefix and `*` terminator.
pub static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\(\+?)([A-Za-z0-9-]*)(\*?)").unwrap());

/// Matches a footnote with its terminator.
pub static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\f[\s\S]*\\f[^A-Za-z0-9|\s]*").unwrap());

/// Matches a marker number argument such as `\v 12`.
pub static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+[a-z]?(?:-[0-9]+[a-z]?)?)").unwrap());
