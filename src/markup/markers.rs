//! USFM marker classification.

use crate::model::ObjectKind;

/// Markers whose content runs until an explicit `\tag*` terminator.
const NEED_TERMINATION: &[&str] = &[
    "add", "bd", "bdit", "bk", "ca", "cat", "dc", "ef", "em", "ex", "f", "fa", "fdc", "fe", "fig",
    "fm", "fqa", "fv", "imte", "imte1", "imte2", "imte3", "ior", "iqt", "it", "jmp", "k", "lik",
    "litl", "liv", "liv1", "liv2", "liv3", "nd", "ndx", "no", "ord", "pn", "png", "pro", "qac",
    "qs", "qt", "rb", "rq", "rt", "sc", "sig", "sis", "sls", "tl", "va", "vp", "w", "wa", "wg",
    "wh", "wj", "x", "xdc", "xnt", "xop", "xot", "xta",
];

/// Note markers kept as a single opaque object with `content`.
const NOTE_MARKERS: &[&str] = &["f", "fe", "x", "ef", "ex"];

/// Markers that carry a number argument.
const NUMBERED_MARKERS: &[&str] = &["c", "v"];

pub(crate) fn requires_termination(tag: &str) -> bool {
    NEED_TERMINATION.contains(&tag)
}

pub(crate) fn is_note(tag: &str) -> bool {
    NOTE_MARKERS.contains(&tag)
}

pub(crate) fn supports_number(tag: &str) -> bool {
    NUMBERED_MARKERS.contains(&tag)
}

/// Object kind for a marker tag.
pub(crate) fn marker_kind(tag: &str) -> ObjectKind {
    match tag {
        "f" | "fe" => ObjectKind::Other("footnote".into()),
        "p" => ObjectKind::Other("paragraph".into()),
        "q" | "q1" | "q2" | "q3" | "q4" | "qa" | "qac" | "qc" | "qm" | "qr" | "qs" | "qt" => {
            ObjectKind::Other("quote".into())
        }
        "s" | "s1" | "s2" | "s3" | "s4" | "s5" => ObjectKind::Other("section".into()),
        _ => ObjectKind::Untyped,
    }
}

/// Kinds written on their own line.
pub(crate) fn starts_line(kind: &ObjectKind) -> bool {
    matches!(kind, ObjectKind::Other(k) if k == "paragraph" || k == "quote" || k == "section")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_kind() {
        assert_eq!(marker_kind("q2"), ObjectKind::Other("quote".into()));
        assert_eq!(marker_kind("f"), ObjectKind::Other("footnote".into()));
        assert_eq!(marker_kind("add"), ObjectKind::Untyped);
    }

    #[test]
    fn test_termination() {
        assert!(requires_termination("wj"));
        assert!(!requires_termination("p"));
        assert!(is_note("x"));
        assert!(supports_number("v"));
    }
}
