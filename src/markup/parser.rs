//! USFM verse fragment parser.
//!
//! Handles the subset of USFM that appears inside a single verse:
//! - `\w text|attrs\w*` words
//! - `\zaln-s |attrs\*` ... `\zaln-e\*` and `\k-s` ... `\k-e\*` milestones
//! - `\f`, `\fe`, `\x` notes (opaque, content kept verbatim)
//! - terminated character styles (`\add`, `\nd`, `\wj`, ...)
//! - paragraph, quote and section markers
//!
//! Unmatched end markers are kept as literal text.

use serde_json::Value;
use tracing::trace;

use crate::model::{ObjectKind, VerseObject, WORD_TAG};
use crate::model::occurrence::parse_leading;

use super::markers::{is_note, marker_kind, requires_termination, supports_number};
use super::patterns::{ATTRIBUTE_RE, MARKER_RE, NUMBER_RE};

/// An open container waiting for its end marker.
struct Frame {
    object: VerseObject,
    children: Vec<VerseObject>,
    /// Marker name that closes this frame (`zaln-e`, `add*`, ...).
    closer: String,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    root: Vec<VerseObject>,
    stack: Vec<Frame>,
}

/// Parse a verse fragment into verse objects.
///
/// # Examples
///
/// ```
/// use versealign::markup::parse_verse;
///
/// let objects = parse_verse(r#"\w In|x-occurrence="1" x-occurrences="1"\w* the"#);
/// assert_eq!(objects[0].text.as_deref(), Some("In"));
/// assert_eq!(objects[0].occurrence, 1);
/// assert_eq!(objects[1].text.as_deref(), Some(" the"));
/// ```
pub fn parse_verse(input: &str) -> Vec<VerseObject> {
    let mut parser = Parser {
        input,
        pos: 0,
        root: Vec::new(),
        stack: Vec::new(),
    };
    parser.run();
    parser.finish()
}

impl<'a> Parser<'a> {
    fn run(&mut self) {
        let input = self.input;
        while self.pos < input.len() {
            let rest = &input[self.pos..];
            match rest.find('\\') {
                Some(0) => self.marker(),
                Some(offset) => {
                    // line breaks before a marker are layout only
                    self.push_text(rest[..offset].trim_end_matches(['\n', '\r']));
                    self.pos += offset;
                }
                None => {
                    self.push_text(rest);
                    self.pos = self.input.len();
                }
            }
        }
    }

    fn finish(mut self) -> Vec<VerseObject> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.root
    }

    fn current(&mut self) -> &mut Vec<VerseObject> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, object: VerseObject) {
        self.current().push(object);
    }

    /// Append text, joining with a preceding text object. Line breaks on
    /// their own are layout only and dropped.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() || text.chars().all(|c| c == '\n' || c == '\r') {
            return;
        }
        let list = self.current();
        if let Some(last) = list.last_mut()
            && last.is_text()
        {
            last.text.get_or_insert_with(String::new).push_str(text);
            return;
        }
        list.push(VerseObject::text(text));
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let mut object = frame.object;
            object.children = Some(frame.children);
            self.push(object);
        }
    }

    /// Skip the single space that separates a marker from its content.
    fn skip_separator(&mut self) {
        if self.input[self.pos..].starts_with(' ') {
            self.pos += 1;
        }
    }

    fn marker(&mut self) {
        let input = self.input;
        let rest = &input[self.pos..];
        let Some(caps) = MARKER_RE.captures(rest) else {
            self.push_text("\\");
            self.pos += 1;
            return;
        };
        let whole = caps.get(0).map_or(1, |m| m.len());
        let tag = caps.get(2).map_or("", |m| m.as_str()).to_string();
        let closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

        if tag.is_empty() {
            // stray `\` or `\*`
            self.push_text(&rest[..whole]);
            self.pos += whole;
            return;
        }
        self.pos += whole;

        if closing {
            self.close(&tag, &rest[..whole]);
        } else if let Some(base) = tag.strip_suffix("-s") {
            self.milestone_start(base);
        } else if let Some(base) = tag.strip_suffix("-e") {
            let end = if input[self.pos..].starts_with("\\*") {
                self.pos += 2;
                &rest[..whole + 2]
            } else {
                &rest[..whole]
            };
            self.milestone_end(base, end);
        } else if tag == WORD_TAG {
            self.word();
        } else if is_note(&tag) {
            self.note(&tag);
        } else if requires_termination(&tag) {
            self.skip_separator();
            let object = VerseObject {
                tag: Some(tag.clone()),
                kind: marker_kind(&tag),
                end_tag: Some(format!("{tag}*")),
                ..Default::default()
            };
            self.stack.push(Frame {
                object,
                children: Vec::new(),
                closer: format!("{tag}*"),
            });
        } else {
            self.standalone(&tag);
        }
    }

    fn close(&mut self, tag: &str, literal: &str) {
        let closer = format!("{tag}*");
        match self.stack.iter().rposition(|f| f.closer == closer) {
            Some(depth) => {
                while self.stack.len() > depth {
                    self.close_top();
                }
            }
            None => {
                trace!(marker = literal, "unmatched end marker kept as text");
                self.push_text(literal);
            }
        }
    }

    fn milestone_start(&mut self, base: &str) {
        let input = self.input;
        let rest = &input[self.pos..];
        let (attributes, consumed) = match rest.find("\\*") {
            Some(end) => (&rest[..end], end + 2),
            None => (rest, rest.len()),
        };
        self.pos += consumed;

        let mut object = VerseObject {
            tag: Some(base.to_string()),
            kind: ObjectKind::Milestone,
            end_tag: Some(format!("{base}-e\\*")),
            ..Default::default()
        };
        apply_attributes(&mut object, attributes.trim_start().trim_start_matches('|'));
        self.stack.push(Frame {
            object,
            children: Vec::new(),
            closer: format!("{base}-e"),
        });
    }

    fn milestone_end(&mut self, base: &str, literal: &str) {
        let closer = format!("{base}-e");
        match self.stack.last() {
            Some(frame) if frame.closer == closer => self.close_top(),
            _ => {
                trace!(marker = literal, "unmatched milestone end kept as text");
                self.push_text(literal);
            }
        }
    }

    fn word(&mut self) {
        self.skip_separator();
        let input = self.input;
        let rest = &input[self.pos..];
        let (body, consumed) = match rest.find("\\w*") {
            Some(end) => (&rest[..end], end + 3),
            None => (rest, rest.len()),
        };
        self.pos += consumed;

        let (text, attributes) = match body.split_once('|') {
            Some((text, attributes)) => (text, attributes),
            None => (body, ""),
        };
        let mut object = VerseObject::word(text, 0, 0);
        apply_attributes(&mut object, attributes);
        self.push(object);
    }

    fn note(&mut self, tag: &str) {
        self.skip_separator();
        let end_marker = format!("\\{tag}*");
        let input = self.input;
        let rest = &input[self.pos..];
        let (content, consumed) = match rest.find(&end_marker) {
            Some(end) => (&rest[..end], end + end_marker.len()),
            None => (rest, rest.len()),
        };
        self.pos += consumed;

        let mut object = VerseObject::marker(tag, marker_kind(tag));
        object.end_tag = Some(format!("{tag}*"));
        object.content = Some(content.to_string());
        self.push(object);
    }

    fn standalone(&mut self, tag: &str) {
        let input = self.input;
        let mut object = VerseObject::marker(tag, marker_kind(tag));
        if supports_number(tag)
            && let Some(caps) = NUMBER_RE.captures(&input[self.pos..])
            && let Some(number) = caps.get(1)
        {
            object
                .attributes
                .insert("number".into(), Value::String(number.as_str().to_string()));
            self.pos += caps.get(0).map_or(0, |m| m.len());
        }
        self.skip_separator();
        self.push(object);
    }
}

/// Apply `key="value"` attributes to a word or milestone.
///
/// `x-` prefixes are dropped, `strongs` is read as `strong`, occurrence
/// counts are parsed as integers and `content` fills the milestone text.
/// A bare value without `key=` is the default attribute (`lemma`).
fn apply_attributes(object: &mut VerseObject, attributes: &str) {
    let attributes = attributes.trim();
    if attributes.is_empty() {
        return;
    }
    if !attributes.contains('=') {
        object.lemma = Some(attributes.to_string());
        return;
    }

    for caps in ATTRIBUTE_RE.captures_iter(attributes) {
        let (Some(key), Some(value)) = (caps.get(2), caps.get(3).or_else(|| caps.get(4))) else {
            continue;
        };
        let value = value.as_str();
        match key.as_str() {
            "occurrence" => object.occurrence = parse_leading(value),
            "occurrences" => object.occurrences = parse_leading(value),
            "strong" | "strongs" => object.strong = Some(value.to_string()),
            "lemma" => object.lemma = Some(value.to_string()),
            "morph" => object.morph = Some(value.to_string()),
            "content" => object.content = Some(value.to_string()),
            other => {
                object
                    .attributes
                    .insert(other.to_string(), Value::String(value.to_string()));
            }
        }
    }
}
