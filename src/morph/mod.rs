//! Morphology code decoding.
//!
//! Expands the compact morphology codes carried by original-language words
//! (`x-morph="Gr,N,,,,,GMS,"`, `He,Vqp3fs`) into localization keys for
//! display. Codes this module does not know come back prefixed with `*`.

mod tables;

use regex_lite::Regex;
use std::sync::LazyLock;

use tables::{greek_position, greek_role, greek_type, param_value, part_of_speech};

/// Splits a Greek code at commas and uppercase letters.
static GREEK_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z0-9,][a-z]*").unwrap());

/// Key emitted between the segments of a Hebrew/Aramaic code.
pub const SEGMENT_SEPARATOR: &str = "*:";

/// Decode a morphology code into localization keys.
///
/// Codes starting with `He,` or `Ar,` are read as Hebrew or Aramaic;
/// anything else as Greek. Blank input gives no keys. A Greek code too
/// short to hold a role is returned unchanged as the only entry.
///
/// # Examples
///
/// ```
/// use versealign::morph::decode_morph_code;
///
/// assert_eq!(
///     decode_morph_code("Gr,N,,,,,GMS,"),
///     vec!["noun", "genitive", "masculine", "singular"]
/// );
/// assert_eq!(
///     decode_morph_code("He,Vqp3fs"),
///     vec!["verb", "qal", "perfect_qatal", "third", "feminine", "singular"]
/// );
/// ```
pub fn decode_morph_code(morph: &str) -> Vec<String> {
    let language = morph.split(',').next().unwrap_or_default().to_lowercase();
    match language.as_str() {
        "he" | "ar" => {
            let code = morph.split_once(',').map(|(_, rest)| rest).unwrap_or_default();
            decode_hebrew_aramaic(code, language == "ar")
        }
        _ => decode_greek(morph),
    }
}

fn decode_greek(morph: &str) -> Vec<String> {
    let morph = morph.trim();
    if morph.is_empty() {
        return Vec::new();
    }

    let codes: Vec<Option<&str>> = GREEK_CODE_RE
        .find_iter(morph)
        .map(|m| Some(m.as_str()).filter(|code| *code != ","))
        .collect();
    if codes.len() < 3 {
        return vec![morph.to_string()];
    }

    let mut keys = Vec::new();
    let role = codes[2].unwrap_or_default();
    match greek_role(role) {
        Some(key) => keys.push(key.to_string()),
        None => keys.push(format!("*{role}")),
    }
    if let Some(kind) = codes.get(3).copied().flatten() {
        match greek_type(role, kind) {
            Some(key) => keys.push(key.to_string()),
            None => keys.push(format!("*{kind}")),
        }
    }
    for (index, code) in codes.iter().enumerate().skip(4) {
        let Some(code) = code else {
            continue;
        };
        match greek_position(index, code) {
            Some(key) => keys.push(key.to_string()),
            None => keys.push(format!("*{code}")),
        }
    }
    keys
}

fn decode_hebrew_aramaic(code: &str, aramaic: bool) -> Vec<String> {
    let mut keys = Vec::new();
    for (i, segment) in code.split(':').enumerate() {
        if i > 0 {
            keys.push(SEGMENT_SEPARATOR.to_string());
        }

        let mut chars = segment.chars();
        let Some((key, params)) = chars.next().and_then(part_of_speech) else {
            keys.push(format!("*{segment}"));
            continue;
        };
        keys.push(key.to_string());
        for &param in params {
            let Some(c) = chars.next() else {
                break;
            };
            match param_value(param, c, aramaic) {
                Some(value) => keys.push(value.to_string()),
                None => keys.push(format!("*{c}")),
            }
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            keys.push(format!("*{rest}"));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_noun() {
        assert_eq!(
            decode_morph_code("Gr,N,,,,,GMS,"),
            vec!["noun", "genitive", "masculine", "singular"]
        );
    }

    #[test]
    fn test_greek_verb() {
        assert_eq!(
            decode_morph_code("Gr,V,IAA3,,S,"),
            vec!["verb", "indicative", "aorist", "active", "third", "singular"]
        );
    }

    #[test]
    fn test_greek_determiner_type() {
        assert_eq!(
            decode_morph_code("Gr,EA,,,,NMS,"),
            vec!["determiner", "article", "nominative", "masculine", "singular"]
        );
    }

    #[test]
    fn test_greek_unknown_codes() {
        assert_eq!(decode_morph_code("AbCZEF,HI"), vec!["*Z", "*E", "*F", "*H", "*I"]);
    }

    #[test]
    fn test_greek_short_and_blank() {
        assert_eq!(decode_morph_code("Gr,"), vec!["Gr,"]);
        assert_eq!(decode_morph_code("Gr,A"), vec!["adjective"]);
        assert!(decode_morph_code("   ").is_empty());
        assert!(decode_morph_code("").is_empty());
    }

    #[test]
    fn test_hebrew() {
        assert_eq!(
            decode_morph_code("He,Acmsa"),
            vec!["adjective", "cardinal_number", "masculine", "singular", "absolute"]
        );
        assert_eq!(decode_morph_code("He,D"), vec!["adverb"]);
        assert_eq!(decode_morph_code("He,R"), vec!["preposition"]);
        assert_eq!(
            decode_morph_code("He,C:Td:Ncbsa"),
            vec![
                "conjunction", "*:", "particle", "definite_article", "*:", "noun", "common",
                "both_genders", "singular", "absolute"
            ]
        );
    }

    #[test]
    fn test_hebrew_invalid_codes() {
        assert_eq!(decode_morph_code("He,Xqp3fs"), vec!["*Xqp3fs"]);
        assert_eq!(
            decode_morph_code("He,V1p3fs"),
            vec!["verb", "*1", "perfect_qatal", "third", "feminine", "singular"]
        );
        assert_eq!(
            decode_morph_code("He,Vqp3fsaa"),
            vec!["verb", "qal", "perfect_qatal", "third", "feminine", "singular", "absolute", "*a"]
        );
    }

    #[test]
    fn test_aramaic() {
        assert_eq!(
            decode_morph_code("Ar,Vqp3ms"),
            vec!["verb", "peal", "perfect_qatal", "third", "masculine", "singular"]
        );
        assert_eq!(
            decode_morph_code("Ar,Pf3bs"),
            vec!["pronoun", "indefinite", "third", "both_genders", "singular"]
        );
        assert_eq!(
            decode_morph_code("Ar,R:Sp3ms"),
            vec!["preposition", "*:", "suffix", "pronominal", "third", "masculine", "singular"]
        );
    }
}
