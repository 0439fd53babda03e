//! Word tokenizer and occurrence counting.
//!
//! Text is split on Unicode word boundaries (UAX #29). A token is a word
//! when it contains at least one alphanumeric character; everything else
//! (whitespace, punctuation) is separator text.

use unicode_segmentation::UnicodeSegmentation;

/// True if the token contains word characters.
pub fn is_word_token(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Word tokens of `text`, in order.
///
/// # Examples
///
/// ```
/// use versealign::tokenizer::tokenize;
///
/// assert_eq!(tokenize("son of David, son of Abraham."),
///            vec!["son", "of", "David", "son", "of", "Abraham"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds().filter(|t| is_word_token(t)).collect()
}

/// Words interleaved with the separator runs between them.
///
/// Consecutive non-word segments are merged, so concatenating the tokens
/// reproduces `text` exactly.
///
/// # Examples
///
/// ```
/// use versealign::tokenizer::tokenize_with_punctuation;
///
/// assert_eq!(tokenize_with_punctuation("hello, world."),
///            vec!["hello", ", ", "world", "."]);
/// ```
pub fn tokenize_with_punctuation(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    let mut run_start: Option<usize> = None;

    for (offset, segment) in text.split_word_bound_indices() {
        if is_word_token(segment) {
            if let Some(start) = run_start.take() {
                tokens.push(&text[start..offset]);
            }
            tokens.push(segment);
        } else if run_start.is_none() {
            run_start = Some(offset);
        }
    }
    if let Some(start) = run_start {
        tokens.push(&text[start..]);
    }
    tokens
}

/// 1-based occurrence of `token` at word position `token_index` of `text`.
///
/// Counts matching words in positions `0..=token_index`.
pub fn occurrence_in_string(text: &str, token_index: usize, token: &str) -> u32 {
    tokenize(text)
        .into_iter()
        .take(token_index + 1)
        .filter(|t| *t == token)
        .count() as u32
}

/// Total number of `token` words in `text`.
pub fn occurrences_in_string(text: &str, token: &str) -> u32 {
    tokenize(text).into_iter().filter(|t| *t == token).count() as u32
}
