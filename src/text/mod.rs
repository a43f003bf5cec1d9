//! Text preparation: turn arbitrary input into provider-sized parts.
//!
//! The provider accepts at most [`MAX_CHARS`] characters per request. Text is trimmed,
//! pre-processed, split at punctuation and, as a last resort, cut at spaces.

mod preprocess;
mod tokenizer;

pub use preprocess::{abbreviations, end_of_line, preprocess, tone_marks, word_sub};
pub use tokenizer::{is_punctuation, split, TONE_MARKS};

/// Maximum number of characters (Unicode scalar values) per request.
pub const MAX_CHARS: usize = 100;

/// Split `text` into ordered, non-empty parts of at most [`MAX_CHARS`] characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = preprocess(text.trim());

    if char_len(&text) <= MAX_CHARS {
        return clean_tokens(vec![text]);
    }

    clean_tokens(split(&text))
        .iter()
        .flat_map(|token| minimize(token, ' ', MAX_CHARS))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Trim tokens and drop the ones made only of punctuation and whitespace.
pub fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !t.chars().all(is_punctuation_or_space))
        .map(|t| t.trim().to_string())
        .collect()
}

/// Characters that carry nothing to speak on their own.
pub fn is_punctuation_or_space(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || is_punctuation(c)
}

/// Cut `text` into pieces of at most `max` characters, preferring the last `delim` before the limit.
///
/// One leading `delim` is dropped from every piece. A piece with no `delim` inside the limit is
/// hard-cut at `max` characters.
pub fn minimize(text: &str, delim: char, max: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text;

    loop {
        rest = rest.strip_prefix(delim).unwrap_or(rest);
        if char_len(rest) <= max {
            pieces.push(rest.to_string());
            return pieces;
        }

        // Byte offset of the first character past the limit.
        let limit = rest
            .char_indices()
            .nth(max)
            .map(|(offset, _)| offset)
            .unwrap_or(rest.len());
        let cut = rest[..limit].rfind(delim).unwrap_or(limit);

        pieces.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
