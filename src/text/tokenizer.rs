//! Punctuation-driven splitting.
//!
//! Splits happen where a speaker would naturally pause:
//! - after tone marks (`?`, `!` and their full-width forms), which stay attached;
//! - on `. ` and `, `, unless the period closes a lowercase dotted abbreviation like `i.e. `;
//! - on `:` that is not part of a time or ratio such as `10:30`;
//! - on any other sentence punctuation, including line breaks.

/// Marks that change intonation and are kept with the preceding token.
pub const TONE_MARKS: &[char] = &['?', '!', '？', '！'];

const PERIOD_COMMA: &[char] = &['.', ','];

const OTHER_PUNCTUATION: &[char] = &[
    '¡', '(', ')', '[', ']', '¿', '…', '‥', '،', ';', '—', '。', '，', '、', '：', '\n',
];

/// Whether `c` is any punctuation the tokenizer knows about.
pub fn is_punctuation(c: char) -> bool {
    TONE_MARKS.contains(&c)
        || PERIOD_COMMA.contains(&c)
        || c == ':'
        || OTHER_PUNCTUATION.contains(&c)
}

/// Split `text` at pause points. Tokens are neither trimmed nor filtered.
pub fn split(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();

        if TONE_MARKS.contains(&c) {
            current.push(c);
            tokens.push(std::mem::take(&mut current));
        } else if PERIOD_COMMA.contains(&c) && next == Some(' ') && !closes_dotted_abbreviation(&chars, i)
        {
            tokens.push(std::mem::take(&mut current));
            // The following space belongs to the delimiter.
            i += 2;
            continue;
        } else if c == ':' {
            let in_number = prev.is_some_and(|p| p.is_ascii_digit())
                || next.is_some_and(|n| n.is_ascii_digit());
            if in_number {
                current.push(c);
            } else {
                tokens.push(std::mem::take(&mut current));
            }
        } else if OTHER_PUNCTUATION.contains(&c) {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
        i += 1;
    }

    tokens.push(current);
    tokens
}

// `i.e. ` and `e.g. `: the delimiter is preceded by a period and a lowercase letter.
fn closes_dotted_abbreviation(chars: &[char], i: usize) -> bool {
    i >= 2 && chars[i - 2] == '.' && chars[i - 1].is_ascii_lowercase()
}
