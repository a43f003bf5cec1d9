//! Text clean-up applied before tokenizing.

use once_cell::sync::Lazy;
use regex::Regex;

static TONE_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([?!？！])").unwrap());

static ABBREVIATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(dr|jr|mr|mrs|ms|msgr|prof|sr|st)\.").unwrap()
});

static WORD_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| vec![(Regex::new(r"(?i)\besq\.").unwrap(), "Esquire")]);

/// Run every pre-processor, in order.
pub fn preprocess(text: &str) -> String {
    let text = tone_marks(text);
    let text = end_of_line(&text);
    let text = abbreviations(&text);
    word_sub(&text)
}

/// Put a space after tone-modifying punctuation so it survives as a pause.
pub fn tone_marks(text: &str) -> String {
    TONE_MARK.replace_all(text, "$1 ").into_owned()
}

/// Join words hyphenated across a line break.
pub fn end_of_line(text: &str) -> String {
    text.replace("-\n", "")
}

/// Drop the period after common abbreviations so it is not read as a sentence end.
pub fn abbreviations(text: &str) -> String {
    ABBREVIATION.replace_all(text, "$1").into_owned()
}

pub fn word_sub(text: &str) -> String {
    WORD_SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
