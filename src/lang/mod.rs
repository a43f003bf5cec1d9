//! Languages the provider can speak.
//!
//! Codes are matched case-insensitively and resolved to their canonical spelling
//! (`zh-cn` becomes `zh-CN`). A handful of regional tags that the provider no longer
//! accepts are folded into their base language with a warning.

use crate::{Error, ErrorContext, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("iw", "Hebrew"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi (Gurmukhi)"),
    ("pl", "Polish"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("su", "Sundanese"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("yue", "Cantonese"),
    ("zh", "Chinese (Mandarin)"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

// Deprecated regional tag -> canonical code.
const DEPRECATED: &[(&str, &str)] = &[
    ("en-us", "en"),
    ("en-ca", "en"),
    ("en-uk", "en"),
    ("en-gb", "en"),
    ("en-au", "en"),
    ("en-gh", "en"),
    ("en-in", "en"),
    ("en-ie", "en"),
    ("en-nz", "en"),
    ("en-ng", "en"),
    ("en-ph", "en"),
    ("en-za", "en"),
    ("en-tz", "en"),
    ("fr-fr", "fr"),
    ("pt-br", "pt"),
    ("es-es", "es"),
    ("es-us", "es"),
];

static BY_LOWERCASE_CODE: Lazy<HashMap<String, Language>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .map(|&(code, name)| (code.to_lowercase(), Language { code, name }))
        .collect()
});

/// All supported languages, ordered by code.
pub fn supported_languages() -> Vec<Language> {
    let mut langs: Vec<Language> = BY_LOWERCASE_CODE.values().copied().collect();
    langs.sort_by(|a, b| a.code.cmp(b.code));
    langs
}

/// Look up a language without deprecated-tag fallback.
pub fn find(tag: &str) -> Option<Language> {
    BY_LOWERCASE_CODE.get(&tag.trim().to_lowercase()).copied()
}

/// Resolve a user-supplied tag to a supported language.
pub fn resolve(tag: &str) -> Result<Language> {
    if let Some(lang) = find(tag) {
        return Ok(lang);
    }

    let lowered = tag.trim().to_lowercase();
    if let Some(lang) = DEPRECATED
        .iter()
        .find(|(old, _)| *old == lowered)
        .and_then(|(_, code)| find(code))
    {
        tracing::warn!(
            requested = tag,
            using = lang.code,
            "'{}' is deprecated by the provider, falling back to '{}'",
            tag,
            lang.code
        );
        return Ok(lang);
    }

    Err(Error::validation_with_context(
        format!("Language not supported: {}", tag),
        ErrorContext::new()
            .with_field_path("options.lang")
            .with_source("lang"),
    ))
}
