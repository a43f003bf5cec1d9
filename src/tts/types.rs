//! TTS (Text-to-Speech) types.

use bytes::Bytes;

/// Reading speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Normal,
    Slow,
}

impl Speed {
    /// Value of the speed slot in the RPC payload.
    pub fn rpc_value(self) -> serde_json::Value {
        match self {
            Speed::Normal => serde_json::Value::Null,
            Speed::Slow => serde_json::Value::Bool(true),
        }
    }
}

/// Options for TTS synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsOptions {
    /// Language tag, e.g. `en` or `zh-CN`.
    pub lang: String,
    /// Top-level domain of the provider host; selects the regional accent (`com`, `co.uk`, ...).
    pub tld: String,
    pub slow: bool,
    /// Reject languages missing from the local table before any request is made.
    pub lang_check: bool,
}

impl Default for TtsOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            tld: "com".to_string(),
            slow: false,
            lang_check: true,
        }
    }
}

impl TtsOptions {
    pub fn new(lang: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            tld: tld.into(),
            ..Self::default()
        }
    }

    pub fn with_slow(mut self, slow: bool) -> Self {
        self.slow = slow;
        self
    }

    pub fn with_lang_check(mut self, lang_check: bool) -> Self {
        self.lang_check = lang_check;
        self
    }

    pub fn speed(&self) -> Speed {
        if self.slow {
            Speed::Slow
        } else {
            Speed::Normal
        }
    }
}

/// Audio output from TTS.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    /// MP3 frames of every part, concatenated in text order.
    pub data: Bytes,
    /// Number of provider requests the audio was assembled from.
    pub parts: usize,
}

impl AudioOutput {
    pub fn mime_type(&self) -> &'static str {
        "audio/mpeg"
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
