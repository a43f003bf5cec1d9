//! Wire format of the provider's `batchexecute` RPC.
//!
//! Request: a form body `f.req=<json>&`, where the JSON wraps a second, string-encoded
//! JSON array `[text, lang, speed, "null"]`.
//!
//! Response: a few length-prefixed lines; the one mentioning the RPC id is a JSON array
//! whose matching entry carries `["<base64 mp3>"]` as a string at index 2.

use super::types::Speed;
use crate::{Error, ErrorContext, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use bytes::Bytes;
use serde_json::{json, Value};

/// RPC id of the text-to-speech call.
pub const RPC_ID: &str = "jQ1olc";

/// Path of the RPC endpoint on the provider host.
pub const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

const AUDIO_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Build the form body for one part of text.
pub fn encode_request(text: &str, lang: &str, speed: Speed) -> Result<String> {
    let parameter = serde_json::to_string(&json!([text, lang, speed.rpc_value(), "null"]))?;
    let rpc = serde_json::to_string(&json!([[[RPC_ID, parameter, Value::Null, "generic"]]]))?;
    let encoded: String = url::form_urlencoded::byte_serialize(rpc.as_bytes()).collect();
    Ok(format!("f.req={}&", encoded))
}

/// Extract the audio of one response body.
///
/// `Ok(None)` means the response was well formed but carried no audio, which is how the
/// provider answers a language it cannot speak.
pub fn decode_response(body: &str) -> Result<Option<Bytes>> {
    for line in body.lines().filter(|line| line.contains(RPC_ID)) {
        let value: Value = serde_json::from_str(line.trim()).map_err(|e| {
            Error::decode_with_context(
                format!("Malformed RPC line: {}", e),
                ErrorContext::new().with_source("tts"),
            )
        })?;

        let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();
        for fields in entries.iter().filter_map(Value::as_array) {
            if fields.get(1).and_then(Value::as_str) != Some(RPC_ID) {
                continue;
            }
            let Some(payload) = fields.get(2).and_then(Value::as_str) else {
                return Ok(None);
            };
            return decode_payload(payload);
        }
    }
    Ok(None)
}

fn decode_payload(payload: &str) -> Result<Option<Bytes>> {
    let inner: Value = serde_json::from_str(payload).map_err(|e| {
        Error::decode_with_context(
            format!("Malformed RPC payload: {}", e),
            ErrorContext::new().with_source("tts"),
        )
    })?;
    let Some(encoded) = inner.get(0).and_then(Value::as_str) else {
        return Ok(None);
    };

    let audio = AUDIO_BASE64.decode(encoded).map_err(|e| {
        Error::decode_with_context(
            format!("Invalid base64 audio: {}", e),
            ErrorContext::new()
                .with_source("tts")
                .with_details(format!("{} base64 chars", encoded.len())),
        )
    })?;

    if audio.is_empty() {
        return Ok(None);
    }
    Ok(Some(Bytes::from(audio)))
}
