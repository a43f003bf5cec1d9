//! TTS (text-to-speech) module: synthesizes text into MP3 audio through the Google Translate
//! speech endpoint. The accent is chosen by the provider host's top-level domain.

mod client;
pub mod rpc;
mod types;

pub use client::{provider_host, TtsClient, TtsClientBuilder};
pub use types::{AudioOutput, Speed, TtsOptions};
