//! # speak-rs
//!
//! Save text as spoken MP3 audio through the Google Translate text-to-speech endpoint.
//!
//! ## Overview
//!
//! Text is trimmed, pre-processed and cut into parts the provider accepts (at most
//! [`text::MAX_CHARS`] characters each). Every part becomes one `batchexecute` request; the
//! base64 audio of the responses is decoded and concatenated in order. The result is
//! written atomically to disk.
//!
//! The accent is selected by the provider host's top-level domain: `com` for American English,
//! `co.uk` for British English, `com.au` for Australian English, and so on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use speak_rs::{save_speech, TtsClient, TtsOptions};
//!
//! #[tokio::main]
//! async fn main() -> speak_rs::Result<()> {
//!     let client = TtsClient::from_env()?;
//!     let options = TtsOptions::new("en", "com");
//!     save_speech(&client, "Hello world", &options, "hello.mp3", &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Provider client, options and the RPC wire format |
//! | [`text`] | Pre-processing and tokenization into provider-sized parts |
//! | [`lang`] | Supported languages and tag resolution |
//! | [`output`] | Atomic saving and the synthesizer seam |
//! | [`transport`] | HTTP client configuration |

pub mod lang;
pub mod output;
pub mod text;
pub mod transport;
pub mod tts;

pub use output::{save_audio, save_speech, SpeechSynthesizer};
pub use tts::{AudioOutput, Speed, TtsClient, TtsClientBuilder, TtsOptions};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream of fallible items
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
