//! End-to-end saving: artifact on disk, confirmation only after a successful write.

use crate::integration::mock_server::MockServerFixture;
use async_trait::async_trait;
use bytes::Bytes;
use speak_rs::{save_speech, AudioOutput, Error, ErrorContext, SpeechSynthesizer, TtsOptions};
use std::path::PathBuf;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("speak-rs-save-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Synthesizer with a canned answer.
struct FixedSynthesizer(Option<&'static [u8]>);

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    async fn synthesize(&self, _text: &str, _options: &TtsOptions) -> speak_rs::Result<AudioOutput> {
        match self.0 {
            Some(audio) => Ok(AudioOutput {
                data: Bytes::from_static(audio),
                parts: 1,
            }),
            None => Err(Error::validation_with_context(
                "provider refused",
                ErrorContext::new(),
            )),
        }
    }
}

#[tokio::test]
async fn test_hello_world_scenario() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(r"Hello\+world", b"ID3 hello world", 1).await;
    let dir = scratch_dir();
    let path = dir.join("hello.mp3");
    let mut out = Vec::new();

    let saved = save_speech(
        &fixture.client(),
        "Hello world",
        &TtsOptions::new("en", "com"),
        &path,
        &mut out,
    )
    .await
    .expect("save");

    assert_eq!(saved, path);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Saved as {}\n", path.display())
    );
    mock.assert_async().await;
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_rerun_overwrites() {
    let dir = scratch_dir();
    let path = dir.join("welcome.mp3");
    let mut out = Vec::new();

    for audio in [&b"first take"[..], &b"second"[..]] {
        save_speech(
            &FixedSynthesizer(Some(audio)),
            "Hello world",
            &TtsOptions::default(),
            &path,
            &mut out,
        )
        .await
        .expect("save");
    }

    assert_eq!(std::fs::read(&path).unwrap(), b"second");
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_no_confirmation_when_synthesis_fails() {
    let dir = scratch_dir();
    let path = dir.join("welcome.mp3");
    let mut out = Vec::new();

    let result = save_speech(
        &FixedSynthesizer(None),
        "Hello world",
        &TtsOptions::default(),
        &path,
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(out.is_empty());
    assert!(!path.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_no_confirmation_when_write_fails() {
    let dir = scratch_dir();
    let path = dir.join("missing").join("welcome.mp3");
    let mut out = Vec::new();

    let err = save_speech(
        &FixedSynthesizer(Some(b"ID3")),
        "Hello world",
        &TtsOptions::default(),
        &path,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(out.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_unsupported_lang_leaves_no_file() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable().await;
    let dir = scratch_dir();
    let path = dir.join("welcome.mp3");
    let mut out = Vec::new();

    let result = save_speech(
        &fixture.client(),
        "Hello world",
        &TtsOptions::new("xx", "com"),
        &path,
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(!path.exists());
    assert!(out.is_empty());
    mock.assert_async().await;
    std::fs::remove_dir_all(&dir).unwrap();
}
