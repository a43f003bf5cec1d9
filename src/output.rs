//! Persisting synthesized speech.
//!
//! Audio is written to a hidden sibling file first and renamed over the target, so the target
//! is either the previous artifact or the complete new one, never a truncated file.

use crate::tts::{AudioOutput, TtsClient, TtsOptions};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

/// Anything that can turn text into audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioOutput>;
}

#[async_trait]
impl SpeechSynthesizer for TtsClient {
    async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioOutput> {
        TtsClient::synthesize(self, text, options).await
    }
}

/// Write `audio` to `path`, replacing any previous file.
pub async fn save_audio(audio: &AudioOutput, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if audio.is_empty() {
        return Err(Error::validation_with_context(
            "Refusing to save empty audio",
            ErrorContext::new()
                .with_details(path.display().to_string())
                .with_source("output"),
        ));
    }
    let file_name = path.file_name().ok_or_else(|| {
        Error::validation_with_context(
            "Output path has no file name",
            ErrorContext::new()
                .with_field_path("path")
                .with_details(path.display().to_string())
                .with_source("output"),
        )
    })?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let staging = dir.join(format!(
        ".{}.{}.part",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    ));

    if let Err(e) = write_then_rename(&staging, path, &audio.data).await {
        // Best effort; the staging file may never have been created.
        let _ = fs::remove_file(&staging).await;
        return Err(e.into());
    }

    info!(path = %path.display(), bytes = audio.len(), parts = audio.parts, "saved audio");
    Ok(path.to_path_buf())
}

async fn write_then_rename(staging: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(staging).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(staging, target).await
}

/// Synthesize `text`, save it to `path` and report the save on `out`.
///
/// The confirmation line is written only once the file is in place.
pub async fn save_speech<W: Write>(
    synthesizer: &dyn SpeechSynthesizer,
    text: &str,
    options: &TtsOptions,
    path: impl AsRef<Path>,
    out: &mut W,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let audio = synthesizer.synthesize(text, options).await?;
    let saved = save_audio(&audio, path).await?;
    writeln!(out, "Saved as {}", path.display())?;
    Ok(saved)
}
