//! speak: record the SOLID course welcome message as an MP3.
//!
//! Usage:
//!   speak
//!
//! Writes `solid_course_welcome.mp3` to the working directory in American English and
//! prints one confirmation line. Takes no arguments.
//!
//! ENVIRONMENT:
//!   SPEAK_HTTP_TIMEOUT_SECS    HTTP timeout in seconds (default 30)
//!   SPEAK_PROXY_URL            Proxy for provider requests
//!   RUST_LOG                   Log filter, logs go to stderr (default "warn")

use anyhow::Context;
use speak_rs::{save_speech, TtsClient, TtsOptions};
use tracing_subscriber::EnvFilter;

const OUTPUT_FILE: &str = "solid_course_welcome.mp3";

const WELCOME_TEXT: &str = "
Hi everyone, and welcome to our course on SOLID principles — a cornerstone of writing clean,\x20
maintainable, and scalable object-oriented code.
Whether you're a junior developer building your foundation or a seasoned coder looking to\x20
refine your architecture skills, you're in the right place.
Over the next sessions, we'll dive into what makes code not just work,\x20
but last.\x20
You'll learn to spot design flaws early, refactor with confidence,
and write software that's easier to understand, test, and extend.
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = TtsClient::from_env().context("failed to set up the TTS client")?;
    // American English accent.
    let options = TtsOptions::new("en", "com");

    save_speech(
        &client,
        WELCOME_TEXT,
        &options,
        OUTPUT_FILE,
        &mut std::io::stdout(),
    )
    .await
    .with_context(|| format!("failed to save {}", OUTPUT_FILE))?;

    Ok(())
}
