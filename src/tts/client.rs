//! TTS (Text-to-Speech) client.

use super::rpc::{self, BATCHEXECUTE_PATH};
use super::types::{AudioOutput, TtsOptions};
use crate::transport::{HttpTransport, TransportConfig, TransportError};
use crate::{lang, text, BoxStream, Error, ErrorContext, Result};
use bytes::{Bytes, BytesMut};
use futures::{StreamExt, TryStreamExt};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for the Google Translate text-to-speech endpoint.
///
/// Text is split into parts of at most [`text::MAX_CHARS`] characters. Parts are requested one
/// after another and their audio is concatenated in order.
pub struct TtsClient {
    transport: HttpTransport,
    base_url: Option<Url>,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Client configured from `SPEAK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        TtsClientBuilder::from_env().build()
    }

    /// URL every part of a request with this `tld` is posted to.
    pub fn endpoint(&self, tld: &str) -> Result<String> {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => provider_host(tld)?,
        };
        let url = base.join(BATCHEXECUTE_PATH).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot build endpoint URL: {}", e),
                ErrorContext::new().with_details(base.to_string()),
            )
        })?;
        Ok(url.to_string())
    }

    /// Validate `text` and `options` and build the form body of every part, in order.
    pub fn prepare(&self, text: &str, options: &TtsOptions) -> Result<Vec<String>> {
        let lang = request_lang(options)?;

        if text.trim().is_empty() {
            return Err(Error::validation_with_context(
                "No text to speak",
                ErrorContext::new().with_field_path("text").with_source("tts"),
            ));
        }
        let parts = text::tokenize(text);
        if parts.is_empty() {
            return Err(Error::validation_with_context(
                "No text to speak after cleaning",
                ErrorContext::new()
                    .with_field_path("text")
                    .with_details("text holds only punctuation and whitespace")
                    .with_source("tts"),
            ));
        }

        parts
            .iter()
            .map(|part| rpc::encode_request(part, &lang, options.speed()))
            .collect()
    }

    /// Request every part and yield its decoded audio, in text order.
    ///
    /// Validation happens before the stream is returned; provider failures surface as stream items.
    pub fn stream(&self, text: &str, options: &TtsOptions) -> Result<BoxStream<'_, Bytes>> {
        let endpoint = self.endpoint(&options.tld)?;
        let bodies = self.prepare(text, options)?;
        let total = bodies.len();
        let options = options.clone();

        let parts = futures::stream::iter(bodies.into_iter().enumerate()).then(move |(index, body)| {
            let endpoint = endpoint.clone();
            let options = options.clone();
            async move {
                self.send_part(&endpoint, index, total, body, &options)
                    .await
            }
        });
        Ok(Box::pin(parts))
    }

    /// Synthesize `text` into a single MP3 buffer.
    pub async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioOutput> {
        let mut parts = self.stream(text, options)?;
        let mut data = BytesMut::new();
        let mut count = 0;
        while let Some(part) = parts.try_next().await? {
            data.extend_from_slice(&part);
            count += 1;
        }

        info!(
            parts = count,
            bytes = data.len(),
            lang = %options.lang,
            tld = %options.tld,
            "synthesized speech"
        );
        Ok(AudioOutput {
            data: data.freeze(),
            parts: count,
        })
    }

    async fn send_part(
        &self,
        endpoint: &str,
        index: usize,
        total: usize,
        body: String,
        options: &TtsOptions,
    ) -> Result<Bytes> {
        debug!(part = index + 1, total, endpoint, "requesting speech part");

        let response = self
            .transport
            .post_form(endpoint, body)
            .await
            .map_err(|e| connect_failure(&options.tld, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            return Err(remote_failure(status, options));
        }
        match rpc::decode_response(&body)? {
            Some(audio) => {
                debug!(part = index + 1, total, bytes = audio.len(), "received speech part");
                Ok(audio)
            }
            None => Err(remote_failure(status, options)),
        }
    }
}

fn request_lang(options: &TtsOptions) -> Result<String> {
    if options.lang_check {
        Ok(lang::resolve(&options.lang)?.code.to_string())
    } else {
        Ok(options.lang.clone())
    }
}

/// `https://translate.google.{tld}/`, once `tld` is known to be a well-formed domain suffix.
pub fn provider_host(tld: &str) -> Result<Url> {
    let well_formed = !tld.is_empty()
        && tld.split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    let invalid = || {
        Error::configuration_with_context(
            format!("Invalid tld '{}'", tld),
            ErrorContext::new()
                .with_field_path("options.tld")
                .with_source("tts"),
        )
    };
    if !well_formed {
        return Err(invalid());
    }
    Url::parse(&format!("https://translate.google.{}/", tld)).map_err(|_| invalid())
}

fn connect_failure(tld: &str, source: reqwest::Error) -> Error {
    let cause = if tld == "com" {
        "Unknown".to_string()
    } else {
        match provider_host(tld) {
            Ok(host) => format!("Host '{}' is not reachable", host),
            Err(_) => "Unknown".to_string(),
        }
    };
    Error::Transport(TransportError::Connect {
        message: format!("Failed to connect. Probable cause: {}", cause),
        source,
    })
}

fn remote_failure(status: StatusCode, options: &TtsOptions) -> Error {
    let code = status.as_u16();
    let cause = match code {
        403 => "Bad token or upstream API changes".to_string(),
        404 if options.tld != "com" => format!("Unsupported tld '{}'", options.tld),
        200 if !options.lang_check => format!(
            "No audio stream in response. Unsupported language '{}'",
            options.lang
        ),
        c if c >= 500 => "Upstream API error. Try again later.".to_string(),
        _ => "Unknown".to_string(),
    };
    Error::Remote {
        status: code,
        message: format!(
            "{} ({}) from TTS API. Probable cause: {}",
            code,
            status.canonical_reason().unwrap_or("Unknown"),
            cause
        ),
    }
}

pub struct TtsClientBuilder {
    base_url: Option<String>,
    config: TransportConfig,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            config: TransportConfig::default(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            base_url: None,
            config: TransportConfig::from_env(),
        }
    }

    /// Send requests to `url` instead of `https://translate.google.{tld}`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let base_url = self
            .base_url
            .map(|url| {
                Url::parse(&url).map_err(|e| {
                    Error::configuration_with_context(
                        format!("Invalid base URL: {}", e),
                        ErrorContext::new()
                            .with_field_path("base_url")
                            .with_details(url.clone()),
                    )
                })
            })
            .transpose()?;
        let transport = HttpTransport::new(&self.config)?;
        Ok(TtsClient {
            transport,
            base_url,
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
