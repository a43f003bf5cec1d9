use crate::Result;
use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::Proxy;
use std::env;
use std::time::Duration;

/// Browser user agent the provider expects on form posts.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
const PROVIDER_REFERER: &str = "http://translate.google.com/";

/// Transport knobs. Every field has a default and can be overridden from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub proxy_url: Option<String>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            proxy_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TransportConfig {
    /// Read `SPEAK_HTTP_TIMEOUT_SECS` and `SPEAK_PROXY_URL`, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout = lookup("SPEAK_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let proxy_url = lookup("SPEAK_PROXY_URL").filter(|s| !s.trim().is_empty());
        Self {
            timeout,
            proxy_url,
            user_agent: defaults.user_agent,
        }
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    crate::ErrorContext::new()
                        .with_field_path("SPEAK_PROXY_URL")
                        .with_details(proxy_url.clone()),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// POST a form-encoded body with the headers the provider checks.
    ///
    /// Only failures to obtain a response are errors here; status handling is the caller's.
    pub async fn post_form(
        &self,
        url: &str,
        body: String,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(url)
            .header(REFERER, PROVIDER_REFERER)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{message}")]
    Connect {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
