use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::client::client::ArtifactHubClient;
use crate::client::urls::Urls;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct ArtifactHubClientBuilder {
    pub headers: Option<HeaderMap>,
    pub urls: Option<Urls>,
    pub timeout: Option<Duration>,
}

impl ArtifactHubClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: None,
            urls: None,
            timeout: None,
        }
    }

    /// Add default HTTP headers for the client to use in all requests.
    ///
    /// Authorization is per package and is added by the client at request time.
    pub fn set_http_headers(mut self) -> Result<Self> {
        debug!("Constructing HTTP headers");
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            format!("artifacthub-resource/{}", env!("CARGO_PKG_VERSION")).parse()?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        self.headers = Some(headers);
        Ok(self)
    }

    /// Attach a urls utility struct.
    pub fn generate_urls(mut self, base_url: &Url) -> Result<Self> {
        debug!("Constructing urls for {base_url}");
        self.urls = Some(Urls::from_base_url(base_url)?);
        Ok(self)
    }

    /// Overall deadline for a single request, from connect until the body is read.
    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ArtifactHubClient> {
        let (Some(headers), Some(urls)) = (self.headers, self.urls) else {
            return Err(eyre!("All required fields are not set"));
        };
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http = Client::builder().timeout(timeout).build()?;

        Ok(ArtifactHubClient {
            headers,
            urls,
            timeout,
            http,
        })
    }
}

impl Default for ArtifactHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
