use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Request};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::client::models::HelmPackage;
use crate::client::urls::Urls;
use crate::error::ResourceError;

/// Identifies a Helm package on Artifact Hub.
#[derive(Debug)]
pub struct Package {
    pub repository_name: String,
    pub package_name: String,
    pub api_key: Option<SecretString>,
}

impl Package {
    pub fn new(repository_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            package_name: package_name.into(),
            api_key: None,
        }
    }

    /// Empty keys are treated as absent.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.is_empty() {
            None
        } else {
            Some(SecretString::from(api_key))
        };
        self
    }

    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.package_name.is_empty() || self.repository_name.is_empty() {
            return Err(ResourceError::Validation(format!(
                "package name: '{}' or repository name: '{}' should not be empty",
                self.package_name, self.repository_name
            )));
        }
        Ok(())
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.repository_name == other.repository_name
            && self.package_name == other.package_name
            && self.api_key.as_ref().map(|key| key.expose_secret())
                == other.api_key.as_ref().map(|key| key.expose_secret())
    }
}

/// The registry operations the resource needs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtifactHub: Send + Sync {
    /// Fetch the package record, including every available version.
    async fn fetch_package(&self, package: &Package) -> Result<HelmPackage, ResourceError>;

    /// Fetch the package record of one specific version.
    async fn fetch_package_version(&self, package: &Package, version: &str) -> Result<HelmPackage, ResourceError>;
}

#[derive(Debug)]
pub struct ArtifactHubClient {
    pub(crate) headers: HeaderMap,
    pub urls: Urls,
    pub(crate) timeout: Duration,
    pub(crate) http: Client,
}

impl ArtifactHubClient {
    /// The client's shared headers plus the package's bearer token, if it has one.
    fn headers_for(&self, package: &Package) -> Result<HeaderMap, ResourceError> {
        let mut headers = self.headers.clone();
        if let Some(api_key) = &package.api_key {
            let mut value = format!("Bearer {}", api_key.expose_secret())
                .parse::<reqwest::header::HeaderValue>()
                .map_err(|e| ResourceError::Validation(format!("api key is not a valid header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, headers: HeaderMap) -> Result<T, ResourceError> {
        debug!("Fetching data from {url}");

        let mut request = Request::new(Method::GET, url.clone());
        *request.headers_mut() = headers;
        *request.timeout_mut() = Some(self.timeout);

        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let raw_json = response.text().await?;
        debug!(bytes = raw_json.len(), "Received response with status {status}");

        serde_json::from_str(&raw_json).map_err(|source| ResourceError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ArtifactHub for ArtifactHubClient {
    async fn fetch_package(&self, package: &Package) -> Result<HelmPackage, ResourceError> {
        let url = self
            .urls
            .package_url(&package.repository_name, &package.package_name)
            .map_err(|e| ResourceError::Validation(e.to_string()))?;
        self.get(url, self.headers_for(package)?).await
    }

    async fn fetch_package_version(&self, package: &Package, version: &str) -> Result<HelmPackage, ResourceError> {
        let url = self
            .urls
            .package_version_url(&package.repository_name, &package.package_name, version)
            .map_err(|e| ResourceError::Validation(e.to_string()))?;
        self.get(url, self.headers_for(package)?).await
    }
}
