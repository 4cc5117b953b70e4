use color_eyre::Result;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://artifacthub.io";

#[derive(Debug, Clone)]
pub struct Urls {
    pub helm_packages_base: Url,
}

impl Urls {
    pub fn from_base_url(base_url: &Url) -> Result<Self> {
        let base = base_url.as_str().trim_end_matches('/');
        Ok(Self {
            helm_packages_base: Url::parse(&format!("{base}/api/v1/packages/helm"))?,
        })
    }

    pub fn package_url(&self, repository_name: &str, package_name: &str) -> Result<Url> {
        let encoded_repository_name = Self::percent_encode(repository_name);
        let encoded_package_name = Self::percent_encode(package_name);
        Ok(Url::parse(
            &(self.helm_packages_base.to_string() + &format!("/{encoded_repository_name}/{encoded_package_name}")),
        )?)
    }

    pub fn package_version_url(&self, repository_name: &str, package_name: &str, version: &str) -> Result<Url> {
        let encoded_version = Self::percent_encode(version);
        Ok(Url::parse(
            &(self.package_url(repository_name, package_name)?.to_string() + &format!("/{encoded_version}")),
        )?)
    }

    /// Percent-encodes a single path segment, since chart and version names come straight from user input.
    pub fn percent_encode(n: &str) -> String {
        urlencoding::encode(n).to_string()
    }
}

impl Default for Urls {
    fn default() -> Self {
        Self {
            helm_packages_base: Url::parse(&format!("{DEFAULT_BASE_URL}/api/v1/packages/helm"))
                .expect("Failed to parse URL"),
        }
    }
}
