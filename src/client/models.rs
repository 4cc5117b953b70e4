use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A registry timestamp, sent by Artifact Hub as integer seconds since the Unix epoch.
///
/// Only decoded. Emitted timestamps go through [`crate::core::Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(pub DateTime<Utc>);

impl Epoch {
    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Epoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Self::from_timestamp(seconds)
            .ok_or_else(|| D::Error::custom(format!("timestamp {seconds} is out of range")))
    }
}

/// One entry of a package's `available_versions` list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AvailableVersion {
    pub version: String,
    #[serde(rename = "ts", alias = "created_at")]
    pub ts: Epoch,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Repository {
    pub url: String,
    pub display_name: String,
    #[serde(default)]
    pub organization_display_name: Option<String>,
    /// Stable repository identifier. Older registry versions do not send it.
    #[serde(default)]
    pub name: Option<String>,
}

/// A Helm package as returned by `/api/v1/packages/helm/{repository}/{package}[/{version}]`.
///
/// Without a version suffix the registry answers with its latest version; either way the
/// record carries the full `available_versions` list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HelmPackage {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub content_url: String,
    #[serde(rename = "ts", alias = "created_at")]
    pub ts: Epoch,
    #[serde(default)]
    pub available_versions: Vec<AvailableVersion>,
    pub repository: Repository,
}
