use serde::{Deserialize, Serialize};

use crate::client::Package;
use crate::core::{Fetched, MetadataPair, Version};

/// The `source` block of a resource definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
    #[serde(default)]
    pub repository_name: String,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub api_key: String,
}

impl Source {
    pub fn package(&self) -> Package {
        Package::new(&self.repository_name, &self.package_name).with_api_key(&self.api_key)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckRequest {
    pub source: Source,
    /// The last version seen. Absent on the first check.
    #[serde(default)]
    pub version: Option<Version>,
}

pub type CheckResponse = Vec<Version>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InRequest {
    pub source: Source,
    pub version: Version,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InResponse {
    pub version: Version,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataPair>,
}

impl From<Fetched> for InResponse {
    fn from(fetched: Fetched) -> Self {
        Self {
            version: fetched.version,
            metadata: fetched.metadata,
        }
    }
}
