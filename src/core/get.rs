use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::client::models::HelmPackage;
use crate::client::{ArtifactHub, Package};
use crate::core::models::{MetadataPair, Version};
use crate::error::ResourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub version: Version,
    pub metadata: Vec<MetadataPair>,
}

/// Derive the metadata reported for a package version, in reporting order.
pub fn build_metadata(helm_package: &HelmPackage) -> Vec<MetadataPair> {
    let repository = &helm_package.repository;

    let mut metadata = vec![
        MetadataPair::new("app_version", helm_package.app_version.clone().unwrap_or_default()),
        MetadataPair::new("charts_url", &repository.url),
        MetadataPair::new("chart_download_url", &helm_package.content_url),
        MetadataPair::new("name", &helm_package.name),
        MetadataPair::new(
            "organization_name",
            repository.organization_display_name.clone().unwrap_or_default(),
        ),
    ];

    // Older registry versions only expose the display name
    match &repository.name {
        Some(name) => {
            metadata.push(MetadataPair::new("repository_name", name));
            metadata.push(MetadataPair::new("repository_display_name", &repository.display_name));
        }
        None => metadata.push(MetadataPair::new("repository_name", &repository.display_name)),
    }

    metadata.push(MetadataPair::new("version", &helm_package.version));
    metadata
}

/// Write every metadata entry to `destination/<name>`, creating the directory if needed.
///
/// Writes are sequential, so a failure part way through leaves the entries before it in place.
pub fn write_metadata(destination: &Path, metadata: &[MetadataPair]) -> Result<(), ResourceError> {
    fs::create_dir_all(destination).map_err(|source| ResourceError::Io {
        target: destination.display().to_string(),
        source,
    })?;

    for pair in metadata {
        debug!("Writing {}", pair.name);
        fs::write(destination.join(&pair.name), pair.value.as_bytes()).map_err(|source| ResourceError::Io {
            target: pair.name.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Fetch one version of a package and persist its metadata under `destination`.
///
/// The returned version pairs the requested version string with the registry's publish timestamp.
pub async fn get(
    package: &Package,
    version: &str,
    destination: &Path,
    registry: &dyn ArtifactHub,
) -> Result<Fetched, ResourceError> {
    package.validate()?;

    let helm_package = registry.fetch_package_version(package, version).await?;
    let metadata = build_metadata(&helm_package);

    write_metadata(destination, &metadata)?;
    info!(
        "Wrote {} metadata file(s) for {} {version} to {}",
        metadata.len(),
        helm_package.name,
        destination.display()
    );

    Ok(Fetched {
        version: Version {
            created_at: helm_package.ts.into_inner(),
            version: version.to_string(),
        },
        metadata,
    })
}
