use tracing::{debug, info};

use crate::client::{ArtifactHub, Package};
use crate::core::models::Version;
use crate::core::ordering::{order_versions, Diagnostics};
use crate::error::ResourceError;

/// List every available version of a package in ascending semver order.
pub async fn list_versions(
    registry: &dyn ArtifactHub,
    package: &Package,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<Version>, ResourceError> {
    let helm_package = registry.fetch_package(package).await?;
    debug!(
        "Registry reported {} version(s) for {}",
        helm_package.available_versions.len(),
        helm_package.name
    );
    Ok(order_versions(
        &helm_package.name,
        helm_package.available_versions,
        diagnostics,
    ))
}

/// Validate the source, then list its versions.
///
/// An empty listing is a valid result.
pub async fn check(
    package: &Package,
    registry: &dyn ArtifactHub,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<Version>, ResourceError> {
    package.validate()?;

    let versions = list_versions(registry, package, diagnostics).await?;
    info!(
        "Found {} version(s) of {}/{}",
        versions.len(),
        package.repository_name,
        package.package_name
    );
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use reqwest::StatusCode;

    use super::*;
    use crate::client::models::{AvailableVersion, Epoch, HelmPackage, Repository};
    use crate::client::MockArtifactHub;
    use crate::core::ordering::OrderingWarning;

    fn helm_package(versions: &[(&str, i64)]) -> HelmPackage {
        HelmPackage {
            name: "some-package".to_string(),
            version: "9.2.4".to_string(),
            app_version: None,
            content_url: String::new(),
            ts: Epoch::from_timestamp(0).unwrap(),
            available_versions: versions
                .iter()
                .map(|(version, ts)| AvailableVersion {
                    version: version.to_string(),
                    ts: Epoch::from_timestamp(*ts).unwrap(),
                })
                .collect(),
            repository: Repository {
                url: String::new(),
                display_name: String::new(),
                organization_display_name: None,
                name: None,
            },
        }
    }

    #[tokio::test]
    async fn check_rejects_missing_names_without_calling_registry() {
        for (repository_name, package_name, api_key) in [
            ("", "", ""),
            ("acme-charts", "", ""),
            ("", "my-package-name", ""),
            ("", "my-package-name", "some-fake-api-key"),
        ] {
            let mut registry = MockArtifactHub::new();
            registry.expect_fetch_package().never();

            let package = Package::new(repository_name, package_name).with_api_key(api_key);
            let result = check(&package, &registry, &mut Vec::<OrderingWarning>::new()).await;

            assert!(matches!(result, Err(ResourceError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn check_calls_registry_with_expected_package() {
        let mut registry = MockArtifactHub::new();
        registry
            .expect_fetch_package()
            .with(eq(Package::new("acme-charts", "my-package-name").with_api_key("some-fake-api-key")))
            .times(1)
            .returning(|_| Ok(helm_package(&[("9.2.4", 1606316622)])));

        let package = Package::new("acme-charts", "my-package-name").with_api_key("some-fake-api-key");
        let versions = check(&package, &registry, &mut Vec::<OrderingWarning>::new()).await.unwrap();

        assert_eq!(versions.len(), 1);
    }

    #[tokio::test]
    async fn check_does_not_require_api_key() {
        let mut registry = MockArtifactHub::new();
        registry
            .expect_fetch_package()
            .withf(|package| package.api_key.is_none())
            .times(1)
            .returning(|_| Ok(helm_package(&[])));

        let package = Package::new("acme-charts", "my-package-name").with_api_key("");
        let versions = check(&package, &registry, &mut Vec::<OrderingWarning>::new()).await.unwrap();

        assert!(versions.is_empty());
    }

    #[tokio::test]
    async fn check_returns_versions_in_semver_order() {
        let mut registry = MockArtifactHub::new();
        registry
            .expect_fetch_package()
            .returning(|_| Ok(helm_package(&[("9.2.4", 1606316622), ("9.2.0", 1605806528), ("9.1.5", 1)])));

        let package = Package::new("acme-charts", "some-package");
        let versions = check(&package, &registry, &mut Vec::<OrderingWarning>::new()).await.unwrap();

        assert_eq!(
            versions.iter().map(|v| v.version.as_str()).collect::<Vec<_>>(),
            vec!["9.1.5", "9.2.0", "9.2.4"]
        );
        assert_eq!(
            serde_json::to_string(&versions[1]).unwrap(),
            r#"{"created_at":"2020-11-19T17:22:08Z","version":"9.2.0"}"#
        );
        assert_eq!(
            serde_json::to_string(&versions[2]).unwrap(),
            r#"{"created_at":"2020-11-25T15:03:42Z","version":"9.2.4"}"#
        );
    }

    #[tokio::test]
    async fn check_reports_unparsable_versions() {
        let mut registry = MockArtifactHub::new();
        registry
            .expect_fetch_package()
            .returning(|_| Ok(helm_package(&[("1.0.0", 1), ("nightly", 2)])));

        let mut warnings: Vec<OrderingWarning> = Vec::new();
        let versions = check(&Package::new("acme-charts", "some-package"), &registry, &mut warnings)
            .await
            .unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].version, "nightly");
    }

    #[tokio::test]
    async fn check_propagates_registry_errors() {
        let mut registry = MockArtifactHub::new();
        registry.expect_fetch_package().returning(|_| {
            Err(ResourceError::HttpStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://registry.local".to_string(),
            })
        });

        let package = Package::new("acme-charts", "some-package");
        let result = check(&package, &registry, &mut Vec::<OrderingWarning>::new()).await;

        assert_eq!(result.unwrap_err().status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
