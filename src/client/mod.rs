pub mod builder;
#[allow(clippy::module_inception)]
pub mod client;
pub mod models;
pub mod urls;

pub use builder::ArtifactHubClientBuilder;
pub use client::{ArtifactHub, ArtifactHubClient, Package};
pub use urls::Urls;
#[cfg(test)]
pub use client::MockArtifactHub;
