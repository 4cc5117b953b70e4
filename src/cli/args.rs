use std::path::PathBuf;

use clap::{Args, Parser};
use humantime::Duration;
use tracing::Level;
use url::Url;

use crate::client::urls::DEFAULT_BASE_URL;

/// Settings shared by every command. The API key is not one of them: it only ever
/// arrives in the request body.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Base URL of the Artifact Hub instance to query
    #[arg(long, env = "ARTIFACTHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Overall deadline for the registry request
    #[arg(long, env = "ARTIFACTHUB_TIMEOUT", default_value = "10s")]
    pub timeout: Duration,

    /// The log level to use for the tracing subscriber
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,
}

/// List the versions of a Helm chart. Reads the request from stdin.
#[derive(Debug, Parser)]
#[clap(version, about, long_about = None)]
pub struct CheckInput {
    #[command(flatten)]
    pub config: Config,
}

/// Fetch the metadata of one Helm chart version into a directory. Reads the request from stdin.
#[derive(Debug, Parser)]
#[clap(version, about, long_about = None)]
pub struct InInput {
    /// Directory the metadata files are written to
    pub destination: PathBuf,

    #[command(flatten)]
    pub config: Config,
}
