use std::io::{Read, Write};

use color_eyre::eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{debug, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::args::Config;
use crate::client::{ArtifactHubClient, ArtifactHubClientBuilder};

pub mod args;
pub mod models;

/// Set up logging. Everything goes to stderr, since stdout carries the response.
///
/// `RUST_LOG` directives take precedence over `level`.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(filter)
        .init();
    debug!("Logging initialized");
}

pub fn read_request<T: DeserializeOwned>(reader: impl Read) -> Result<T> {
    serde_json::from_reader(reader).wrap_err("failed to unmarshal request")
}

pub fn write_response<T: Serialize>(mut writer: impl Write, response: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, response).wrap_err("failed to marshal response")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Build a registry client from the shared configuration.
pub fn build_client(config: &Config) -> Result<ArtifactHubClient> {
    ArtifactHubClientBuilder::new()
        .generate_urls(&config.base_url)?
        .set_http_headers()?
        .set_timeout(*config.timeout)
        .build()
        .wrap_err("failed to build artifacthub client")
}
