use std::io;

use artifacthub_resource::cli::args::CheckInput;
use artifacthub_resource::cli::models::{CheckRequest, CheckResponse};
use artifacthub_resource::cli::{build_client, init_logging, read_request, write_response};
use artifacthub_resource::core::{check, LogDiagnostics};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let input = CheckInput::parse();
    init_logging(input.config.log_level);

    let request: CheckRequest = read_request(io::stdin().lock())?;
    if let Some(previous) = &request.version {
        debug!("Previous version was {}", previous.version);
    }

    let package = request.source.package();
    let client = build_client(&input.config)?;

    let response: CheckResponse = check(&package, &client, &mut LogDiagnostics)
        .await
        .wrap_err("resource check failed")?;

    write_response(io::stdout().lock(), &response)
}
