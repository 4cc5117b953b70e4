use std::io;

use artifacthub_resource::cli::args::InInput;
use artifacthub_resource::cli::models::{InRequest, InResponse};
use artifacthub_resource::cli::{build_client, init_logging, read_request, write_response};
use artifacthub_resource::core::get;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let input = InInput::parse();
    init_logging(input.config.log_level);

    let request: InRequest = read_request(io::stdin().lock())?;

    let package = request.source.package();
    let client = build_client(&input.config)?;

    let fetched = get(&package, &request.version.version, &input.destination, &client)
        .await
        .wrap_err("get failed")?;

    write_response(io::stdout().lock(), &InResponse::from(fetched))
}
