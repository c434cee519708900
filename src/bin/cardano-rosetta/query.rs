use axum::body::Body;
use axum::http::{Method, Request, Uri};
use http_body_util::BodyExt;
use miette::{Context, IntoDiagnostic};
use rosetta_core::Database as _;
use std::io::Write;
use tower::ServiceExt;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Endpoint path, such as /network/list
    #[arg(value_name = "PATH")]
    path: String,

    /// JSON request body
    #[arg(long, default_value = "{}")]
    body: String,
}

#[tokio::main]
pub async fn run(config: super::Config, args: &Args) -> miette::Result<()> {
    let rosetta = config
        .serve
        .rosetta
        .as_ref()
        .ok_or(miette::miette!("missing rosetta config"))?;

    let domain = crate::common::setup_domain(&config)?;

    let path = if args.path.starts_with('/') {
        args.path.trim().to_string()
    } else {
        format!("/{}", args.path.trim())
    };

    let uri: Uri = path
        .parse()
        .into_diagnostic()
        .context("invalid rosetta path")?;

    let app = rosetta_api::build_app(rosetta.clone(), domain.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(args.body.clone()))
        .into_diagnostic()
        .context("building rosetta request")?;

    let response = app
        .oneshot(request)
        .await
        .into_diagnostic()
        .context("executing rosetta query")?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .into_diagnostic()
        .context("reading rosetta response body")?
        .to_bytes();

    domain
        .database
        .close()
        .await
        .into_diagnostic()
        .context("closing database")?;

    if status.is_success() {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(&body)
            .and_then(|_| stdout.write_all(b"\n"))
            .into_diagnostic()
            .context("writing rosetta response")?;
        Ok(())
    } else {
        let message = String::from_utf8_lossy(&body);
        Err(miette::miette!(
            "rosetta query failed with status {}: {}",
            status,
            message
        ))
    }
}
