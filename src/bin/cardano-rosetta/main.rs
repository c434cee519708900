use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rosetta_core::config::RootConfig;

mod common;
mod daemon;
mod query;

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the server until an exit signal arrives
    Daemon(daemon::Args),

    /// Execute a single request in-process and print the response
    Query(query::Args),
}

#[derive(Debug, Parser)]
#[clap(name = "Cardano Rosetta")]
#[clap(bin_name = "cardano-rosetta")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

pub type Config = RootConfig;

fn builder(
    explicit_file: &Option<std::path::PathBuf>,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    let mut s = config::Config::builder();

    // our base config will always be in /etc/cardano-rosetta
    s = s.add_source(config::File::with_name("/etc/cardano-rosetta/config.toml").required(false));

    // but we can override it by having a file in the working dir
    s = s.add_source(config::File::with_name("cardano-rosetta.toml").required(false));

    // if an explicit file was passed, then we load it as mandatory
    if let Some(explicit) = explicit_file.as_ref().and_then(|x| x.to_str()) {
        s = s.add_source(config::File::with_name(explicit).required(true));
    }

    s
}

fn with_env_overrides(
    s: config::ConfigBuilder<config::builder::DefaultState>,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    // env vars make the last-step overrides, e.g. ROSETTA_DATABASE__CONNECTION_STRING
    s.add_source(
        config::Environment::with_prefix("ROSETTA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}

pub fn load_config(
    explicit_file: &Option<std::path::PathBuf>,
) -> Result<Config, config::ConfigError> {
    with_env_overrides(builder(explicit_file))
        .build()?
        .try_deserialize()
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = load_config(&args.config).into_diagnostic()?;

    match args.command {
        Command::Daemon(x) => daemon::run(config, &x)?,
        Command::Query(x) => query::run(config, &x)?,
    };

    Ok(())
}
