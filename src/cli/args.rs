use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve and browse an immutable quote catalog",
    long_about = "Loads a quote catalog once at startup and answers queries over it, either as a JSON HTTP API (the default when no subcommand is given) or directly from the command line.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "QUOTES_CATALOG",
        value_name = "PATH",
        help = "JSON catalog file, either a flat array or an object keyed by category (embedded catalog when omitted)"
    )]
    pub catalog: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Use the embedded catalog if the catalog file cannot be loaded"
    )]
    pub fallback_to_embedded: bool,

    #[arg(
        long,
        env = "QUOTES_SEED",
        value_name = "SEED",
        help = "Seed the random generator so command output is reproducible"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "QUOTES_DEFAULT_LIMIT",
        value_name = "N",
        help = "Truncate unfiltered listings to N quotes unless a limit is given"
    )]
    pub default_limit: Option<usize>,

    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Print command results as JSON"
    )]
    pub json: bool,

    #[arg(
        long = "log-file",
        env = "QUOTES_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "api-listen",
        env = "QUOTES_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();
    Cli::parse()
}
