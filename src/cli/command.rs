use clap::Subcommand;

use crate::cli::quote_cmd::QuoteCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Query the quote catalog",
        long_about = "Run catalog queries locally, without starting the HTTP API: list and filter, look up by id, draw random quotes, or summarize categories."
    )]
    Quote {
        #[command(subcommand)]
        cmd: QuoteCmd,
    },
}
