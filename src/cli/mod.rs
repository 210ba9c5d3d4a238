mod args;
mod command;
mod quote_cmd;

pub use args::Cli;
pub use command::Command;
pub use quote_cmd::QuoteCmd;

pub use args::parse;
