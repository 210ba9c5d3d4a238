use crate::cli::Command;
use crate::context;
use crate::store::QuoteStore;

pub mod quote;

pub trait CommandRunner {
    fn run(&self, ctx: &context::Context, store: &QuoteStore) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, ctx: &context::Context, store: &QuoteStore) -> anyhow::Result<()> {
        match self {
            Command::Quote { cmd } => cmd.run(ctx, store),
        }
    }
}
