mod app;
mod catalog;
mod cli;
mod commands;
mod context;
mod rest;
mod store;
mod tracing;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
