mod wiring;

use crate::{cli, context, rest, store::QuoteStore};
use anyhow::{Context as AnyhowContext, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub store: Arc<QuoteStore>,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.log_file.as_deref()).context("initializing logging")?;
        log::info!("🚀 Starting quotebook");
        log::info!("📂 Catalog source: {}", ctx.catalog);

        let store = wiring::init_store(&ctx)?;
        log::info!(
            "📚 Loaded {} quotes in {} categories",
            store.len(),
            store.list_categories().len()
        );
        if store.is_empty() {
            log::warn!("⚠️ Catalog is empty; random quote requests will fail");
        }

        Ok((Self { ctx, store }, cli))
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    log::info!("🌐 REST API: http://{}", app.ctx.api_listen);
    if let Some(limit) = app.ctx.default_limit {
        log::info!("🧮 Default limit: {}", limit);
    }
    if let Some(path) = app.ctx.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.to_string_lossy());
    }

    let shutdown = CancellationToken::new();

    let addr = app.ctx.api_listen;
    let state = rest::AppState::new(app.store.clone(), app.ctx.default_limit);
    let rest_shutdown = shutdown.clone();

    let mut rest_handle = tokio::spawn(async move {
        if let Err(e) = rest::serve(addr, state, rest_shutdown).await {
            log::error!("REST server failed: {:#}", e);
        }
    });

    wait_for_shutdown(&shutdown, &mut rest_handle, tokio::signal::ctrl_c()).await
}

async fn wait_for_shutdown<F>(
    shutdown: &CancellationToken,
    rest_task: &mut JoinHandle<()>,
    signal: F,
) -> Result<()>
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        _ = signal => log::info!("🧨 Ctrl-C received, shutting down"),
        _ = &mut *rest_task => log::error!("REST task exited unexpectedly"),
    }

    shutdown.cancel();

    // A JoinHandle that already completed inside select! must not be polled again.
    if !rest_task.is_finished() {
        rest_task.await.context("joining REST task")?;
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        return cmd.run(&app.ctx, &app.store);
    }

    run_daemon(app).await
}
