use anyhow::{Context, Result};
use til_snippets::config::{self, SortableConfig};
use til_snippets::reorder::{AppState, MovieList, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SortableConfig::from_env()?;
    let app = create_router(AppState::new(MovieList::sample()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    log::info!("Starting sortable movies app...");
    log::info!("Open http://{} in your browser", listener.local_addr()?);
    log::info!("Drag and drop movies to reorder them!");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
            log::info!("shutting down");
        })
        .await?;
    Ok(())
}
