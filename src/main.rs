//! KV Memory Graph - Binary Entry Point

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kv_memory_graph::api::{create_router, AppState};
use kv_memory_graph::config::{Backend, Config};
use kv_memory_graph::KnowledgeGraphManager;

type MainResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> MainResult<()> {
    init_logging();

    let config = Config::from_env();
    if config.backend == Backend::Memory {
        warn!("no KV_REST_API_URL/KV_REST_API_TOKEN or MEMORY_FILE_PATH set, graph is kept in memory only");
    }

    let store = config.build_store();
    info!(
        backend = store.kind(),
        key = %config.graph_key,
        version = kv_memory_graph::VERSION,
        "starting knowledge graph server"
    );

    let kb = Arc::new(KnowledgeGraphManager::with_key(store, config.graph_key.clone()));
    let app = create_router(AppState::new(kb));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
