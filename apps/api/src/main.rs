mod config;
mod corpus;
mod embedding;
mod errors;
mod extract;
mod matcher;
mod routes;
mod state;
mod text;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::JobCorpus;
use crate::embedding::{EmbeddingEngine, MiniLmEngine};
use crate::matcher::Matcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher API v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "failed to create upload directory {}",
            config.upload_dir.display()
        )
    })?;

    let corpus = Arc::new(JobCorpus::load(&config.jobs_path)?);
    if corpus.is_empty() {
        warn!("Job corpus is empty; every request will return zero matches");
    }
    info!("Job corpus loaded ({} postings)", corpus.len());

    info!("Loading embedding model...");
    let engine: Arc<dyn EmbeddingEngine> = Arc::new(MiniLmEngine::new()?);
    info!(
        "Embedding model loaded ({}, {} dims)",
        engine.model_name(),
        engine.dimension()
    );

    // Corpus descriptions are embedded once here; requests only encode the
    // incoming résumé.
    let matcher = Arc::new(Matcher::new(&corpus, engine)?);
    info!("Corpus embeddings precomputed");

    let state = AppState {
        config: config.clone(),
        corpus,
        matcher,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
