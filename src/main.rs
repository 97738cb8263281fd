use crate::assistant::{Assistant, GeminiClient};
use crate::config::Config;
use crate::db::ListingStore;
use crate::estimator::PriceEstimator;
use crate::router::respond;
use crate::state::AppState;
use anyhow::Context;
use astra::Server;
use std::fs;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod assistant;
mod config;
mod db;
mod domain;
mod errors;
mod estimator;
mod forms;
mod handlers;
mod responses;
mod router;
mod search;
mod state;
mod templates;
mod upload;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    for dir in [&config.static_dir, &config.upload_dir] {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let store = ListingStore::new(&config.data_path);
    let listings = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "listing store unreadable; price model starts untrained");
        Vec::new()
    });
    info!(count = listings.len(), path = %config.data_path.display(), "listing store ready");

    let estimator = PriceEstimator::load_or_train(&config.model_path, &listings);

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; the chat assistant will answer with an apology");
    }
    let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
        .context("building chat client")?;

    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    let state = AppState {
        config,
        store,
        estimator,
        assistant: Assistant::new(Box::new(gemini)),
    };

    info!(%addr, max_workers, "Starting server at http://{addr}");

    Server::bind(&addr)
        .max_workers(max_workers)
        .serve(move |req, _info| respond(req, &state))
        .context("server ended with error")?;

    Ok(())
}
