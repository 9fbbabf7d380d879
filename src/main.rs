#![recursion_limit = "256"]

mod config;
mod error;
mod model;
mod provider;
mod routes;
mod sampler;
mod services;
mod state;
mod tier;
mod views;

use std::sync::Arc;

use sampler::{Sampler, SeededSampler, ThreadRngSampler};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();

    let sampler: Arc<dyn Sampler> = match config.mock_seed {
        Some(seed) => {
            tracing::info!(seed, "mock data seeded");
            Arc::new(SeededSampler::new(seed))
        }
        None => Arc::new(ThreadRngSampler),
    };

    let provider = match provider::from_env() {
        Ok(provider) => {
            tracing::info!(provider = provider.name(), "seo data provider connected");
            Some(provider)
        }
        Err(e) => {
            tracing::warn!(error = %e, "seo data provider disabled");
            None
        }
    };

    let state = state::AppState::new(sampler, provider, config.delays);
    let app = routes::app(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dealerseo listening");
    axum::serve(listener, app).await.expect("server failed");
}
