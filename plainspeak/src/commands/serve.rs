//! HTTP adapter exposing the simplification engine.
//!
//! A deliberately small surface: one POST endpoint mapping 1:1 to
//! `Simplifier::simplify`, plus a health endpoint reporting the loaded rule
//! counts. The engine is shared read-only behind an `Arc`, so concurrent
//! requests need no locking.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use plainspeak_core::engine::Simplifier;
use plainspeak_core::RuleEngine;

/// Request body for `POST /simplify-text`.
#[derive(Debug, Deserialize)]
pub struct SimplifyRequest {
    pub text: String,
}

/// Response body for `POST /simplify-text`.
#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub simplified_text: String,
}

/// Build the axum Router with all endpoints.
pub fn router(engine: Arc<RuleEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/simplify-text", post(simplify_text))
        .layer(cors)
        .with_state(engine)
}

/// Start the HTTP server on the given port.
pub async fn start(port: u16, engine: Arc<RuleEngine>) -> Result<()> {
    let app = router(engine);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Simplification API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(engine): State<Arc<RuleEngine>>) -> Json<Value> {
    let config = engine.config();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "rules": {
            "jargon": config.jargon_map.len(),
            "tone": config.tone_map.len(),
            "patterns": config.patterns.len(),
            "kyc_documents": config.kyc_documents.len(),
        },
        "sentence_length_limit": config.sentence_length_limit,
    }))
}

async fn simplify_text(
    State(engine): State<Arc<RuleEngine>>,
    Json(request): Json<SimplifyRequest>,
) -> Json<SimplifyResponse> {
    Json(SimplifyResponse {
        simplified_text: engine.simplify(&request.text),
    })
}
