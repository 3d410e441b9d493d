// src/api/mod.rs — HTTP surface over the generation pipeline and sessions

pub mod auth;
pub mod handlers;
pub mod types;

use axum::routing::{get, post, put};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::bundler::BundleCompiler;
use crate::provider::GenerativeModel;
use crate::session::SessionStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<Mutex<SessionStore>>,
    pub model: Arc<dyn GenerativeModel>,
    pub compiler: Arc<BundleCompiler>,
    /// Bearer token → owner id; sessions require a resolved owner.
    pub owners: Arc<HashMap<String, String>>,
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse().unwrap(),
            "http://localhost:5173".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
            "http://127.0.0.1:5173".parse().unwrap(),
        ])
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/api/v1/generate", post(handlers::generate_ui))
        .route("/api/v1/correct", post(handlers::correct_ui))
        .route("/api/v1/modify", post(handlers::modify_code))
        .route("/api/v1/compile", post(handlers::compile_preview))
        .route("/api/v1/sessions", post(handlers::create_session))
        .route("/api/v1/sessions", get(handlers::list_sessions))
        .route("/api/v1/sessions/{id}", get(handlers::get_session))
        .route("/api/v1/sessions/{id}", put(handlers::update_session))
        .route(
            "/api/v1/sessions/{id}",
            axum::routing::delete(handlers::delete_session),
        )
        .route("/api/v1/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given port (blocking).
pub async fn start_server(port: u16, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");

    let router = build_router(state);

    tracing::info!("API server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
