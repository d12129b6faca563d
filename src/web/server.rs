use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Method;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::{DocumentStore, JsonStore};

use super::routes;
use super::session::SessionStore;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub sessions: SessionStore,
}

/// Kanban server instance
pub struct KanbanServer {
    port: u16,
    data_path: PathBuf,
}

impl KanbanServer {
    pub fn new(port: u16, data_path: PathBuf) -> Self {
        Self { port, data_path }
    }

    /// Run the server until shutdown.
    pub async fn run(self) -> Result<()> {
        let state = AppState {
            store: Arc::new(JsonStore::new(self.data_path.clone())),
            sessions: SessionStore::new(),
        };

        let app = create_router(state);

        let addr = format!("127.0.0.1:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        tracing::info!("KanbanPro listening on http://{}", addr);
        tracing::info!("Data file: {}", self.data_path.display());

        axum::serve(listener, app).await.context("Server error")?;

        Ok(())
    }
}

/// Create the Axum router with all routes and middleware. Public so tests
/// can drive the router in-process.
pub fn create_router(state: AppState) -> Router {
    routes::app_routes()
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
