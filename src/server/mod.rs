//! REST API server exposing the recipe registry

mod handlers;
mod response;

pub use response::{ApiError, ApiResponse};

use crate::app::config::ServerConfig;
use crate::recipe::RecipeRegistry;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP front-end for a recipe registry
pub struct RecipeServer {
    registry: Arc<dyn RecipeRegistry>,
    config: ServerConfig,
}

/// Shared API state
#[derive(Clone)]
pub(crate) struct ApiState {
    pub(crate) registry: Arc<dyn RecipeRegistry>,
}

impl RecipeServer {
    pub fn new(registry: Arc<dyn RecipeRegistry>, config: ServerConfig) -> Self {
        Self { registry, config }
    }

    /// Build API router
    pub fn router(&self) -> Router {
        let state = ApiState {
            registry: Arc::clone(&self.registry),
        };

        let router = Router::new()
            .route("/api/v1/health", get(handlers::health_check))
            .route(
                "/api/v1/recipes",
                get(handlers::list_recipes).post(handlers::create_recipe),
            )
            .route(
                "/api/v1/recipes/{key}",
                get(handlers::get_recipe)
                    .put(handlers::update_recipe)
                    .delete(handlers::delete_recipe),
            )
            .layer(TraceLayer::new_for_http());

        let router = if self.config.cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        };

        router.with_state(state)
    }

    /// Bind the configured address and serve until the process stops
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        self.serve_with_listener(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_with_listener(self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr()?;
        info!("Starting recipe API server on {}", local);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
