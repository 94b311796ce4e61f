use super::routes::{classify, health};
use crate::classification_service::ClassificationService;
use crate::library::logger::interface::Logger;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub classification_service: Arc<ClassificationService>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub max_request_bytes: usize,
}

impl AppState {
    pub fn new(
        classification_service: ClassificationService,
        logger: Arc<dyn Logger + Send + Sync>,
        max_request_bytes: usize,
    ) -> Self {
        Self {
            classification_service: Arc::new(classification_service),
            logger: logger.with_namespace("http_server"),
            max_request_bytes,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify))
        .layer(DefaultBodyLimit::max(state.max_request_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let logger = state.logger.clone();

    logger.info(&format!(
        "IntelliSort API running on http://{} (model loaded: {})",
        listener.local_addr()?,
        state.classification_service.model_loaded()
    ))?;

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    logger.info("Server stopped")?;

    Ok(())
}
