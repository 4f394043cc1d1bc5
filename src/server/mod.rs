mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::model::ApiInfo;
use crate::domain::ports::Catalog;
use crate::utils::error::{CatalogError, Result};

/// Shared, read-only dependencies handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub api_info: Arc<ApiInfo>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, api_info: ApiInfo) -> Self {
        Self {
            catalog,
            api_info: Arc::new(api_info),
        }
    }
}

pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = if allowed_origin == "*" {
        AllowOrigin::any()
    } else {
        let value =
            HeaderValue::from_str(allowed_origin).map_err(|e| CatalogError::InvalidConfigValueError {
                field: "server.allowed_origin".to_string(),
                value: allowed_origin.to_string(),
                reason: format!("not a valid header value: {}", e),
            })?;
        AllowOrigin::exact(value)
    };

    // OPTIONS 一律由 CorsLayer 以 200 空回應處理
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the axum router with all routes
pub fn router(state: AppState, allowed_origin: &str) -> Result<Router> {
    Ok(Router::new()
        .route("/api/exercises", get(handlers::list_exercises))
        .route("/api/equipment-options", get(handlers::equipment_options))
        .route("/api/muscles-options", get(handlers::muscles_options))
        .route("/api/exercise-names", get(handlers::exercise_names))
        .route("/api/version", get(handlers::version))
        .layer(cors_layer(allowed_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Server listening on {}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| CatalogError::ServerError {
            message: e.to_string(),
        })
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
