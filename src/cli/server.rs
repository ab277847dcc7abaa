//! HTTP server mode exposing `GetPage` over JSON

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapter::{Adapter, PageRequest};
use crate::config::Settings;
use crate::datasource::Datasource;
use crate::error::{Error, ErrorCode, Result};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    adapter: Adapter,
}

/// Error payload
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            retry_after_seconds: err.retry_after().map(|d| d.as_secs()),
        }
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(err: &Error) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        }
    }
}

/// Build the router around an adapter
pub fn router(adapter: Adapter) -> Router {
    let state = AppState { adapter };

    // Build CORS layer - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/get-page", post(get_page))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(settings: Settings) -> Result<()> {
    let adapter = Adapter::new(Datasource::new(settings.timeout_secs)?);
    let app = router(adapter);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to port {}: {e}", settings.port)))?;

    tracing::info!(
        "Started adapter server on http://{} (datasource timeout {}s)",
        addr,
        settings.timeout_secs
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(e.to_string()))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Fetch one page
async fn get_page(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PageRequest>,
) -> impl IntoResponse {
    match state.adapter.get_page(&req).await {
        Ok(page) => (StatusCode::OK, Json(ApiResponse::success(page))).into_response(),
        Err(e) => {
            tracing::debug!(code = ?e.code(), "GetPage failed: {e}");
            (status_for(e.code()), Json(ApiResponse::<()>::error(&e))).into_response()
        }
    }
}

/// HTTP status used to report an error code
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidDatasourceConfig
        | ErrorCode::InvalidEntityConfig
        | ErrorCode::InvalidPageRequestConfig => StatusCode::BAD_REQUEST,
        ErrorCode::DatasourceUnauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::DatasourceRateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::DatasourceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::DatasourceFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
