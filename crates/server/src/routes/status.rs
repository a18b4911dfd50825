//! Welcome and health routes.

use axum::{Json, extract::OriginalUri, http::StatusCode};
use tracing::{debug, info};
use web_types::{ApiError, HealthResponse, WelcomeResponse};

/// GET /api - Service name and version.
pub async fn welcome() -> Json<WelcomeResponse> {
    info!("welcome endpoint accessed");
    Json(WelcomeResponse::current())
}

/// GET /health - Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    debug!("health check");
    Json(HealthResponse::ok())
}

/// Fallback for unknown `/api/*` paths.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ApiError>) {
    debug!(%uri, "no api route");
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::with_code(
            format!("No API route: {}", uri.path()),
            "NOT_FOUND",
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_types::{APP_NAME, APP_VERSION};

    #[tokio::test]
    async fn test_welcome() {
        let Json(welcome) = welcome().await;

        assert_eq!(welcome.message, format!("Welcome to {}", APP_NAME));
        assert_eq!(welcome.version, APP_VERSION);
    }

    #[tokio::test]
    async fn test_health() {
        let Json(health) = health().await;

        assert!(health.is_ok());
        assert_eq!(health.service, APP_NAME);
    }

    #[tokio::test]
    async fn test_api_not_found() {
        let uri = "/api/missing".parse().unwrap();
        let (status, Json(error)) = api_not_found(OriginalUri(uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.error, "No API route: /api/missing");
        assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
    }
}
