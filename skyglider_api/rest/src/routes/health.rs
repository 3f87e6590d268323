use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use skyglider_core_health_contracts::{HealthFeatureService, HealthStatus};

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    sink: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { sink } = service.get_status().await;

    let status = if sink {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse { http: true, sink };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use skyglider_core_health_contracts::MockHealthFeatureService;
    use tower::ServiceExt;

    use super::*;

    async fn get_health(service: MockHealthFeatureService) -> (StatusCode, serde_json::Value) {
        let response = router(Arc::new(service))
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let service = MockHealthFeatureService::new().with_get_status(HealthStatus { sink: true });

        // Act
        let (status, body) = get_health(service).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"http": true, "sink": true}));
    }

    #[tokio::test]
    async fn unhealthy() {
        // Arrange
        let service =
            MockHealthFeatureService::new().with_get_status(HealthStatus { sink: false });

        // Act
        let (status, body) = get_health(service).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"http": true, "sink": false}));
    }
}
