use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::hello::hello;
use super::handlers::login::login;
use super::handlers::register::register;
use crate::domain::user::ports::CredentialServicePort;

pub struct AppState<S: CredentialServicePort> {
    pub credential_service: Arc<S>,
}

impl<S: CredentialServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            credential_service: Arc::clone(&self.credential_service),
        }
    }
}

pub fn create_router<S: CredentialServicePort>(credential_service: Arc<S>) -> Router {
    let state = AppState { credential_service };

    let api_routes = Router::new()
        .route("/api/register", post(register::<S>))
        .route("/api/login", post(login::<S>));

    // Request bodies carry plaintext passwords: spans record method and uri only
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(hello))
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::header;
    use axum::http::StatusCode;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::user::models::Credentials;
    use crate::domain::user::models::FieldError;
    use crate::domain::user::models::UserResponse;
    use crate::user::errors::RepositoryError;
    use crate::user::errors::UserError;

    /// Rejects every login, fails every registration with a storage fault.
    struct StubCredentialService;

    #[async_trait]
    impl CredentialServicePort for StubCredentialService {
        async fn register(&self, _credentials: Credentials) -> Result<UserResponse, UserError> {
            Err(RepositoryError::Database("pool timed out".to_string()).into())
        }

        async fn login(&self, credentials: Credentials) -> Result<UserResponse, UserError> {
            assert_eq!(credentials.username, "bob");
            Ok(FieldError::password(FieldError::PASSWORD_MISMATCH).into())
        }
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_field_error_is_ok_status() {
        let router = create_router(Arc::new(StubCredentialService));

        let response = router
            .oneshot(json_request(
                "/api/login",
                r#"{"username":"bob","password":"wrong"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status_code"], 200);
        assert_eq!(body["data"]["errors"][0]["field"], "password");
        assert!(body["data"].get("user").is_none());
    }

    #[tokio::test]
    async fn test_storage_fault_is_internal_error() {
        let router = create_router(Arc::new(StubCredentialService));

        let response = router
            .oneshot(json_request(
                "/api/register",
                r#"{"username":"alice","password":"secret1"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["status_code"], 500);
        // Storage details stay in the logs
        assert!(!body["data"]["message"]
            .as_str()
            .unwrap()
            .contains("pool timed out"));
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let router = create_router(Arc::new(StubCredentialService));

        let response = router
            .oneshot(json_request("/api/register", r#"{"username":"alice"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_hello() {
        let router = create_router(Arc::new(StubCredentialService));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"hi");
    }
}
