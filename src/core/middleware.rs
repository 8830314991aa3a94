use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::core::error::AppError;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Turns a handler panic into the uniform 500 body
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}

/// Guards the Swagger UI with HTTP basic auth
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let authorized = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Basic "))
                .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
                .and_then(|decoded| String::from_utf8(decoded).ok())
                .is_some_and(|creds| creds == *credentials);

            if authorized {
                return Ok(next.run(req).await);
            }

            let mut response = Response::new(Body::from("Unauthorized"));
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Swagger UI\""),
            );

            Err(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    use crate::core::app::{api_router, AppServices};
    use crate::features::quizzes::SeededPicker;
    use crate::shared::test_helpers::seeded_store;

    fn guarded() -> TestServer {
        let app = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(axum::middleware::from_fn(basic_auth_middleware(Arc::new(
                "admin:secret".to_string(),
            ))));
        TestServer::new(app).unwrap()
    }

    fn cors_server() -> TestServer {
        let store = Arc::new(seeded_store());
        let services = AppServices::new(store.clone(), store, Arc::new(SeededPicker::new(0)));
        let app = api_router(&services).layer(cors_layer(vec!["*".to_string()]));
        TestServer::new(app).unwrap()
    }

    async fn boom() -> &'static str {
        panic!("database handle vanished")
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(tower_http::catch_panic::CatchPanicLayer::custom(panic_response));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/boom").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&serde_json::json!({
            "success": false,
            "error": 500,
            "message": "Internal Server Error"
        }));
    }

    #[tokio::test]
    async fn test_basic_auth_rejects_missing_credentials() {
        let response = guarded().get("/docs").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .is_some());
    }

    #[tokio::test]
    async fn test_basic_auth_accepts_valid_credentials() {
        let encoded = BASE64_STANDARD.encode("admin:secret");
        let response = guarded()
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
            )
            .await;
        response.assert_status_ok();
        response.assert_text("docs");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = cors_server()
            .get("/categories")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_lists_methods_and_headers() {
        let response = cors_server()
            .method(Method::OPTIONS, "/questions/1")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("DELETE"),
            )
            .await;

        response.assert_status_ok();
        let allowed = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
                .unwrap_or_default()
        };
        assert_eq!(
            allowed(header::ACCESS_CONTROL_ALLOW_METHODS),
            "GET,POST,PUT,PATCH,DELETE,OPTIONS"
        );
        assert_eq!(
            allowed(header::ACCESS_CONTROL_ALLOW_HEADERS),
            "content-type,authorization"
        );
        assert_eq!(allowed(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }
}
