//! HTTP server: JSON API, static web client, and the listener loop.
//!
//! Routes (all API routes live under `/api`):
//!
//! | Method | Path              | Handler        |
//! |--------|-------------------|----------------|
//! | GET    | `/api/status`     | [`status`]     |
//! | POST   | `/api/connect`    | [`connect`]    |
//! | POST   | `/api/disconnect` | [`disconnect`] |
//! | POST   | `/api/command`    | [`command`]    |
//! | POST   | `/api/channel`    | [`channel`]    |
//! | POST   | `/api/text`       | [`text`]       |
//! | GET    | `/healthz`        | [`healthz`]    |
//!
//! A known path requested with the wrong method gets the same JSON 404 as an
//! unknown path.
//!
//! Everything else is served from the static directory when one is
//! configured, with `index.html` as the fallback for unknown paths.  Without
//! a static directory, and for unknown `/api/*` paths, the response is a JSON
//! 404.
//!
//! Request bodies are read as raw bytes and decoded by [`parse_body`], so an
//! empty body behaves like `{}` and malformed JSON gets a JSON error instead
//! of axum's plain-text rejection.

use std::any::Any;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::application::{RemoteService, ServiceTiming};
use crate::domain::messages::{
    ChannelRequest, ChannelResponse, CommandRequest, CommandResponse, ConnectRequest,
    ConnectResponse, DisconnectRequest, HealthResponse, MessageResponse, StatusResponse,
    SuccessResponse, TextRequest,
};
use crate::domain::ServerConfig;
use crate::infrastructure::adb_runner::AdbRunner;
use crate::infrastructure::api_error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RemoteService>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the full application router.
///
/// `static_dir`, when set, is served at `/` with single-page-app fallback to
/// its `index.html`.
pub fn build_router(service: Arc<RemoteService>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/status", get(status).fallback(not_found))
        .route("/connect", post(connect).fallback(not_found))
        .route("/disconnect", post(disconnect).fallback(not_found))
        .route("/command", post(command).fallback(not_found))
        .route("/channel", post(channel).fallback(not_found))
        .route("/text", post(text).fallback(not_found))
        .fallback(not_found);

    let app = Router::new()
        .nest("/api", api)
        .route("/healthz", get(healthz).fallback(not_found));

    let app = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app.fallback(not_found),
    };

    app.with_state(AppState { service })
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %Uuid::new_v4()
                )
            }),
        )
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let runner = Arc::new(AdbRunner::new(config.adb_path.clone(), config.command_timeout));
    let service = Arc::new(RemoteService::new(runner, ServiceTiming::from(&config)));

    if let Some(dir) = &config.static_dir {
        if !dir.join("index.html").is_file() {
            warn!(dir = %dir.display(), "static directory has no index.html");
        }
    }
    let app = build_router(service, config.static_dir.as_deref());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;
    let local_addr = listener.local_addr()?;

    info!(
        "TVControl server listening on http://{local_addr} (bridge: {})",
        config.adb_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("HTTP server stopped");
    Ok(())
}

// ── Body decoding ─────────────────────────────────────────────────────────────

/// Decodes a JSON request body.
///
/// An empty (or whitespace-only) body and a literal `null` decode to
/// `T::default()`.
pub fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!("rejecting malformed JSON body: {e}");
        ApiError::bad_request("Request body must be valid JSON.")
    })?;
    if value.is_null() {
        return Ok(T::default());
    }

    serde_json::from_value(value).map_err(|e| {
        debug!("rejecting request body: {e}");
        ApiError::bad_request(format!("Request body is invalid: {e}"))
    })
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/status`
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let devices = state
        .service
        .devices()
        .await
        .map_err(|e| ApiError::from_service(e, "Unable to read device list"))?;
    Ok(Json(StatusResponse { devices }))
}

/// `POST /api/connect`
pub async fn connect(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConnectResponse>, ApiError> {
    let req: ConnectRequest = parse_body(&body)?;
    let outcome = state
        .service
        .connect(req.host.as_deref().unwrap_or_default())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to connect to device"))?;
    Ok(Json(ConnectResponse {
        message: outcome.message,
        connected: outcome.connected,
    }))
}

/// `POST /api/disconnect`
pub async fn disconnect(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let req: DisconnectRequest = parse_body(&body)?;
    let message = state
        .service
        .disconnect(req.host.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to disconnect device"))?;
    Ok(Json(MessageResponse { message }))
}

/// `POST /api/command`
pub async fn command(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CommandResponse>, ApiError> {
    let req: CommandRequest = parse_body(&body)?;
    let action = state
        .service
        .dispatch_action(req.action.as_deref(), req.serial.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to send command"))?;
    Ok(Json(CommandResponse {
        success: true,
        action: action.as_str().to_string(),
    }))
}

/// `POST /api/channel`
pub async fn channel(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChannelResponse>, ApiError> {
    let req: ChannelRequest = parse_body(&body)?;
    let channel = state
        .service
        .set_channel(&req.channel_text(), req.confirm(), req.serial.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to set channel"))?;
    Ok(Json(ChannelResponse {
        success: true,
        channel,
    }))
}

/// `POST /api/text`
pub async fn text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let req: TextRequest = parse_body(&body)?;
    state
        .service
        .input_text(req.text_value().as_deref(), req.serial.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to input text"))?;
    Ok(Json(SuccessResponse { success: true }))
}

/// `GET /healthz`
pub async fn healthz() -> Json<HealthResponse> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    Json(HealthResponse {
        status: "ok",
        timestamp,
    })
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(%detail, "request handler panicked");
    ApiError::internal("Internal server error", None).into_response()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// End-to-end route coverage lives in `tests/http_api.rs`.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_empty_is_default() {
        // Arrange
        let body = Bytes::from_static(b"");

        // Act
        let req: ConnectRequest = parse_body(&body).unwrap();

        // Assert
        assert!(req.host.is_none());
    }

    #[test]
    fn test_parse_body_whitespace_and_null_are_default() {
        let req: ConnectRequest = parse_body(&Bytes::from_static(b"  \n")).unwrap();
        assert!(req.host.is_none());

        let req: ConnectRequest = parse_body(&Bytes::from_static(b"null")).unwrap();
        assert!(req.host.is_none());
    }

    #[test]
    fn test_parse_body_reads_fields() {
        let req: ConnectRequest =
            parse_body(&Bytes::from_static(br#"{"host":"192.168.1.30:5555"}"#)).unwrap();
        assert_eq!(req.host.as_deref(), Some("192.168.1.30:5555"));
    }

    #[test]
    fn test_parse_body_malformed_json_is_bad_request() {
        let err = parse_body::<ConnectRequest>(&Bytes::from_static(b"{host:")).unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Request body must be valid JSON.");
    }

    #[test]
    fn test_parse_body_wrong_field_type_is_bad_request() {
        let err =
            parse_body::<ConnectRequest>(&Bytes::from_static(br#"{"host":42}"#)).unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(err.body.error.starts_with("Request body is invalid"));
    }

    #[test]
    fn test_handle_panic_returns_generic_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_healthz_reports_ok() {
        let Json(body) = healthz().await;
        assert_eq!(body.status, "ok");
        assert!(body.timestamp > 0);
    }
}
