use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use logwindow_protocol::logs::{
    FailureBody, FailureKind, ParameterError, ShowLogsQuery, ShowLogsResponse, WindowRequest,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument};

use crate::api_docs;
use crate::dataset::Dataset;
use crate::error::WindowError;
use crate::paging::get_window;

#[derive(Clone)]
struct AppState {
    dataset: Dataset,
}

type AppResult<T> = Result<T, AppError>;

/// Builds the HTTP router over an already loaded dataset.
pub fn build_router(dataset: Dataset) -> Router {
    let state = AppState { dataset };

    Router::new()
        .route("/health", get(health_check))
        .route("/tos", get(terms_of_service))
        .route("/apispec.json", get(api_spec))
        .route("/show-logs/", get(show_logs))
        .route("/show-logs", get(show_logs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle returned when the service is started programmatically.
pub struct ServiceHandle {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    server: JoinHandle<()>,
}

impl ServiceHandle {
    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.server.await;
    }
}

pub async fn start_service(bind_address: &str, dataset: Dataset) -> anyhow::Result<ServiceHandle> {
    let addr: SocketAddr = bind_address
        .parse()
        .with_context(|| format!("invalid bind address {bind_address}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind show-logs listener")?;
    let actual_addr = listener
        .local_addr()
        .context("failed to read socket address")?;

    let router = build_router(dataset);
    let (tx, rx) = oneshot::channel();

    let server = tokio::spawn(async move {
        info!(%actual_addr, "starting logwindow-service");
        if let Err(err) = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
        {
            error!(%actual_addr, error = %err, "logwindow-service stopped with an error");
        }
    });

    Ok(ServiceHandle {
        addr: actual_addr,
        shutdown: tx,
        server,
    })
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "records": state.dataset.len() }))
}

async fn terms_of_service() -> impl IntoResponse {
    Json(serde_json::json!({ "massage": "No terms of service" }))
}

async fn api_spec() -> impl IntoResponse {
    Json(api_docs::openapi_document())
}

#[instrument(skip_all, fields(user_id = tracing::field::Empty))]
async fn show_logs(
    State(state): State<AppState>,
    Query(query): Query<ShowLogsQuery>,
) -> AppResult<Json<ShowLogsResponse>> {
    let request = WindowRequest::try_from(query)?;
    tracing::Span::current().record("user_id", tracing::field::display(&request.user_id));

    let result = get_window(&state.dataset, &request)?;
    debug!(
        anchor_index = result.anchor_index,
        returned = result.logs.len(),
        "served log window"
    );

    Ok(Json(result.into()))
}

#[derive(Debug, Clone)]
struct AppError {
    status: StatusCode,
    body: FailureBody,
}

impl AppError {
    fn bad_request(body: FailureBody) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<WindowError> for AppError {
    fn from(err: WindowError) -> Self {
        debug!(kind = ?err.kind(), %err, "rejected show-logs request");
        AppError::bad_request(err.to_failure_body())
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        debug!(%err, "rejected show-logs query");
        AppError::bad_request(FailureBody::new(FailureKind::InvalidParameter, err.to_string()))
    }
}
