use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::error::DirectoryError;
use crate::application::validators;
use crate::application::{
    CreateClientUseCase, ListClientsUseCase, SearchClientsUseCase, UpdateClientUseCase,
};
use crate::domain::client::{Client, ClientId, ClientPayload};

/// Use cases and process metadata shared by every handler.
pub struct AppState {
    pub list_clients: Arc<dyn ListClientsUseCase>,
    pub search_clients: Arc<dyn SearchClientsUseCase>,
    pub create_client: Arc<dyn CreateClientUseCase>,
    pub update_client: Arc<dyn UpdateClientUseCase>,
    pub start_time: Instant,
}

/// Uniform response envelope. Every API outcome, success or failure, is
/// reported through this shape with an appropriate HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,

    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    pub fn failure(error: DirectoryError) -> Self {
        let (status, message) = match &error {
            DirectoryError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
            DirectoryError::NotFound => (StatusCode::NOT_FOUND, error.to_string()),
            DirectoryError::Duplicate(_) => (StatusCode::CONFLICT, error.to_string()),
            DirectoryError::ExternalService { .. } => (StatusCode::BAD_GATEWAY, error.to_string()),
            DirectoryError::Unexpected(detail) => {
                // Internal detail stays in the logs; callers get a fixed
                // message.
                tracing::error!(%detail, "request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "General failure".to_string(),
                )
            }
        };

        Self {
            success: false,
            message,
            data: None,
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Build the directory router. `allowed_origin` is the single browser
/// origin permitted to call the API cross-origin.
pub fn app(state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin: {}", allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/{id}", put(update_client))
        .route("/search/{name}", get(search_clients))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state)))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_clients(State(state): State<Arc<AppState>>) -> ApiResponse<Vec<Client>> {
    match state.list_clients.handle().await {
        Ok(clients) => ApiResponse::ok(clients),
        Err(error) => ApiResponse::failure(error),
    }
}

async fn search_clients(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResponse<Vec<Client>> {
    match state.search_clients.handle(&name).await {
        Ok(clients) => ApiResponse::ok(clients),
        Err(error) => ApiResponse::failure(error),
    }
}

async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ClientPayload>,
) -> ApiResponse<()> {
    if let Err(error) = validators::validate_create(&payload) {
        return ApiResponse::failure(error);
    }

    match state.create_client.handle(payload).await {
        Ok(()) => ApiResponse::ok(()),
        Err(error) => ApiResponse::failure(error),
    }
}

async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ClientPayload>,
) -> ApiResponse<()> {
    match state.update_client.handle(&ClientId::new(id), payload).await {
        Ok(()) => ApiResponse::ok(()),
        Err(error) => ApiResponse::failure(error),
    }
}
