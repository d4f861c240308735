// Rust guideline compliant 2026-10-19

//! REST routes for tickets.

use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path as AxumPath, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use ticketflow_app::{AppError, ErrorCode, ErrorEnvelope, ListOptions, TicketService};
use ticketflow_core::{Config, NewTicket, Ticket, TicketId, TicketPatch};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Ticket service backing the API.
    pub service: TicketService,
}

/// Builds the application router.
///
/// API routes take precedence; unmatched paths fall through to the static
/// bundle when `config.static_dir` is set.
pub fn router(service: TicketService, config: &Config) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/:id", get(get_ticket).patch(update_ticket))
        .route("/tickets/:id/finalizar", post(finalize_ticket))
        .route("/tickets/:id/finalize", post(finalize_ticket))
        .with_state(AppState { service });

    let app = match &config.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.fallback(no_route),
    };

    let app = app.layer(TraceLayer::new_for_http());
    if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Runs a service call on the blocking pool; stores do file IO under a lock.
async fn blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> ticketflow_app::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|err| ApiError(AppError::Io(std::io::Error::other(err))))?
        .map_err(ApiError)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn list_tickets(
    State(state): State<AppState>,
    query: Result<Query<ListOptions>, QueryRejection>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let Query(options) = query?;
    let filter = options.into_filter()?;
    let tickets = blocking(move || state.service.list(&filter)).await?;
    Ok(Json(tickets))
}

async fn create_ticket(
    State(state): State<AppState>,
    body: Result<Json<NewTicket>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    let Json(input) = body?;
    let ticket = blocking(move || state.service.create(input)).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn get_ticket(
    State(state): State<AppState>,
    id: Result<AxumPath<TicketId>, PathRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let AxumPath(id) = id?;
    let ticket = blocking(move || state.service.get(id)).await?;
    Ok(Json(ticket))
}

async fn update_ticket(
    State(state): State<AppState>,
    id: Result<AxumPath<TicketId>, PathRejection>,
    body: Result<Json<TicketPatch>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let AxumPath(id) = id?;
    let Json(patch) = body?;
    let ticket = blocking(move || state.service.update(id, patch)).await?;
    Ok(Json(ticket))
}

async fn finalize_ticket(
    State(state): State<AppState>,
    id: Result<AxumPath<TicketId>, PathRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let AxumPath(id) = id?;
    let ticket = blocking(move || state.service.finalize(id)).await?;
    Ok(Json(ticket))
}

async fn no_route(uri: Uri) -> impl IntoResponse {
    let envelope = ErrorEnvelope {
        code: ErrorCode::NotFound,
        message: format!("No route for {}", uri.path()),
        details: None,
    };
    (StatusCode::NOT_FOUND, Json(envelope))
}
