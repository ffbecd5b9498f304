//! HTTP route handlers.

use std::path::Path;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::planner::{Planner, QueryError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/connectivity", get(connectivity))
        .route("/api/route", post(plan_route))
        .route("/api/spanning-tree", get(spanning_tree))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/positions", get(station_positions))
        .route("/api/network", get(network_summary))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Whether every station can reach every other.
async fn connectivity(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    let snapshot = state.network.current().await;
    let planner = Planner::new(snapshot.network(), &state.config);
    Json(ConnectivityResponse {
        connected: planner.is_connected(),
    })
}

/// Plan the shortest route between two named stations.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let snapshot = state.network.current().await;
    let network = snapshot.network();
    let planner = Planner::new(network, &state.config);

    let source = planner.resolve(&req.start)?;
    let target = planner.resolve(&req.end)?;

    // One shortest-path tree serves every destination from the same start
    let paths = state
        .routes
        .get_or_compute(snapshot.generation(), source, || {
            planner.shortest_paths_from(source)
        })
        .await?;
    let route = planner.route_to(&paths, target)?;

    Ok(Json(RouteResponse::from_route(
        &route,
        network,
        &state.positions,
    )))
}

/// Minimum spanning tree of the network.
async fn spanning_tree(State(state): State<AppState>) -> Json<SpanningTreeResponse> {
    let snapshot = state.network.current().await;
    let network = snapshot.network();
    let tree = Planner::new(network, &state.config).spanning_tree();
    Json(SpanningTreeResponse::from_tree(&tree, network))
}

/// Search stations by name prefix.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<Vec<StationSearchResult>> {
    let limit = req.limit.unwrap_or(10).min(50);
    let snapshot = state.network.current().await;
    let matches = Planner::new(snapshot.network(), &state.config).search_stations(&req.q);

    Json(matches.into_iter().take(limit).map(Into::into).collect())
}

/// Station positions in plot coordinates.
async fn station_positions(State(state): State<AppState>) -> Json<Vec<PositionResult>> {
    Json(state.positions.points().iter().map(Into::into).collect())
}

/// Counts and generation of the published network.
async fn network_summary(State(state): State<AppState>) -> Json<NetworkSummary> {
    let snapshot = state.network.current().await;
    Json(NetworkSummary::new(
        snapshot.network(),
        snapshot.generation(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Unprocessable { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        let message = e.to_string();
        match e {
            QueryError::StationNotFound { .. } => AppError::NotFound { message },
            QueryError::Unreachable { .. } => AppError::Unprocessable { message },
            QueryError::Path(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = %status, error = self.message(), "request failed");
        } else {
            debug!(status = %status, error = self.message(), "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}
