//! # Routing Graph API
//!
//! Hub and connection management for the routing graph.
//!
//! ## Endpoints
//!
//! - `POST /v1/hubs` — create hub
//! - `GET /v1/hubs` — list hubs
//! - `POST /v1/connections` — connect two hubs

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use courier_core::{Hub, HubConnection, HubId, RoutingError};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to create a hub.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHubRequest {
    /// Display name of the hub.
    pub name: String,
    /// Location as a WKT point, e.g. `POINT(9.7043 4.0511)`.
    pub location: String,
}

impl Validate for CreateHubRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("location must not be empty".to_string());
        }
        Ok(())
    }
}

/// Request to connect two hubs.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateConnectionRequest {
    /// Identifier of one endpoint hub.
    pub from_hub: Uuid,
    /// Identifier of the other endpoint hub.
    pub to_hub: Uuid,
    /// Traversal cost of the connection; absent means free.
    pub weight: Option<f64>,
}

impl Validate for CreateConnectionRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err("weight must be a non-negative finite number".to_string());
            }
        }
        Ok(())
    }
}

/// A stored hub.
#[derive(Debug, Serialize, ToSchema)]
pub struct HubResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
}

impl From<Hub> for HubResponse {
    fn from(hub: Hub) -> Self {
        Self {
            id: *hub.id.as_uuid(),
            name: hub.name,
            location: hub.location,
        }
    }
}

/// A stored hub connection.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectionResponse {
    pub id: Uuid,
    pub from_hub: Uuid,
    pub to_hub: Uuid,
    pub weight: Option<f64>,
}

impl From<HubConnection> for ConnectionResponse {
    fn from(conn: HubConnection) -> Self {
        Self {
            id: conn.id,
            from_hub: *conn.from_hub.as_uuid(),
            to_hub: *conn.to_hub.as_uuid(),
            weight: conn.weight,
        }
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the graph-management router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/hubs", get(list_hubs).post(create_hub))
        .route("/v1/connections", post(create_connection))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/hubs — Create a hub.
#[utoipa::path(
    post,
    path = "/v1/hubs",
    request_body = CreateHubRequest,
    responses(
        (status = 201, description = "Hub created", body = HubResponse),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "hubs"
)]
pub async fn create_hub(
    State(state): State<AppState>,
    body: Result<Json<CreateHubRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HubResponse>), AppError> {
    let req = extract_validated_json(body)?;
    let hub = state
        .hub_repo
        .create_hub(req.name, req.location)
        .await
        .map_err(|err| match err {
            // The WKT came straight from the request body.
            RoutingError::Geometry(_) => AppError::Validation(err.to_string()),
            other => other.into(),
        })?;
    Ok((StatusCode::CREATED, Json(hub.into())))
}

/// GET /v1/hubs — List all hubs.
#[utoipa::path(
    get,
    path = "/v1/hubs",
    responses(
        (status = 200, description = "All hubs", body = [HubResponse]),
    ),
    tag = "hubs"
)]
pub async fn list_hubs(
    State(state): State<AppState>,
) -> Result<Json<Vec<HubResponse>>, AppError> {
    let hubs = state.hub_repo.list_hubs().await?;
    Ok(Json(hubs.into_iter().map(HubResponse::from).collect()))
}

/// POST /v1/connections — Connect two hubs.
#[utoipa::path(
    post,
    path = "/v1/connections",
    request_body = CreateConnectionRequest,
    responses(
        (status = 201, description = "Connection created", body = ConnectionResponse),
        (status = 404, description = "Endpoint hub not found", body = crate::error::ErrorBody),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "hubs"
)]
pub async fn create_connection(
    State(state): State<AppState>,
    body: Result<Json<CreateConnectionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ConnectionResponse>), AppError> {
    let req = extract_validated_json(body)?;
    let connection = state
        .hub_repo
        .create_connection(HubId(req.from_hub), HubId(req.to_hub), req.weight)
        .await?;
    Ok((StatusCode::CREATED, Json(connection.into())))
}
