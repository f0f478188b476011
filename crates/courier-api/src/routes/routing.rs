//! # Route Operations API
//!
//! Route calculation, incident-driven recalculation, and lookup.
//!
//! ## Endpoints
//!
//! - `POST /v1/routes/calculate` — compute and persist a route
//! - `POST /v1/routes/:id/recalculate` — recompute after an incident
//! - `GET /v1/routes/:id` — fetch a persisted route

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use courier_core::{
    HubId, Incident, IncidentKind, ParcelId, Route, RouteId, RoutingConstraints,
};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to calculate a route between two hubs.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateRouteRequest {
    /// Identifier of the start hub.
    pub start_hub: Uuid,
    /// Identifier of the destination hub.
    pub end_hub: Uuid,
    /// Parcel to link the route to, if any.
    pub parcel_id: Option<Uuid>,
    /// Optional routing constraints. The `algorithm` field selects the
    /// strategy (`DIJKSTRA`, `ASTAR`, `OSRM`; anything else means the
    /// direct estimate); other fields pass through uninterpreted.
    #[schema(value_type = Option<Object>)]
    pub constraints: Option<RoutingConstraints>,
}

/// Request to recalculate a route after an incident.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecalculateRouteRequest {
    /// Incident classification.
    #[schema(value_type = String, example = "RoadClosure")]
    pub kind: IncidentKind,
    /// Human-readable description of the incident.
    pub description: String,
    /// Structured incident details; uninterpreted by the core.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub details: serde_json::Value,
}

/// A computed route.
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteResponse {
    pub id: Option<Uuid>,
    pub parcel_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub start_hub: Option<Uuid>,
    pub end_hub: Option<Uuid>,
    /// Path geometry as a WKT LineString.
    pub geometry: String,
    pub total_distance_km: f64,
    pub estimated_duration_minutes: u32,
    /// Tag of the strategy that produced the route.
    pub routing_service: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id.map(|id| *id.as_uuid()),
            parcel_id: route.parcel_id.map(|id| *id.as_uuid()),
            driver_id: route.driver_id.map(|id| *id.as_uuid()),
            start_hub: route.start_hub.map(|id| *id.as_uuid()),
            end_hub: route.end_hub.map(|id| *id.as_uuid()),
            geometry: route.geometry,
            total_distance_km: route.total_distance_km,
            estimated_duration_minutes: route.estimated_duration_minutes,
            routing_service: route.routing_service,
            is_active: route.is_active,
            created_at: route.created_at,
        }
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the route-operations router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/routes/calculate", post(calculate_route))
        .route("/v1/routes/:id", get(get_route))
        .route("/v1/routes/:id/recalculate", post(recalculate_route))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/routes/calculate — Compute and persist a route.
#[utoipa::path(
    post,
    path = "/v1/routes/calculate",
    request_body = CalculateRouteRequest,
    responses(
        (status = 201, description = "Route computed and persisted", body = RouteResponse),
        (status = 404, description = "Start or end hub not found", body = crate::error::ErrorBody),
        (status = 422, description = "No path between the hubs", body = crate::error::ErrorBody),
        (status = 502, description = "External routing service failed", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
pub async fn calculate_route(
    State(state): State<AppState>,
    body: Result<Json<CalculateRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RouteResponse>), AppError> {
    let req = extract_json(body)?;
    let route = state
        .service
        .calculate_route(
            HubId(req.start_hub),
            HubId(req.end_hub),
            req.parcel_id.map(ParcelId),
            req.constraints.as_ref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(route.into())))
}

/// POST /v1/routes/:id/recalculate — Recompute a route after an incident.
#[utoipa::path(
    post,
    path = "/v1/routes/{id}/recalculate",
    params(("id" = Uuid, Path, description = "Route identifier")),
    request_body = RecalculateRouteRequest,
    responses(
        (status = 200, description = "Route recalculated", body = RouteResponse),
        (status = 404, description = "Route not found", body = crate::error::ErrorBody),
        (status = 502, description = "External routing service failed", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
pub async fn recalculate_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<RecalculateRouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let req = extract_json(body)?;
    let incident = Incident {
        kind: req.kind,
        description: req.description,
        reported_at: Utc::now(),
        details: req.details,
    };

    let route = state
        .service
        .recalculate_route(RouteId(id), &incident)
        .await?;
    Ok(Json(route.into()))
}

/// GET /v1/routes/:id — Fetch a persisted route.
#[utoipa::path(
    get,
    path = "/v1/routes/{id}",
    params(("id" = Uuid, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "The route", body = RouteResponse),
        (status = 404, description = "Route not found", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.service.get_route(RouteId(id)).await?;
    Ok(Json(route.into()))
}
