//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courier Routing API",
        version = "0.1.0",
        description = "Parcel delivery route computation: hub graph management, \
                       multi-strategy route calculation (direct estimate, Dijkstra, \
                       A*, external OSRM), and incident-driven recalculation.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Graph management
        crate::routes::hubs::create_hub,
        crate::routes::hubs::list_hubs,
        crate::routes::hubs::create_connection,
        // Route operations
        crate::routes::routing::calculate_route,
        crate::routes::routing::recalculate_route,
        crate::routes::routing::get_route,
    ),
    components(schemas(
        crate::routes::hubs::CreateHubRequest,
        crate::routes::hubs::CreateConnectionRequest,
        crate::routes::hubs::HubResponse,
        crate::routes::hubs::ConnectionResponse,
        crate::routes::routing::CalculateRouteRequest,
        crate::routes::routing::RecalculateRouteRequest,
        crate::routes::routing::RouteResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "hubs", description = "Routing graph management"),
        (name = "routes", description = "Route calculation and recalculation"),
    )
)]
pub struct ApiDoc;

/// Router serving the generated spec.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_spec))
}

async fn serve_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
