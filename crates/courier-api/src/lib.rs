//! # courier-api — Axum HTTP API for the Courier Routing Stack
//!
//! The HTTP surface over the routing core: graph management, route
//! calculation with selectable strategies, incident-driven
//! recalculation, and route lookup.
//!
//! ## API Surface
//!
//! | Prefix             | Module               | Domain                 |
//! |--------------------|----------------------|------------------------|
//! | `/v1/hubs`         | [`routes::hubs`]     | Routing graph          |
//! | `/v1/connections`  | [`routes::hubs`]     | Routing graph          |
//! | `/v1/routes/*`     | [`routes::routing`]  | Route operations       |
//! | `/openapi.json`    | [`openapi`]          | Generated spec         |
//! | `/health/*`        | (this module)        | Probes                 |

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::hubs::router())
        .merge(routes::routing::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — 200 when the application can serve traffic.
async fn readiness() -> &'static str {
    "ready"
}
