//! # External-Service Routing Strategy
//!
//! Delegates path computation to an OSRM deployment through
//! [`OsrmClient`]. Hub locations are parsed to points, sent as
//! `lon,lat` pairs, and the best candidate route is converted back into
//! internal units at the response boundary. All client and service
//! failures surface as [`RoutingError::Upstream`].

use std::sync::Arc;

use async_trait::async_trait;
use geo_types::Coord;

use courier_core::{Hub, HubAccess, Incident, Route, RoutingConstraints, RoutingError};
use courier_engine::{recompute_for_incident, RoutingStrategy};

use crate::client::OsrmClient;

/// Service tag stamped on routes produced by this strategy.
pub const SERVICE: &str = "OSRM";

/// Routing strategy backed by an external OSRM service.
pub struct OsrmStrategy {
    client: Arc<OsrmClient>,
    hubs: Arc<dyn HubAccess>,
}

impl OsrmStrategy {
    /// Create the strategy from a shared client and hub accessor.
    pub fn new(client: Arc<OsrmClient>, hubs: Arc<dyn HubAccess>) -> Self {
        Self { client, hubs }
    }
}

#[async_trait]
impl RoutingStrategy for OsrmStrategy {
    fn service_name(&self) -> &'static str {
        SERVICE
    }

    async fn compute_optimal_path(
        &self,
        start: &Hub,
        end: &Hub,
        _constraints: Option<&RoutingConstraints>,
    ) -> Result<Route, RoutingError> {
        // A hub location the service cannot consume is an upstream
        // contract failure, not a geometry error of our own making.
        let start_point = start.point().map_err(|e| RoutingError::Upstream {
            reason: format!("start hub location unusable: {e}"),
        })?;
        let end_point = end.point().map_err(|e| RoutingError::Upstream {
            reason: format!("end hub location unusable: {e}"),
        })?;

        let response = self.client.fetch_route(&start_point, &end_point).await?;
        let best = response.into_best_route()?;

        tracing::debug!(
            distance_m = best.distance,
            duration_s = best.duration,
            "OSRM returned a route"
        );

        let endpoints = (
            Coord {
                x: start_point.x(),
                y: start_point.y(),
            },
            Coord {
                x: end_point.x(),
                y: end_point.y(),
            },
        );
        Ok(best
            .into_route(endpoints, SERVICE)
            .with_endpoints(start.id, end.id))
    }

    async fn recalculate_path(
        &self,
        current: Route,
        incident: &Incident,
    ) -> Result<Route, RoutingError> {
        recompute_for_incident(self, &*self.hubs, current, incident).await
    }
}
