//! # Direct Strategy
//!
//! The deterministic default: a two-point path straight between the
//! endpoint coordinates, planar Euclidean distance, and the shared
//! `floor(distance * 10)` duration rule. Never consults the connection
//! graph and never re-optimizes on recalculation.

use async_trait::async_trait;
use geo_types::Coord;

use courier_core::geom::{planar_distance, serialize_line};
use courier_core::{Hub, Incident, Route, RoutingConstraints, RoutingError};

use crate::strategy::RoutingStrategy;

/// Service tag stamped on routes produced by this strategy.
pub const SERVICE: &str = "BASIC";

/// Direct point-to-point route estimation.
#[derive(Debug, Default)]
pub struct DirectStrategy;

impl DirectStrategy {
    /// Create the strategy. It holds no state.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoutingStrategy for DirectStrategy {
    fn service_name(&self) -> &'static str {
        SERVICE
    }

    async fn compute_optimal_path(
        &self,
        start: &Hub,
        end: &Hub,
        _constraints: Option<&RoutingConstraints>,
    ) -> Result<Route, RoutingError> {
        let start_point = start.point()?;
        let end_point = end.point()?;

        let coords = [
            Coord {
                x: start_point.x(),
                y: start_point.y(),
            },
            Coord {
                x: end_point.x(),
                y: end_point.y(),
            },
        ];
        let distance = planar_distance(start_point, end_point);

        Ok(Route::computed(serialize_line(&coords), distance, SERVICE)
            .with_endpoints(start.id, end.id))
    }

    /// Pure no-op: the direct estimate has nothing to re-optimize.
    async fn recalculate_path(
        &self,
        current: Route,
        _incident: &Incident,
    ) -> Result<Route, RoutingError> {
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FixtureGraph;
    use courier_core::IncidentKind;

    #[tokio::test]
    async fn three_four_five_triangle() {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let b = FixtureGraph::hub_at("B", 3.0, 4.0);

        let route = DirectStrategy::new()
            .compute_optimal_path(&a, &b, None)
            .await
            .unwrap();

        assert_eq!(route.total_distance_km, 5.0);
        assert_eq!(route.estimated_duration_minutes, 50);
        assert_eq!(route.geometry, "LINESTRING (0 0, 3 4)");
        assert_eq!(route.routing_service, "BASIC");
        assert!(route.is_active);
        assert_eq!(route.start_hub, Some(a.id));
        assert_eq!(route.end_hub, Some(b.id));
    }

    #[tokio::test]
    async fn same_hub_duplicates_coordinate_with_zero_distance() {
        let a = FixtureGraph::hub_at("A", 2.0, 2.0);

        let route = DirectStrategy::new()
            .compute_optimal_path(&a, &a, None)
            .await
            .unwrap();

        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_duration_minutes, 0);
        assert_eq!(route.geometry, "LINESTRING (2 2, 2 2)");
    }

    #[tokio::test]
    async fn malformed_location_surfaces_geometry_error() {
        let mut a = FixtureGraph::hub_at("A", 0.0, 0.0);
        a.location = "not wkt".to_string();
        let b = FixtureGraph::hub_at("B", 1.0, 1.0);

        let err = DirectStrategy::new()
            .compute_optimal_path(&a, &b, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::Geometry(_)));
    }

    #[tokio::test]
    async fn recalculation_returns_input_unchanged() {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let b = FixtureGraph::hub_at("B", 3.0, 4.0);
        let strategy = DirectStrategy::new();
        let route = strategy.compute_optimal_path(&a, &b, None).await.unwrap();

        let incident = Incident::new(IncidentKind::RoadClosure, "bridge out");
        let unchanged = strategy
            .recalculate_path(route.clone(), &incident)
            .await
            .unwrap();

        assert_eq!(unchanged, route);
    }
}
