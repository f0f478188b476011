//! # Graph Shortest-Path Strategy
//!
//! Loads the full hub and connection sets and runs Dijkstra's algorithm
//! over them (see [`crate::snapshot`] for the search itself and the
//! undirected-traversal invariant). Connection weights are the costs;
//! the finalized path cost becomes the route distance and drives the
//! shared duration rule.

use std::sync::Arc;

use async_trait::async_trait;

use courier_core::{
    ConnectionAccess, Hub, HubAccess, Incident, Route, RoutingConstraints, RoutingError,
};

use crate::snapshot::{shortest_path, GraphSnapshot};
use crate::strategy::{recompute_for_incident, RoutingStrategy};

/// Service tag stamped on routes produced by this strategy.
pub const SERVICE: &str = "DIJKSTRA";

/// Weighted-graph shortest path over hub connections.
pub struct DijkstraStrategy {
    hubs: Arc<dyn HubAccess>,
    connections: Arc<dyn ConnectionAccess>,
}

impl DijkstraStrategy {
    /// Create the strategy with its graph accessors.
    pub fn new(hubs: Arc<dyn HubAccess>, connections: Arc<dyn ConnectionAccess>) -> Self {
        Self { hubs, connections }
    }
}

#[async_trait]
impl RoutingStrategy for DijkstraStrategy {
    fn service_name(&self) -> &'static str {
        SERVICE
    }

    async fn compute_optimal_path(
        &self,
        start: &Hub,
        end: &Hub,
        _constraints: Option<&RoutingConstraints>,
    ) -> Result<Route, RoutingError> {
        let mut graph = GraphSnapshot::load(&*self.hubs, &*self.connections).await?;
        graph.ensure_hub(start)?;
        graph.ensure_hub(end)?;

        let outcome =
            shortest_path(&graph, start.id, end.id).ok_or(RoutingError::NoPathFound {
                start: start.id,
                end: end.id,
            })?;

        tracing::debug!(
            hops = outcome.path.len(),
            cost = outcome.total_cost,
            "shortest path found"
        );

        Ok(graph
            .route_for_path(&outcome.path, outcome.total_cost, SERVICE)?
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FixtureGraph;
    use courier_core::{IncidentKind, ParcelId, RouteId};

    fn line_graph() -> (Arc<FixtureGraph>, Hub, Hub, Hub) {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let b = FixtureGraph::hub_at("B", 1.0, 0.0);
        let c = FixtureGraph::hub_at("C", 2.0, 0.0);
        let mut graph = FixtureGraph {
            hubs: vec![a.clone(), b.clone(), c.clone()],
            connections: Vec::new(),
        };
        graph.connect(a.id, b.id, Some(2.0));
        graph.connect(b.id, c.id, Some(3.0));
        (Arc::new(graph), a, b, c)
    }

    fn strategy(graph: &Arc<FixtureGraph>) -> DijkstraStrategy {
        DijkstraStrategy::new(graph.clone(), graph.clone())
    }

    #[tokio::test]
    async fn two_hop_path_with_summed_weights() {
        let (graph, a, _b, c) = line_graph();
        let route = strategy(&graph)
            .compute_optimal_path(&a, &c, None)
            .await
            .unwrap();

        assert_eq!(route.total_distance_km, 5.0);
        assert_eq!(route.estimated_duration_minutes, 50);
        // Path runs A → B → C.
        assert_eq!(route.geometry, "LINESTRING (0 0, 1 0, 2 0)");
        assert_eq!(route.routing_service, "DIJKSTRA");
        assert_eq!(route.start_hub, Some(a.id));
        assert_eq!(route.end_hub, Some(c.id));
    }

    #[tokio::test]
    async fn disconnected_pair_fails_with_no_path_found() {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let c = FixtureGraph::hub_at("C", 9.0, 9.0);
        let graph = Arc::new(FixtureGraph {
            hubs: vec![a.clone(), c.clone()],
            connections: Vec::new(),
        });

        let err = strategy(&graph)
            .compute_optimal_path(&a, &c, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::NoPathFound { .. }));
    }

    #[tokio::test]
    async fn start_equals_end_yields_two_identical_coordinates() {
        let (graph, a, _, _) = line_graph();
        let route = strategy(&graph)
            .compute_optimal_path(&a, &a, None)
            .await
            .unwrap();

        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.geometry, "LINESTRING (0 0, 0 0)");
    }

    #[tokio::test]
    async fn missing_weight_is_free_traversal() {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let b = FixtureGraph::hub_at("B", 1.0, 0.0);
        let mut fixture = FixtureGraph {
            hubs: vec![a.clone(), b.clone()],
            connections: Vec::new(),
        };
        fixture.connect(a.id, b.id, None);
        let graph = Arc::new(fixture);

        let route = strategy(&graph)
            .compute_optimal_path(&a, &b, None)
            .await
            .unwrap();
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_duration_minutes, 0);
    }

    #[tokio::test]
    async fn recalculation_without_linkage_is_a_strict_noop() {
        let (graph, _, _, _) = line_graph();
        let legacy = Route::computed("LINESTRING (0 0, 1 1)".to_string(), 1.0, SERVICE);
        assert!(!legacy.has_endpoint_linkage());

        let incident = Incident::new(IncidentKind::Congestion, "stale record");
        let unchanged = strategy(&graph)
            .recalculate_path(legacy.clone(), &incident)
            .await
            .unwrap();

        assert_eq!(unchanged, legacy);
    }

    #[tokio::test]
    async fn recalculation_preserves_identity_and_linkage() {
        let (graph, a, _, c) = line_graph();
        let strategy = strategy(&graph);

        let mut route = strategy.compute_optimal_path(&a, &c, None).await.unwrap();
        route.id = Some(RouteId::new());
        route.parcel_id = Some(ParcelId::new());
        route.created_at = Some(chrono::Utc::now());
        let before = route.clone();

        let incident = Incident::new(IncidentKind::RoadClosure, "detour");
        let updated = strategy.recalculate_path(route, &incident).await.unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.parcel_id, before.parcel_id);
        assert_eq!(updated.driver_id, before.driver_id);
        assert_eq!(updated.start_hub, before.start_hub);
        assert_eq!(updated.end_hub, before.end_hub);
        assert_eq!(updated.created_at, before.created_at);
        // Same graph, so the recomputed metrics match as well.
        assert_eq!(updated.total_distance_km, before.total_distance_km);
    }
}
