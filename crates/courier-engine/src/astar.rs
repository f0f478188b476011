//! # Heuristic Search Strategy
//!
//! Best-first (A*) search over the same hub/connection model as the
//! Dijkstra strategy, prioritizing expansion by accumulated cost plus
//! the planar distance to the goal. Relaxation and path reconstruction
//! follow the same discipline; only the expansion order differs.

use std::sync::Arc;

use async_trait::async_trait;

use courier_core::{
    ConnectionAccess, Hub, HubAccess, Incident, Route, RoutingConstraints, RoutingError,
};

use crate::snapshot::{best_first_path, GraphSnapshot};
use crate::strategy::{recompute_for_incident, RoutingStrategy};

/// Service tag stamped on routes produced by this strategy.
pub const SERVICE: &str = "ASTAR";

/// Best-first search with a planar-distance-to-goal heuristic.
pub struct AStarStrategy {
    hubs: Arc<dyn HubAccess>,
    connections: Arc<dyn ConnectionAccess>,
}

impl AStarStrategy {
    /// Create the strategy with its graph accessors.
    pub fn new(hubs: Arc<dyn HubAccess>, connections: Arc<dyn ConnectionAccess>) -> Self {
        Self { hubs, connections }
    }
}

#[async_trait]
impl RoutingStrategy for AStarStrategy {
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
            best_first_path(&graph, start.id, end.id).ok_or(RoutingError::NoPathFound {
                start: start.id,
                end: end.id,
            })?;

        tracing::debug!(
            hops = outcome.path.len(),
            cost = outcome.total_cost,
            "best-first path found"
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
    use crate::dijkstra::DijkstraStrategy;
    use crate::testkit::FixtureGraph;

    /// Diamond graph with planar-distance weights, so the heuristic is
    /// admissible and A* must match Dijkstra exactly.
    fn diamond() -> (Arc<FixtureGraph>, Hub, Hub) {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let n = FixtureGraph::hub_at("N", 1.0, 1.0);
        let s = FixtureGraph::hub_at("S", 1.0, -1.0);
        let z = FixtureGraph::hub_at("Z", 2.0, 0.0);
        let mut graph = FixtureGraph {
            hubs: vec![a.clone(), n.clone(), s.clone(), z.clone()],
            connections: Vec::new(),
        };
        let diag = 2.0_f64.sqrt();
        graph.connect(a.id, n.id, Some(diag));
        graph.connect(n.id, z.id, Some(diag));
        graph.connect(a.id, s.id, Some(diag));
        graph.connect(s.id, z.id, Some(diag * 0.9));
        (Arc::new(graph), a, z)
    }

    #[tokio::test]
    async fn matches_dijkstra_on_admissible_weights() {
        let (graph, a, z) = diamond();
        let astar = AStarStrategy::new(graph.clone(), graph.clone());
        let dijkstra = DijkstraStrategy::new(graph.clone(), graph.clone());

        let via_astar = astar.compute_optimal_path(&a, &z, None).await.unwrap();
        let via_dijkstra = dijkstra.compute_optimal_path(&a, &z, None).await.unwrap();

        assert!((via_astar.total_distance_km - via_dijkstra.total_distance_km).abs() < 1e-9);
        assert_eq!(via_astar.geometry, via_dijkstra.geometry);
        assert_eq!(via_astar.routing_service, "ASTAR");
    }

    #[tokio::test]
    async fn unreachable_goal_fails_with_no_path_found() {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let z = FixtureGraph::hub_at("Z", 5.0, 5.0);
        let graph = Arc::new(FixtureGraph {
            hubs: vec![a.clone(), z.clone()],
            connections: Vec::new(),
        });

        let err = AStarStrategy::new(graph.clone(), graph)
            .compute_optimal_path(&a, &z, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::NoPathFound { .. }));
    }

    #[tokio::test]
    async fn start_equals_end_duplicates_coordinate() {
        let (graph, a, _) = diamond();
        let route = AStarStrategy::new(graph.clone(), graph)
            .compute_optimal_path(&a, &a, None)
            .await
            .unwrap();
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.geometry, "LINESTRING (0 0, 0 0)");
    }
}
