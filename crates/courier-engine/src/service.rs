//! # Route Orchestrator
//!
//! [`RouteService`] drives a complete route computation: resolve the two
//! endpoint hubs, select a strategy, execute it, attach parcel linkage,
//! and delegate persistence. Recalculation fetches the existing route,
//! applies the selected strategy's recalculation, and persists the
//! updated record in place under the same identity.
//!
//! Each operation is one independent async pipeline; no transaction
//! spans the hub fetch, the computation, and the persistence write, and
//! failures surface as-is with no compensating rollback.

use std::sync::Arc;

use courier_core::{
    HubAccess, HubId, Incident, ParcelId, Route, RouteId, RouteStore, RoutingConstraints,
    RoutingError,
};

use crate::registry::StrategyRegistry;

/// Orchestrates strategy selection, execution, and persistence.
pub struct RouteService {
    hubs: Arc<dyn HubAccess>,
    routes: Arc<dyn RouteStore>,
    registry: StrategyRegistry,
}

impl RouteService {
    /// Wire the orchestrator with its collaborators.
    pub fn new(
        hubs: Arc<dyn HubAccess>,
        routes: Arc<dyn RouteStore>,
        registry: StrategyRegistry,
    ) -> Self {
        Self {
            hubs,
            routes,
            registry,
        }
    }

    /// Compute, link, and persist a route between two hubs.
    ///
    /// Fails with [`RoutingError::HubNotFound`] if either endpoint is
    /// missing. Returns the persisted route (identity assigned).
    pub async fn calculate_route(
        &self,
        start: HubId,
        end: HubId,
        parcel: Option<ParcelId>,
        constraints: Option<&RoutingConstraints>,
    ) -> Result<Route, RoutingError> {
        let start_hub = self.hubs.hub(start).await?;
        let end_hub = self.hubs.hub(end).await?;

        let strategy = self.registry.select(constraints);
        tracing::info!(
            strategy = strategy.service_name(),
            %start,
            %end,
            "calculating route"
        );

        let mut route = strategy
            .compute_optimal_path(&start_hub, &end_hub, constraints)
            .await?;
        route.parcel_id = parcel;

        self.routes.save(route).await
    }

    /// Recalculate an existing route in response to an incident.
    ///
    /// Fails with [`RoutingError::RouteNotFound`] if the route is
    /// missing. Constraints are unavailable at this point, so the
    /// default selection policy applies. The updated route is persisted
    /// in place under its existing identity.
    pub async fn recalculate_route(
        &self,
        id: RouteId,
        incident: &Incident,
    ) -> Result<Route, RoutingError> {
        let current = self.routes.find(id).await?;

        let strategy = self.registry.select(None);
        tracing::info!(strategy = strategy.service_name(), %id, "recalculating route");

        let updated = strategy.recalculate_path(current, incident).await?;
        self.routes.save(updated).await
    }

    /// Fetch a persisted route by identifier.
    pub async fn get_route(&self, id: RouteId) -> Result<Route, RoutingError> {
        self.routes.find(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::AStarStrategy;
    use crate::dijkstra::DijkstraStrategy;
    use crate::direct::DirectStrategy;
    use crate::registry::StrategyRegistryBuilder;
    use crate::testkit::{FixtureGraph, FixtureRoutes};
    use courier_core::{IncidentKind, RouteAlgorithm};

    /// Stand-in for the external strategy; orchestrator tests never
    /// select it.
    struct OfflineOsrm;

    #[async_trait::async_trait]
    impl crate::RoutingStrategy for OfflineOsrm {
        fn service_name(&self) -> &'static str {
            "OSRM"
        }

        async fn compute_optimal_path(
            &self,
            _start: &courier_core::Hub,
            _end: &courier_core::Hub,
            _constraints: Option<&RoutingConstraints>,
        ) -> Result<Route, RoutingError> {
            Err(RoutingError::Upstream {
                reason: "offline".to_string(),
            })
        }

        async fn recalculate_path(
            &self,
            current: Route,
            _incident: &Incident,
        ) -> Result<Route, RoutingError> {
            Ok(current)
        }
    }

    fn service_over(graph: Arc<FixtureGraph>) -> RouteService {
        let registry = StrategyRegistry::builder()
            .register(RouteAlgorithm::Basic, Arc::new(DirectStrategy::new()))
            .and_then(|b| {
                b.register(
                    RouteAlgorithm::Dijkstra,
                    Arc::new(DijkstraStrategy::new(graph.clone(), graph.clone())),
                )
            })
            .and_then(|b| {
                b.register(
                    RouteAlgorithm::AStar,
                    Arc::new(AStarStrategy::new(graph.clone(), graph.clone())),
                )
            })
            .and_then(|b| b.register(RouteAlgorithm::Osrm, Arc::new(OfflineOsrm)))
            .and_then(StrategyRegistryBuilder::build)
            .expect("complete registry");

        RouteService::new(graph, Arc::new(FixtureRoutes::default()), registry)
    }

    fn seeded_graph() -> (Arc<FixtureGraph>, HubId, HubId) {
        let a = FixtureGraph::hub_at("A", 0.0, 0.0);
        let b = FixtureGraph::hub_at("B", 3.0, 4.0);
        let (a_id, b_id) = (a.id, b.id);
        let mut graph = FixtureGraph {
            hubs: vec![a, b],
            connections: Vec::new(),
        };
        graph.connect(a_id, b_id, Some(6.0));
        (Arc::new(graph), a_id, b_id)
    }

    #[tokio::test]
    async fn calculates_persists_and_links_parcel() {
        let (graph, a, b) = seeded_graph();
        let service = service_over(graph);
        let parcel = ParcelId::new();

        let route = service
            .calculate_route(a, b, Some(parcel), None)
            .await
            .unwrap();

        assert!(route.id.is_some());
        assert!(route.created_at.is_some());
        assert_eq!(route.parcel_id, Some(parcel));
        assert_eq!(route.routing_service, "BASIC");
        assert_eq!(route.total_distance_km, 5.0);
    }

    #[tokio::test]
    async fn honors_requested_algorithm() {
        let (graph, a, b) = seeded_graph();
        let service = service_over(graph);
        let constraints = RoutingConstraints {
            algorithm: Some("dijkstra".to_string()),
            ..RoutingConstraints::default()
        };

        let route = service
            .calculate_route(a, b, None, Some(&constraints))
            .await
            .unwrap();

        assert_eq!(route.routing_service, "DIJKSTRA");
        assert_eq!(route.total_distance_km, 6.0);
    }

    #[tokio::test]
    async fn missing_hub_fails_before_strategy_runs() {
        let (graph, a, _) = seeded_graph();
        let service = service_over(graph);

        let err = service
            .calculate_route(a, HubId::new(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::HubNotFound { .. }));
    }

    #[tokio::test]
    async fn recalculation_of_missing_route_fails() {
        let (graph, _, _) = seeded_graph();
        let service = service_over(graph);
        let incident = Incident::new(IncidentKind::Other, "anything");

        let err = service
            .recalculate_route(RouteId::new(), &incident)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::RouteNotFound { .. }));
    }

    #[tokio::test]
    async fn recalculation_round_trips_through_the_store() {
        let (graph, a, b) = seeded_graph();
        let service = service_over(graph);

        let saved = service.calculate_route(a, b, None, None).await.unwrap();
        let id = saved.id.expect("persisted identity");

        let incident = Incident::new(IncidentKind::Congestion, "jammed");
        let updated = service.recalculate_route(id, &incident).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(service.get_route(id).await.unwrap(), updated);
    }
}
