//! Test doubles for the collaborator contracts.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use courier_core::{
    ConnectionAccess, Hub, HubAccess, HubConnection, HubId, Route, RouteId, RouteStore,
    RoutingError,
};

/// Fixed in-memory hub graph for strategy tests.
#[derive(Debug, Default)]
pub struct FixtureGraph {
    pub hubs: Vec<Hub>,
    pub connections: Vec<HubConnection>,
}

impl FixtureGraph {
    pub fn hub_at(name: &str, x: f64, y: f64) -> Hub {
        Hub {
            id: HubId::new(),
            name: name.to_string(),
            location: format!("POINT ({x} {y})"),
        }
    }

    pub fn connect(&mut self, from: HubId, to: HubId, weight: Option<f64>) {
        self.connections.push(HubConnection {
            id: Uuid::new_v4(),
            from_hub: from,
            to_hub: to,
            weight,
        });
    }
}

#[async_trait]
impl HubAccess for FixtureGraph {
    async fn hub(&self, id: HubId) -> Result<Hub, RoutingError> {
        self.hubs
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or(RoutingError::HubNotFound { id })
    }

    async fn hubs_with_location(&self) -> Result<Vec<Hub>, RoutingError> {
        Ok(self.hubs.clone())
    }
}

#[async_trait]
impl ConnectionAccess for FixtureGraph {
    async fn connections(&self) -> Result<Vec<HubConnection>, RoutingError> {
        Ok(self.connections.clone())
    }
}

/// Minimal in-memory route store for orchestrator tests.
#[derive(Debug, Default)]
pub struct FixtureRoutes {
    routes: RwLock<HashMap<RouteId, Route>>,
}

#[async_trait]
impl RouteStore for FixtureRoutes {
    async fn save(&self, mut route: Route) -> Result<Route, RoutingError> {
        let id = route.id.unwrap_or_else(RouteId::new);
        route.id = Some(id);
        if route.created_at.is_none() {
            route.created_at = Some(chrono::Utc::now());
        }
        self.routes.write().insert(id, route.clone());
        Ok(route)
    }

    async fn find(&self, id: RouteId) -> Result<Route, RoutingError> {
        self.routes
            .read()
            .get(&id)
            .cloned()
            .ok_or(RoutingError::RouteNotFound { id })
    }
}
