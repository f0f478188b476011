//! # In-Memory Stores
//!
//! Thread-safe in-memory backends for development and tests. All lock
//! operations are synchronous (the RwLock is `parking_lot`, not
//! `tokio::sync`) because no lock is ever held across an `.await` point,
//! and `parking_lot::RwLock` is non-poisonable.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use courier_core::{
    parse_point, ConnectionAccess, Hub, HubAccess, HubConnection, HubId, Route, RouteId,
    RouteStore, RoutingError,
};

use crate::repository::HubRepository;

// ─── Generic Store ──────────────────────────────────────────────────────

/// Thread-safe, cloneable in-memory key-value store.
#[derive(Debug)]
struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    fn contains(&self, id: &Uuid) -> bool {
        self.data.read().contains_key(id)
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Graph Store ────────────────────────────────────────────────────────

/// In-memory hub and connection storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraphStore {
    hubs: Store<Hub>,
    connections: Store<HubConnection>,
}

impl MemoryGraphStore {
    /// Create an empty graph store.
    pub fn new() -> Self {
        Self {
            hubs: Store::new(),
            connections: Store::new(),
        }
    }
}

#[async_trait]
impl HubAccess for MemoryGraphStore {
    async fn hub(&self, id: HubId) -> Result<Hub, RoutingError> {
        self.hubs
            .get(id.as_uuid())
            .ok_or(RoutingError::HubNotFound { id })
    }

    async fn hubs_with_location(&self) -> Result<Vec<Hub>, RoutingError> {
        Ok(self
            .hubs
            .list()
            .into_iter()
            .filter(|hub| !hub.location.trim().is_empty())
            .collect())
    }
}

#[async_trait]
impl ConnectionAccess for MemoryGraphStore {
    async fn connections(&self) -> Result<Vec<HubConnection>, RoutingError> {
        Ok(self.connections.list())
    }
}

#[async_trait]
impl HubRepository for MemoryGraphStore {
    async fn create_hub(&self, name: String, location: String) -> Result<Hub, RoutingError> {
        parse_point(&location)?;
        let hub = Hub {
            id: HubId::new(),
            name,
            location,
        };
        self.hubs.insert(*hub.id.as_uuid(), hub.clone());
        Ok(hub)
    }

    async fn create_connection(
        &self,
        from_hub: HubId,
        to_hub: HubId,
        weight: Option<f64>,
    ) -> Result<HubConnection, RoutingError> {
        for id in [from_hub, to_hub] {
            if !self.hubs.contains(id.as_uuid()) {
                return Err(RoutingError::HubNotFound { id });
            }
        }
        let connection = HubConnection {
            id: Uuid::new_v4(),
            from_hub,
            to_hub,
            weight,
        };
        self.connections.insert(connection.id, connection.clone());
        Ok(connection)
    }

    async fn list_hubs(&self) -> Result<Vec<Hub>, RoutingError> {
        Ok(self.hubs.list())
    }
}

// ─── Route Store ────────────────────────────────────────────────────────

/// In-memory route persistence. Saving assigns identity and creation
/// time when absent, so a freshly computed route comes back addressable.
#[derive(Debug, Clone)]
pub struct MemoryRouteStore {
    routes: Store<Route>,
}

impl MemoryRouteStore {
    /// Create an empty route store.
    pub fn new() -> Self {
        Self {
            routes: Store::new(),
        }
    }
}

impl Default for MemoryRouteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteStore for MemoryRouteStore {
    async fn save(&self, mut route: Route) -> Result<Route, RoutingError> {
        let id = *route.id.get_or_insert_with(RouteId::new);
        route.created_at.get_or_insert_with(chrono::Utc::now);
        self.routes.insert(*id.as_uuid(), route.clone());
        Ok(route)
    }

    async fn find(&self, id: RouteId) -> Result<Route, RoutingError> {
        self.routes
            .get(id.as_uuid())
            .ok_or(RoutingError::RouteNotFound { id })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────
