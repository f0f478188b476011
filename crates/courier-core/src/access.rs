//! # Collaborator Contracts
//!
//! The async seams between the routing core and its external
//! collaborators: hub/connection storage on one side, route persistence
//! on the other. Implementations must be `Send + Sync` so they can be
//! shared across async tasks behind an `Arc`; every trait here is
//! object-safe to support runtime wiring.
//!
//! The core only needs these read/write contracts — how they are backed
//! (in-memory, PostgreSQL) is a `courier-store` concern.

use async_trait::async_trait;

use crate::error::RoutingError;
use crate::hub::{Hub, HubConnection};
use crate::ident::{HubId, RouteId};
use crate::route::Route;

/// Read access to the hub set.
#[async_trait]
pub trait HubAccess: Send + Sync {
    /// Fetch a single hub by identifier.
    ///
    /// Fails with [`RoutingError::HubNotFound`] when the identifier does
    /// not resolve.
    async fn hub(&self, id: HubId) -> Result<Hub, RoutingError>;

    /// All hubs that carry a location, for graph search.
    async fn hubs_with_location(&self) -> Result<Vec<Hub>, RoutingError>;
}

/// Read access to the connection (edge) set.
#[async_trait]
pub trait ConnectionAccess: Send + Sync {
    /// The full connection set, loaded fresh per graph search.
    async fn connections(&self) -> Result<Vec<HubConnection>, RoutingError>;
}

/// Route persistence.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Persist a route.
    ///
    /// Assigns `id` and `created_at` when absent; otherwise updates the
    /// existing record by identity. Returns the persisted route.
    async fn save(&self, route: Route) -> Result<Route, RoutingError>;

    /// Fetch a route by identifier.
    ///
    /// Fails with [`RoutingError::RouteNotFound`] when the identifier
    /// does not resolve.
    async fn find(&self, id: RouteId) -> Result<Route, RoutingError>;
}
