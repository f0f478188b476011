//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Holds the route orchestrator and the
//! write-side hub repository; both are trait objects so the same wiring
//! serves the in-memory and PostgreSQL backends.

use std::sync::Arc;

use courier_engine::RouteService;
use courier_store::HubRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route calculation, recalculation, and lookup.
    pub service: Arc<RouteService>,
    /// Hub and connection creation.
    pub hub_repo: Arc<dyn HubRepository>,
}

impl AppState {
    /// Wire the state from its collaborators.
    pub fn new(service: Arc<RouteService>, hub_repo: Arc<dyn HubRepository>) -> Self {
        Self { service, hub_repo }
    }
}
