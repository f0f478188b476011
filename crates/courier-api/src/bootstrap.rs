//! # Application Bootstrap
//!
//! Wires the storage backend, strategy registry, and route orchestrator
//! into an [`AppState`] from environment configuration.
//!
//! ## Environment
//!
//! | Variable            | Default                                          | Purpose                       |
//! |---------------------|--------------------------------------------------|-------------------------------|
//! | `PORT`              | `8080`                                           | HTTP listen port              |
//! | `DATABASE_URL`      | unset (in-memory stores)                         | PostgreSQL connection string  |
//! | `OSRM_API_URL`      | `http://router.project-osrm.org/route/v1/driving`| OSRM route endpoint           |
//! | `OSRM_TIMEOUT_SECS` | `30`                                             | OSRM request timeout          |

use std::sync::Arc;

use sqlx::PgPool;

use courier_core::{ConnectionAccess, HubAccess, RouteAlgorithm, RouteStore};
use courier_engine::{
    astar::AStarStrategy, dijkstra::DijkstraStrategy, direct::DirectStrategy, RouteService,
    StrategyRegistry,
};
use courier_osrm::{OsrmClient, OsrmConfig, OsrmStrategy};
use courier_store::{HubRepository, MemoryGraphStore, MemoryRouteStore, PgGraphStore, PgRouteStore};

use crate::state::AppState;

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port.
    pub port: u16,
    /// OSRM route endpoint, including the routing profile.
    pub osrm_url: String,
    /// OSRM request timeout in seconds.
    pub osrm_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let osrm_url = std::env::var("OSRM_API_URL")
            .unwrap_or_else(|_| "http://router.project-osrm.org/route/v1/driving".to_string());
        let osrm_timeout_secs = std::env::var("OSRM_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);
        Self {
            port,
            osrm_url,
            osrm_timeout_secs,
        }
    }
}

/// Failures while wiring the application.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("OSRM client: {0}")]
    Osrm(#[from] courier_osrm::client::OsrmError),
    #[error("strategy registry: {0}")]
    Registry(#[from] courier_engine::RegistryError),
}

/// Build the application state on the configured storage backend.
///
/// With a pool the stores are PostgreSQL-backed; without one everything
/// lives in memory and is lost on restart.
pub fn bootstrap(config: &AppConfig, pool: Option<PgPool>) -> Result<AppState, BootstrapError> {
    match pool {
        Some(pool) => {
            let graph = Arc::new(PgGraphStore::new(pool.clone()));
            let routes = Arc::new(PgRouteStore::new(pool));
            wire(config, graph.clone(), graph.clone(), routes, graph)
        }
        None => {
            let graph = Arc::new(MemoryGraphStore::new());
            let routes = Arc::new(MemoryRouteStore::new());
            wire(config, graph.clone(), graph.clone(), routes, graph)
        }
    }
}

/// Assemble the registry and orchestrator over abstract stores.
pub fn wire(
    config: &AppConfig,
    hubs: Arc<dyn HubAccess>,
    connections: Arc<dyn ConnectionAccess>,
    routes: Arc<dyn RouteStore>,
    hub_repo: Arc<dyn HubRepository>,
) -> Result<AppState, BootstrapError> {
    let osrm_client = Arc::new(OsrmClient::new(OsrmConfig {
        base_url: config.osrm_url.clone(),
        timeout_secs: config.osrm_timeout_secs,
    })?);

    let registry = StrategyRegistry::builder()
        .register(
            RouteAlgorithm::Basic,
            Arc::new(DirectStrategy::new()),
        )?
        .register(
            RouteAlgorithm::Dijkstra,
            Arc::new(DijkstraStrategy::new(hubs.clone(), connections.clone())),
        )?
        .register(
            RouteAlgorithm::AStar,
            Arc::new(AStarStrategy::new(hubs.clone(), connections)),
        )?
        .register(
            RouteAlgorithm::Osrm,
            Arc::new(OsrmStrategy::new(osrm_client, hubs.clone())),
        )?
        .build()?;

    let service = Arc::new(RouteService::new(hubs, routes, registry));
    Ok(AppState::new(service, hub_repo))
}
