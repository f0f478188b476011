//! # Strategy Registry
//!
//! Deterministic dispatch from a requested algorithm identifier to
//! exactly one strategy instance. The registry is built once at startup
//! from a mapping of [`RouteAlgorithm`] to strategy; a missing
//! registration is a deployment defect and fails the build — it can
//! never surface per-request.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use courier_core::{RouteAlgorithm, RoutingConstraints};

use crate::strategy::RoutingStrategy;

/// Fatal registry misconfiguration, surfaced at startup.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An algorithm has no registered strategy instance.
    #[error("no strategy registered for algorithm {0}")]
    MissingStrategy(RouteAlgorithm),

    /// An algorithm was registered twice.
    #[error("duplicate strategy registration for algorithm {0}")]
    DuplicateStrategy(RouteAlgorithm),
}

/// Builder collecting algorithm → strategy registrations.
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    entries: HashMap<RouteAlgorithm, Arc<dyn RoutingStrategy>>,
}

impl std::fmt::Debug for StrategyRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistryBuilder")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StrategyRegistryBuilder {
    /// Register a strategy for an algorithm. Each algorithm may be
    /// registered exactly once.
    pub fn register(
        mut self,
        algorithm: RouteAlgorithm,
        strategy: Arc<dyn RoutingStrategy>,
    ) -> Result<Self, RegistryError> {
        if self.entries.insert(algorithm, strategy).is_some() {
            return Err(RegistryError::DuplicateStrategy(algorithm));
        }
        Ok(self)
    }

    /// Validate completeness and produce the registry.
    ///
    /// Fails if any algorithm in [`RouteAlgorithm::ALL`] lacks a
    /// registration.
    pub fn build(mut self) -> Result<StrategyRegistry, RegistryError> {
        let mut take = |algorithm: RouteAlgorithm| {
            self.entries
                .remove(&algorithm)
                .ok_or(RegistryError::MissingStrategy(algorithm))
        };
        Ok(StrategyRegistry {
            basic: take(RouteAlgorithm::Basic)?,
            dijkstra: take(RouteAlgorithm::Dijkstra)?,
            astar: take(RouteAlgorithm::AStar)?,
            osrm: take(RouteAlgorithm::Osrm)?,
        })
    }
}

/// Complete algorithm → strategy mapping.
///
/// Construction via [`StrategyRegistry::builder`] proves every algorithm
/// is covered, so selection is infallible.
pub struct StrategyRegistry {
    basic: Arc<dyn RoutingStrategy>,
    dijkstra: Arc<dyn RoutingStrategy>,
    astar: Arc<dyn RoutingStrategy>,
    osrm: Arc<dyn RoutingStrategy>,
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry").finish_non_exhaustive()
    }
}

impl StrategyRegistry {
    /// Start building a registry.
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::default()
    }

    /// Select the strategy for the given constraints.
    ///
    /// Absent constraints — or an absent/unknown algorithm identifier —
    /// resolve to the direct estimate.
    pub fn select(&self, constraints: Option<&RoutingConstraints>) -> Arc<dyn RoutingStrategy> {
        let algorithm = constraints
            .map(RoutingConstraints::resolved_algorithm)
            .unwrap_or(RouteAlgorithm::Basic);
        self.strategy_for(algorithm)
    }

    /// The registered strategy for an algorithm.
    pub fn strategy_for(&self, algorithm: RouteAlgorithm) -> Arc<dyn RoutingStrategy> {
        match algorithm {
            RouteAlgorithm::Basic => Arc::clone(&self.basic),
            RouteAlgorithm::Dijkstra => Arc::clone(&self.dijkstra),
            RouteAlgorithm::AStar => Arc::clone(&self.astar),
            RouteAlgorithm::Osrm => Arc::clone(&self.osrm),
        }
    }
}
