//! # courier-engine — Route Computation Core
//!
//! The interchangeable-algorithm core of the Courier stack:
//!
//! - [`strategy::RoutingStrategy`] — the polymorphic capability every
//!   algorithm implements: compute an optimal path between two hubs, and
//!   recalculate an existing route after an incident while preserving its
//!   identity.
//! - [`direct::DirectStrategy`] — two-point planar estimate.
//! - [`dijkstra::DijkstraStrategy`] — weighted-graph shortest path.
//! - [`astar::AStarStrategy`] — best-first search with a planar-distance
//!   heuristic over the same graph model.
//! - [`registry::StrategyRegistry`] — deterministic algorithm-identifier →
//!   strategy dispatch, validated complete at startup.
//! - [`service::RouteService`] — the orchestrator that resolves hubs,
//!   selects a strategy, executes it, attaches parcel linkage, and
//!   delegates persistence.
//!
//! The external-service strategy lives in `courier-osrm`, which implements
//! the same trait against the OSRM HTTP API.
//!
//! ## Concurrency
//!
//! Strategies are stateless beyond injected `Arc` collaborators and safe
//! for concurrent reuse. Each computation loads a fresh graph snapshot;
//! search state (distance map, predecessor map, priority queue) is local
//! to the call.

pub mod astar;
pub mod dijkstra;
pub mod direct;
pub mod registry;
pub mod service;
pub mod snapshot;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testkit;

pub use registry::{RegistryError, StrategyRegistry, StrategyRegistryBuilder};
pub use service::RouteService;
pub use strategy::{recompute_for_incident, RoutingStrategy};
