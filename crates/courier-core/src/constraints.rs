//! # Routing Constraints and Algorithm Selection
//!
//! [`RoutingConstraints`] is the optional configuration bag a caller may
//! attach to a route calculation request. The core interprets exactly one
//! field — `algorithm` — and threads everything else through untouched;
//! a concrete strategy may choose to read the extra fields, none
//! currently does.

use serde::{Deserialize, Serialize};

/// The selectable path-computation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteAlgorithm {
    /// Direct two-point estimate between the endpoint coordinates.
    Basic,
    /// Weighted-graph shortest path over hub connections.
    Dijkstra,
    /// Best-first search with a planar-distance heuristic.
    AStar,
    /// Delegation to the external OSRM routing service.
    Osrm,
}

impl RouteAlgorithm {
    /// Every selectable algorithm; the strategy registry must cover all of
    /// these to be considered complete.
    pub const ALL: [RouteAlgorithm; 4] = [Self::Basic, Self::Dijkstra, Self::AStar, Self::Osrm];

    /// Resolve a requested algorithm identifier, case-insensitively.
    ///
    /// `DIJKSTRA`, `ASTAR` and `OSRM` map to their strategies; anything
    /// else — including `BASIC` and the empty string — resolves to
    /// [`RouteAlgorithm::Basic`]. Unknown identifiers are not an error:
    /// the direct estimate is the deterministic default.
    pub fn resolve(identifier: &str) -> Self {
        if identifier.eq_ignore_ascii_case("DIJKSTRA") {
            Self::Dijkstra
        } else if identifier.eq_ignore_ascii_case("ASTAR") {
            Self::AStar
        } else if identifier.eq_ignore_ascii_case("OSRM") {
            Self::Osrm
        } else {
            Self::Basic
        }
    }
}

impl std::fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Basic => "BASIC",
            Self::Dijkstra => "DIJKSTRA",
            Self::AStar => "ASTAR",
            Self::Osrm => "OSRM",
        };
        f.write_str(s)
    }
}

/// Caller-supplied routing constraints.
///
/// Only `algorithm` is recognized by the core; all other fields are
/// captured opaquely and threaded through for strategies that might
/// interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConstraints {
    /// Requested algorithm identifier (e.g. `"dijkstra"`); optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Fields the core does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RoutingConstraints {
    /// The algorithm these constraints resolve to; absent means
    /// [`RouteAlgorithm::Basic`].
    pub fn resolved_algorithm(&self) -> RouteAlgorithm {
        self.algorithm
            .as_deref()
            .map(RouteAlgorithm::resolve)
            .unwrap_or(RouteAlgorithm::Basic)
    }
}
