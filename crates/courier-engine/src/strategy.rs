//! # The Routing Strategy Contract
//!
//! One trait, two operations. Every path-computation algorithm — the
//! direct estimate, the graph searches, the external-service delegate —
//! implements [`RoutingStrategy`] and is selected at request time by the
//! [`crate::registry::StrategyRegistry`].
//!
//! Implementations must be `Send + Sync` so a single instance can be
//! shared behind an `Arc` across concurrent requests. The trait is
//! object-safe to support runtime dispatch.

use async_trait::async_trait;

use courier_core::{Hub, HubAccess, Incident, Route, RoutingConstraints, RoutingError};

/// An interchangeable algorithm for computing a route between two hubs.
#[async_trait]
pub trait RoutingStrategy: Send + Sync {
    /// The tag stamped into [`Route::routing_service`] (e.g. `"DIJKSTRA"`).
    fn service_name(&self) -> &'static str;

    /// Compute an optimal path from `start` to `end`.
    ///
    /// The returned route's geometry begins at `start`'s coordinate and
    /// ends at `end`'s (directly or via intermediate coordinates), its
    /// distance and duration are non-negative, its service tag identifies
    /// this strategy, and its start/end hub linkage is stamped so the
    /// route can later be recalculated. `start` and `end` may be the same
    /// hub, in which case the geometry duplicates the single coordinate
    /// to satisfy the two-coordinate minimum.
    ///
    /// Fails with [`RoutingError::NoPathFound`] when no connecting path
    /// exists, or [`RoutingError::Upstream`] when an external dependency
    /// errors or returns no candidates.
    async fn compute_optimal_path(
        &self,
        start: &Hub,
        end: &Hub,
        constraints: Option<&RoutingConstraints>,
    ) -> Result<Route, RoutingError>;

    /// Recalculate `current` in response to an incident.
    ///
    /// When `current` carries no start/end hub linkage the operation is a
    /// no-op returning the route unchanged — a deliberate fallback for
    /// legacy records, not an error. Otherwise both hubs are re-resolved,
    /// the path recomputed, and the previous route's identity, parcel and
    /// driver linkage, hub linkage, and creation time carried forward
    /// onto the fresh result.
    ///
    /// `incident` is context a concrete strategy may use to bias its
    /// computation; none of the current strategies do.
    async fn recalculate_path(
        &self,
        current: Route,
        incident: &Incident,
    ) -> Result<Route, RoutingError>;
}

/// Recalculation building block for strategies that re-resolve endpoints.
///
/// Implements the contract described on
/// [`RoutingStrategy::recalculate_path`]: no-op without hub linkage,
/// otherwise recompute via `strategy` and merge identity forward.
pub async fn recompute_for_incident(
    strategy: &dyn RoutingStrategy,
    hubs: &dyn HubAccess,
    current: Route,
    incident: &Incident,
) -> Result<Route, RoutingError> {
    let (Some(start_id), Some(end_id)) = (current.start_hub, current.end_hub) else {
        // Legacy routes without stored hub linkage cannot be re-resolved.
        return Ok(current);
    };

    tracing::info!(
        kind = %incident.kind,
        strategy = strategy.service_name(),
        "recalculating route after incident"
    );

    let start = hubs.hub(start_id).await?;
    let end = hubs.hub(end_id).await?;
    let fresh = strategy.compute_optimal_path(&start, &end, None).await?;
    Ok(fresh.preserving_identity_of(&current))
}
