//! # Error Types — Routing Failure Taxonomy
//!
//! The failure modes of route computation, using `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Not-found failures carry the identifier that missed.
//! - `NoPathFound` is a definitive graph-search verdict, never retried.
//! - `Upstream` covers every external-routing-service failure mode
//!   (unreachable, malformed, zero candidates) with a diagnostic reason;
//!   callers may retry at the request layer, the core never does.
//! - Partial failures (e.g. persistence failing after a successful
//!   computation) surface as-is; no compensating rollback is attempted.

use thiserror::Error;

use crate::geom::GeometryError;
use crate::ident::{HubId, RouteId};

/// Top-level error type for route computation and orchestration.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// A start or end hub identifier did not resolve.
    #[error("hub not found: {id}")]
    HubNotFound {
        /// The identifier that missed.
        id: HubId,
    },

    /// A recalculation target did not resolve.
    #[error("route not found: {id}")]
    RouteNotFound {
        /// The identifier that missed.
        id: RouteId,
    },

    /// Graph search exhausted without reaching the destination.
    #[error("no path found between {start} and {end}")]
    NoPathFound {
        /// Origin hub.
        start: HubId,
        /// Destination hub.
        end: HubId,
    },

    /// The external routing service errored, returned no candidates, or
    /// produced an unparseable response.
    #[error("upstream routing failure: {reason}")]
    Upstream {
        /// Diagnostic context for the failure.
        reason: String,
    },

    /// Stored geometry text could not be parsed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The persistence layer failed.
    #[error("storage error: {reason}")]
    Storage {
        /// Diagnostic context for the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_identifiers() {
        let id = HubId::new();
        let err = RoutingError::HubNotFound { id };
        assert!(err.to_string().contains(&id.as_uuid().to_string()));
    }

    #[test]
    fn geometry_errors_convert() {
        let geom_err = GeometryError::MalformedPoint {
            text: "florp".to_string(),
        };
        let err: RoutingError = geom_err.into();
        assert!(matches!(err, RoutingError::Geometry(_)));
    }
}
