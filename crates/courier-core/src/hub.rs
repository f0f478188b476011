//! # Hub Graph Entities
//!
//! A [`Hub`] is a fixed geographic point in the routing graph; a
//! [`HubConnection`] is a weighted link between two hubs. Both are
//! read-only inputs to graph search — the routing core never mutates
//! them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{self, GeometryError};
use crate::ident::HubId;
use geo_types::Point;

/// A fixed geographic point in the routing graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    /// Unique hub identifier.
    pub id: HubId,
    /// Human-readable hub name.
    pub name: String,
    /// Hub location as WKT `POINT` text (x = longitude, y = latitude).
    pub location: String,
}

impl Hub {
    /// Parse this hub's stored location into a planar point.
    pub fn point(&self) -> Result<Point<f64>, GeometryError> {
        geom::parse_point(&self.location)
    }
}

/// A weighted link between two hubs.
///
/// System invariant: connections are traversable in both directions.
/// Graph search treats the `from`/`to` roles as storage order only, not
/// as a direction restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConnection {
    /// Unique connection identifier.
    pub id: Uuid,
    /// Hub on one end of the connection.
    pub from_hub: HubId,
    /// Hub on the other end of the connection.
    pub to_hub: HubId,
    /// Traversal cost. A missing weight means zero cost, not an error.
    pub weight: Option<f64>,
}

impl HubConnection {
    /// The traversal cost of this connection, defaulting missing weights to zero.
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_point_parses_stored_location() {
        let hub = Hub {
            id: HubId::new(),
            name: "Depot North".to_string(),
            location: "POINT (11.5 3.85)".to_string(),
        };
        let p = hub.point().unwrap();
        assert_eq!(p.x(), 11.5);
        assert_eq!(p.y(), 3.85);
    }

    #[test]
    fn hub_point_surfaces_malformed_location() {
        let hub = Hub {
            id: HubId::new(),
            name: "Broken".to_string(),
            location: "florp".to_string(),
        };
        assert!(hub.point().is_err());
    }

    #[test]
    fn missing_weight_is_zero_cost() {
        let conn = HubConnection {
            id: Uuid::new_v4(),
            from_hub: HubId::new(),
            to_hub: HubId::new(),
            weight: None,
        };
        assert_eq!(conn.cost(), 0.0);
    }
}
