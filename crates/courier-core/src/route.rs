//! # Route Entity
//!
//! A [`Route`] is the output of a routing strategy: an ordered coordinate
//! sequence serialized as WKT `LINESTRING` text, plus distance and
//! duration metrics and the tag of the producing strategy.
//!
//! A route is created by a strategy, has parcel linkage attached by the
//! orchestrator, and is persisted by storage (which assigns `id` and
//! `created_at` on first save). Recalculation replaces geometry and
//! metrics while identity and linkage are carried forward through
//! [`Route::preserving_identity_of`] — an explicit merge that yields a
//! fully-formed route, never a partially-updated one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ident::{DriverId, HubId, ParcelId, RouteId};

/// Conversion factor from planar distance to estimated minutes.
///
/// `duration_minutes = floor(distance_km * 10)` — a fixed speed
/// assumption of 6 distance units per hour-equivalent, shared by every
/// strategy that estimates duration from distance.
const MINUTES_PER_DISTANCE_UNIT: f64 = 10.0;

/// A computed travel path between two hubs, with metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Persisted identity; assigned by storage on first save.
    pub id: Option<RouteId>,
    /// Parcel this route was computed for, if any.
    pub parcel_id: Option<ParcelId>,
    /// Driver assigned to this route, if any.
    pub driver_id: Option<DriverId>,
    /// Start hub linkage; required for later recalculation.
    pub start_hub: Option<HubId>,
    /// End hub linkage; required for later recalculation.
    pub end_hub: Option<HubId>,
    /// Path geometry as WKT `LINESTRING` text, at least two coordinates.
    pub geometry: String,
    /// Total distance in kilometers, non-negative.
    pub total_distance_km: f64,
    /// Estimated duration in whole minutes, non-negative.
    pub estimated_duration_minutes: u32,
    /// Tag of the strategy that produced this route (e.g. `DIJKSTRA`).
    pub routing_service: String,
    /// Whether the route is currently active.
    pub is_active: bool,
    /// Creation time; assigned by storage on first save.
    pub created_at: Option<DateTime<Utc>>,
}

impl Route {
    /// Build a freshly computed route with no identity or linkage.
    ///
    /// Duration is derived from the distance via
    /// [`Route::duration_for_distance`]; the route starts active.
    pub fn computed(geometry: String, total_distance_km: f64, routing_service: &str) -> Self {
        Self {
            id: None,
            parcel_id: None,
            driver_id: None,
            start_hub: None,
            end_hub: None,
            geometry,
            total_distance_km,
            estimated_duration_minutes: Self::duration_for_distance(total_distance_km),
            routing_service: routing_service.to_string(),
            is_active: true,
            created_at: None,
        }
    }

    /// The shared duration rule: `floor(distance_km * 10)`.
    ///
    /// The cast truncates, which is floor for the non-negative distances
    /// strategies produce.
    pub fn duration_for_distance(distance_km: f64) -> u32 {
        (distance_km * MINUTES_PER_DISTANCE_UNIT) as u32
    }

    /// Stamp start/end hub linkage onto this route.
    pub fn with_endpoints(mut self, start: HubId, end: HubId) -> Self {
        self.start_hub = Some(start);
        self.end_hub = Some(end);
        self
    }

    /// Override the duration estimate (used when an external service
    /// reports real travel time instead of the distance-derived rule).
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    /// Merge for identity-preserving recalculation: keep this route's
    /// freshly computed geometry and metrics, but carry forward the
    /// previous route's identity, parcel/driver linkage, hub linkage,
    /// and creation time.
    pub fn preserving_identity_of(mut self, previous: &Route) -> Self {
        self.id = previous.id;
        self.parcel_id = previous.parcel_id;
        self.driver_id = previous.driver_id;
        self.start_hub = previous.start_hub;
        self.end_hub = previous.end_hub;
        self.created_at = previous.created_at;
        self
    }

    /// Whether this route carries the hub linkage recalculation needs.
    pub fn has_endpoint_linkage(&self) -> bool {
        self.start_hub.is_some() && self.end_hub.is_some()
    }
}
