//! # courier-osrm — External Routing Service Client
//!
//! Delegates path computation to an OSRM (Open Source Routing Machine)
//! deployment. The crate separates three concerns:
//!
//! - [`client`] — the reqwest HTTP client: request formatting
//!   (`lon,lat;lon,lat`, full GeoJSON geometry requested), timeouts, and
//!   status-class error mapping.
//! - [`response`] — the consumed slice of the OSRM response schema and
//!   the explicit boundary conversions: GeoJSON `[lon, lat]` pairs to
//!   internal coordinates (ordinate order preserved, never swapped),
//!   meters to kilometers, seconds to whole minutes.
//! - [`strategy`] — the [`courier_engine::RoutingStrategy`]
//!   implementation wiring the client into the routing core.
//!
//! Every failure mode — unreachable service, HTTP error status, zero
//! candidate routes, malformed body, unparseable hub location — surfaces
//! as [`courier_core::RoutingError::Upstream`]. The core never retries;
//! callers may.

pub mod client;
pub mod response;
pub mod strategy;

pub use client::{OsrmClient, OsrmConfig, OsrmError};
pub use strategy::OsrmStrategy;
