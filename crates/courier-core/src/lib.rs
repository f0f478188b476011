//! # courier-core — Foundational Types for the Courier Routing Stack
//!
//! This crate is the leaf of the workspace dependency DAG. It defines the
//! entities the routing engine operates on (hubs, hub connections, routes),
//! the identifier newtypes that keep those entities from being confused
//! with one another, the WKT geometry codec, and the async collaborator
//! contracts (hub accessor, connection accessor, route store) that the
//! engine consumes without knowing how they are backed.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `HubId`, `RouteId`,
//!    `ParcelId`, `DriverId` — you cannot pass a parcel identifier where a
//!    hub identifier is expected.
//!
//! 2. **Geometry as text at the edges, typed in the middle.** Hub locations
//!    and route geometries are stored as WKT text; all computation goes
//!    through [`geom::parse_point`] / [`geom::serialize_line`] so the
//!    text format touches exactly one module.
//!
//! 3. **Identity-preserving recalculation is a merge, not mutation.**
//!    [`Route::preserving_identity_of`] produces a fresh, fully-formed
//!    route; no partially-updated route is ever observable.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `courier-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod access;
pub mod constraints;
pub mod error;
pub mod geom;
pub mod hub;
pub mod incident;
pub mod route;

mod ident;

// Re-export primary types for ergonomic imports.
pub use access::{ConnectionAccess, HubAccess, RouteStore};
pub use constraints::{RouteAlgorithm, RoutingConstraints};
pub use error::RoutingError;
pub use geom::{parse_point, planar_distance, serialize_line, GeometryError};
pub use hub::{Hub, HubConnection};
pub use ident::{DriverId, HubId, ParcelId, RouteId};
pub use incident::{Incident, IncidentKind};
pub use route::Route;
