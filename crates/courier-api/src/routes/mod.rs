//! # Route Handlers
//!
//! API-layer DTOs and handlers, grouped by domain:
//!
//! - [`hubs`] — routing-graph management (hubs and connections)
//! - [`routing`] — route calculation, recalculation, and lookup

pub mod hubs;
pub mod routing;
