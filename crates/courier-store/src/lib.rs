//! # courier-store — Storage Backends
//!
//! Implementations of the `courier-core` storage contracts
//! ([`courier_core::HubAccess`], [`courier_core::ConnectionAccess`],
//! [`courier_core::RouteStore`]) plus the write-side [`HubRepository`]
//! used by the API to build the routing graph.
//!
//! Two backends:
//!
//! - [`memory`] — thread-safe in-memory stores. The default when
//!   `DATABASE_URL` is absent, and the fixture backend for tests.
//! - [`pg`] — PostgreSQL persistence via SQLx with embedded migrations.
//!
//! Both backends implement the same traits, so the routing core and the
//! API are wired identically either way.

pub mod memory;
pub mod pg;
mod repository;

pub use memory::{MemoryGraphStore, MemoryRouteStore};
pub use pg::{init_pool, PgGraphStore, PgRouteStore};
pub use repository::HubRepository;
