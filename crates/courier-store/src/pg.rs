//! # PostgreSQL Persistence
//!
//! SQLx-backed implementations of the storage contracts. The database
//! layer is optional: when `DATABASE_URL` is unset the service runs on
//! the in-memory stores instead, so [`init_pool`] returns an
//! `Option<PgPool>` rather than failing.
//!
//! Schema lives in embedded migrations under `migrations/` and is
//! applied on pool initialization.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use uuid::Uuid;

use courier_core::{
    parse_point, ConnectionAccess, DriverId, Hub, HubAccess, HubConnection, HubId, ParcelId,
    Route, RouteId, RouteStore, RoutingError,
};

use crate::repository::HubRepository;

/// Initialize the connection pool and run migrations.
///
/// Returns `None` when `DATABASE_URL` is not set (in-memory-only mode).
/// Fails when the URL is set but the connection or a migration fails.
pub async fn init_pool() -> Result<Option<PgPool>, sqlx::Error> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set — running in-memory only mode. \
                 Hubs and routes will not survive restarts."
            );
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(&url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}

fn storage_error(err: sqlx::Error) -> RoutingError {
    RoutingError::Storage {
        reason: err.to_string(),
    }
}

// ─── Row Types ──────────────────────────────────────────────────────────

#[derive(FromRow)]
struct HubRow {
    id: Uuid,
    name: String,
    location: String,
}

impl HubRow {
    fn into_hub(self) -> Hub {
        Hub {
            id: HubId(self.id),
            name: self.name,
            location: self.location,
        }
    }
}

#[derive(FromRow)]
struct ConnectionRow {
    id: Uuid,
    from_hub: Uuid,
    to_hub: Uuid,
    weight: Option<f64>,
}

impl ConnectionRow {
    fn into_connection(self) -> HubConnection {
        HubConnection {
            id: self.id,
            from_hub: HubId(self.from_hub),
            to_hub: HubId(self.to_hub),
            weight: self.weight,
        }
    }
}

#[derive(FromRow)]
struct RouteRow {
    id: Uuid,
    parcel_id: Option<Uuid>,
    driver_id: Option<Uuid>,
    start_hub: Option<Uuid>,
    end_hub: Option<Uuid>,
    geometry: String,
    total_distance_km: f64,
    estimated_duration_minutes: i32,
    routing_service: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl RouteRow {
    fn into_route(self) -> Route {
        Route {
            id: Some(RouteId(self.id)),
            parcel_id: self.parcel_id.map(ParcelId),
            driver_id: self.driver_id.map(DriverId),
            start_hub: self.start_hub.map(HubId),
            end_hub: self.end_hub.map(HubId),
            geometry: self.geometry,
            total_distance_km: self.total_distance_km,
            estimated_duration_minutes: self.estimated_duration_minutes.max(0) as u32,
            routing_service: self.routing_service,
            is_active: self.is_active,
            created_at: Some(self.created_at),
        }
    }
}

// ─── Graph Store ────────────────────────────────────────────────────────

/// PostgreSQL hub and connection storage.
#[derive(Debug, Clone)]
pub struct PgGraphStore {
    pool: PgPool,
}

impl PgGraphStore {
    /// Wrap an initialized pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HubAccess for PgGraphStore {
    async fn hub(&self, id: HubId) -> Result<Hub, RoutingError> {
        sqlx::query_as::<_, HubRow>("SELECT id, name, location FROM hubs WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .map(HubRow::into_hub)
            .ok_or(RoutingError::HubNotFound { id })
    }

    async fn hubs_with_location(&self) -> Result<Vec<Hub>, RoutingError> {
        let rows = sqlx::query_as::<_, HubRow>(
            "SELECT id, name, location FROM hubs WHERE location <> ''",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(rows.into_iter().map(HubRow::into_hub).collect())
    }
}

#[async_trait]
impl ConnectionAccess for PgGraphStore {
    async fn connections(&self) -> Result<Vec<HubConnection>, RoutingError> {
        let rows = sqlx::query_as::<_, ConnectionRow>(
            "SELECT id, from_hub, to_hub, weight FROM hub_connections",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(rows.into_iter().map(ConnectionRow::into_connection).collect())
    }
}

#[async_trait]
impl HubRepository for PgGraphStore {
    async fn create_hub(&self, name: String, location: String) -> Result<Hub, RoutingError> {
        parse_point(&location)?;
        let hub = Hub {
            id: HubId::new(),
            name,
            location,
        };

        sqlx::query("INSERT INTO hubs (id, name, location) VALUES ($1, $2, $3)")
            .bind(hub.id.as_uuid())
            .bind(&hub.name)
            .bind(&hub.location)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(hub)
    }

    async fn create_connection(
        &self,
        from_hub: HubId,
        to_hub: HubId,
        weight: Option<f64>,
    ) -> Result<HubConnection, RoutingError> {
        for id in [from_hub, to_hub] {
            self.hub(id).await?;
        }

        let connection = HubConnection {
            id: Uuid::new_v4(),
            from_hub,
            to_hub,
            weight,
        };

        sqlx::query(
            "INSERT INTO hub_connections (id, from_hub, to_hub, weight) VALUES ($1, $2, $3, $4)",
        )
        .bind(connection.id)
        .bind(connection.from_hub.as_uuid())
        .bind(connection.to_hub.as_uuid())
        .bind(connection.weight)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(connection)
    }

    async fn list_hubs(&self) -> Result<Vec<Hub>, RoutingError> {
        let rows = sqlx::query_as::<_, HubRow>("SELECT id, name, location FROM hubs ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(HubRow::into_hub).collect())
    }
}

// ─── Route Store ────────────────────────────────────────────────────────

/// PostgreSQL route persistence.
#[derive(Debug, Clone)]
pub struct PgRouteStore {
    pool: PgPool,
}

impl PgRouteStore {
    /// Wrap an initialized pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for PgRouteStore {
    async fn save(&self, mut route: Route) -> Result<Route, RoutingError> {
        let id = *route.id.get_or_insert_with(RouteId::new);
        let created_at = *route.created_at.get_or_insert_with(Utc::now);

        sqlx::query(
            "INSERT INTO routes (id, parcel_id, driver_id, start_hub, end_hub, geometry,
                                 total_distance_km, estimated_duration_minutes,
                                 routing_service, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (id) DO UPDATE SET
                 parcel_id = EXCLUDED.parcel_id,
                 driver_id = EXCLUDED.driver_id,
                 start_hub = EXCLUDED.start_hub,
                 end_hub = EXCLUDED.end_hub,
                 geometry = EXCLUDED.geometry,
                 total_distance_km = EXCLUDED.total_distance_km,
                 estimated_duration_minutes = EXCLUDED.estimated_duration_minutes,
                 routing_service = EXCLUDED.routing_service,
                 is_active = EXCLUDED.is_active",
        )
        .bind(id.as_uuid())
        .bind(route.parcel_id.as_ref().map(ParcelId::as_uuid))
        .bind(route.driver_id.as_ref().map(DriverId::as_uuid))
        .bind(route.start_hub.as_ref().map(HubId::as_uuid))
        .bind(route.end_hub.as_ref().map(HubId::as_uuid))
        .bind(&route.geometry)
        .bind(route.total_distance_km)
        .bind(route.estimated_duration_minutes as i32)
        .bind(&route.routing_service)
        .bind(route.is_active)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(route)
    }

    async fn find(&self, id: RouteId) -> Result<Route, RoutingError> {
        sqlx::query_as::<_, RouteRow>(
            "SELECT id, parcel_id, driver_id, start_hub, end_hub, geometry,
                    total_distance_km, estimated_duration_minutes,
                    routing_service, is_active, created_at
             FROM routes WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?
        .map(RouteRow::into_route)
        .ok_or(RoutingError::RouteNotFound { id })
    }
}
