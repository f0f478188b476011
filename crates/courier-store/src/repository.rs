//! Write-side contract for building the routing graph.

use async_trait::async_trait;

use courier_core::{Hub, HubConnection, HubId, RoutingError};

/// Hub and connection creation, used by the API's graph-management
/// endpoints. Read access goes through the `courier-core` contracts.
#[async_trait]
pub trait HubRepository: Send + Sync {
    /// Create a hub with a WKT point location.
    ///
    /// The location is validated before storage so graph searches never
    /// encounter an unparsable coordinate.
    async fn create_hub(&self, name: String, location: String) -> Result<Hub, RoutingError>;

    /// Create a weighted connection between two existing hubs.
    ///
    /// Fails with [`RoutingError::HubNotFound`] when either endpoint does
    /// not resolve. `weight` may be absent; searches then treat the edge
    /// as free.
    async fn create_connection(
        &self,
        from_hub: HubId,
        to_hub: HubId,
        weight: Option<f64>,
    ) -> Result<HubConnection, RoutingError>;

    /// List every stored hub.
    async fn list_hubs(&self) -> Result<Vec<Hub>, RoutingError>;
}
