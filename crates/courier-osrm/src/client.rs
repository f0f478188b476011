//! HTTP client for an OSRM routing endpoint.
//!
//! Wraps a `reqwest::Client` with the deployment base URL and request
//! timeout. The client owns request formatting (OSRM expects coordinate
//! pairs as `lon,lat` joined by `;`) and the mapping of transport and
//! status failures to [`OsrmError`]. Retries are NOT built in; callers
//! own retry policy.

use std::time::Duration;

use geo_types::Point;
use thiserror::Error;

use crate::response::OsrmResponse;

/// Errors raised while talking to the OSRM service.
#[derive(Debug, Error)]
pub enum OsrmError {
    /// The client could not be constructed or the service not reached.
    #[error("OSRM service unavailable: {reason}")]
    Unavailable { reason: String },
    /// The service answered with a non-success HTTP status.
    #[error("OSRM request failed: HTTP {status} for {url}")]
    Status { status: u16, url: String },
    /// The response body did not match the expected schema.
    #[error("OSRM response malformed: {reason}")]
    Malformed { reason: String },
    /// The service answered successfully but offered no route.
    #[error("OSRM returned no routes between the requested points")]
    NoRoutes,
}

impl From<OsrmError> for courier_core::RoutingError {
    fn from(err: OsrmError) -> Self {
        courier_core::RoutingError::Upstream {
            reason: err.to_string(),
        }
    }
}

/// Configuration for the OSRM HTTP client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL of the route service, including profile
    /// (e.g., `http://router.project-osrm.org/route/v1/driving`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for a single OSRM deployment.
///
/// `Send + Sync` and designed to be shared via `Arc` across async tasks.
#[derive(Debug)]
pub struct OsrmClient {
    client: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Build a client from configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, OsrmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OsrmError::Unavailable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Render a point as the `lon,lat` pair OSRM expects.
    ///
    /// Internal points carry x = longitude, y = latitude, so the ordinate
    /// order passes through unchanged. Do not swap here.
    fn format_coordinate(point: &Point<f64>) -> String {
        format!("{},{}", point.x(), point.y())
    }

    /// Build the full request URL for a start/end pair.
    pub fn route_url(&self, start: &Point<f64>, end: &Point<f64>) -> String {
        format!(
            "{}/{};{}?overview=full&geometries=geojson",
            self.base_url,
            Self::format_coordinate(start),
            Self::format_coordinate(end),
        )
    }

    /// Request a route between two points and decode the response body.
    pub async fn fetch_route(
        &self,
        start: &Point<f64>,
        end: &Point<f64>,
    ) -> Result<OsrmResponse, OsrmError> {
        let url = self.route_url(start, end);
        tracing::debug!(%url, "requesting route from OSRM");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OsrmError::Unavailable {
                reason: format!("GET {url}: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(OsrmError::Status {
                status: status.as_u16(),
                url,
            });
        }

        resp.json::<OsrmResponse>()
            .await
            .map_err(|e| OsrmError::Malformed {
                reason: e.to_string(),
            })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_url_formats_lon_lat_pairs() {
        let client = OsrmClient::new(OsrmConfig::new("http://osrm.local/route/v1/driving/"))
            .expect("client");
        let url = client.route_url(&Point::new(9.7043, 4.0511), &Point::new(11.5021, 3.848));
        assert_eq!(
            url,
            "http://osrm.local/route/v1/driving/9.7043,4.0511;11.5021,3.848?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed_once() {
        let client =
            OsrmClient::new(OsrmConfig::new("http://osrm.local/route/v1/driving")).expect("client");
        assert!(client
            .route_url(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0))
            .starts_with("http://osrm.local/route/v1/driving/0,0;1,1?"));
    }
}
