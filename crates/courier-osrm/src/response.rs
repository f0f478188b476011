//! OSRM response schema and boundary conversions.
//!
//! Only the consumed slice of the OSRM route response is modeled here:
//! per-route distance (meters), duration (seconds), and the GeoJSON
//! LineString geometry. Conversions into internal units happen at this
//! boundary and nowhere else:
//!
//! - GeoJSON positions are `[longitude, latitude]`; internal coordinates
//!   carry x = longitude, y = latitude, so position order maps straight
//!   through without swapping.
//! - Distance converts from meters to kilometers.
//! - Duration converts from seconds to whole minutes, fraction dropped.

use geo_types::Coord;
use serde::Deserialize;

use courier_core::Route;

use crate::client::OsrmError;

/// Top-level OSRM route response. Candidate routes are ordered best-first.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single candidate route.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Total distance in meters.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
    pub geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry as returned with `geometries=geojson`.
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    /// Positions as `[longitude, latitude]` pairs.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmResponse {
    /// Take the best candidate route, or fail when the service offered none.
    pub fn into_best_route(self) -> Result<OsrmRoute, OsrmError> {
        self.routes.into_iter().next().ok_or(OsrmError::NoRoutes)
    }
}

impl OsrmRoute {
    /// Convert into an internal [`Route`] value.
    ///
    /// `endpoints` supplies the start and end coordinates used as a
    /// degenerate geometry when the service returns fewer than two
    /// positions, so the stored line always has two points.
    pub fn into_route(self, endpoints: (Coord<f64>, Coord<f64>), service: &str) -> Route {
        let mut line: Vec<Coord<f64>> = self
            .geometry
            .coordinates
            .iter()
            .map(|&[lon, lat]| Coord { x: lon, y: lat })
            .collect();
        if line.len() < 2 {
            line = vec![endpoints.0, endpoints.1];
        }

        let distance_km = self.distance / 1000.0;
        let duration_minutes = (self.duration / 60.0) as u32;

        Route::computed(courier_core::serialize_line(&line), distance_km, service)
            .with_duration_minutes(duration_minutes)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "OSRM";

    fn fixture(body: &str) -> OsrmResponse {
        serde_json::from_str(body).expect("fixture parses")
    }

    #[test]
    fn parses_route_and_converts_units() {
        let resp = fixture(
            r#"{
                "code": "Ok",
                "routes": [{
                    "distance": 2500.0,
                    "duration": 185.0,
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[9.7, 4.05], [9.71, 4.06], [9.72, 4.07]]
                    }
                }]
            }"#,
        );
        let route = resp
            .into_best_route()
            .expect("one route")
            .into_route((Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }), SERVICE);

        assert_eq!(route.total_distance_km, 2.5);
        assert_eq!(route.estimated_duration_minutes, 3);
        assert_eq!(
            route.geometry,
            "LINESTRING (9.7 4.05, 9.71 4.06, 9.72 4.07)"
        );
        assert_eq!(route.routing_service, SERVICE);
    }

    #[test]
    fn position_order_is_preserved_not_swapped() {
        let resp = fixture(
            r#"{"routes": [{"distance": 0.0, "duration": 0.0,
                "geometry": {"coordinates": [[11.5, 3.8], [12.0, 4.1]]}}]}"#,
        );
        let route = resp
            .into_best_route()
            .expect("one route")
            .into_route((Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }), SERVICE);
        assert_eq!(route.geometry, "LINESTRING (11.5 3.8, 12 4.1)");
    }

    #[test]
    fn duration_fraction_is_dropped() {
        let resp = fixture(
            r#"{"routes": [{"distance": 1000.0, "duration": 119.9,
                "geometry": {"coordinates": [[0.0, 0.0], [1.0, 1.0]]}}]}"#,
        );
        let route = resp
            .into_best_route()
            .expect("one route")
            .into_route((Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }), SERVICE);
        assert_eq!(route.estimated_duration_minutes, 1);
    }

    #[test]
    fn sparse_geometry_falls_back_to_endpoints() {
        let resp = fixture(
            r#"{"routes": [{"distance": 500.0, "duration": 60.0,
                "geometry": {"coordinates": [[9.7, 4.05]]}}]}"#,
        );
        let route = resp
            .into_best_route()
            .expect("one route")
            .into_route((Coord { x: 9.7, y: 4.05 }, Coord { x: 9.8, y: 4.1 }), SERVICE);
        assert_eq!(route.geometry, "LINESTRING (9.7 4.05, 9.8 4.1)");
    }

    #[test]
    fn empty_routes_surfaces_no_routes() {
        let resp = fixture(r#"{"code": "NoRoute", "routes": []}"#);
        assert!(matches!(resp.into_best_route(), Err(OsrmError::NoRoutes)));
    }

    #[test]
    fn missing_routes_field_defaults_to_empty() {
        let resp = fixture(r#"{"code": "InvalidQuery"}"#);
        assert!(matches!(resp.into_best_route(), Err(OsrmError::NoRoutes)));
    }
}
