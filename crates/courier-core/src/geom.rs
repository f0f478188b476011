//! # Geometry Codec — WKT Points and Linestrings
//!
//! Hub locations arrive as WKT `POINT` text and route geometries leave as
//! WKT `LINESTRING` text. This module is the only place that format is
//! read or written; everything in between works with [`geo_types::Point`]
//! and [`geo_types::Coord`].
//!
//! Distances here are planar Euclidean — coordinates are treated as a flat
//! plane, not a geodesic surface. That matches the metric the routing
//! strategies advertise (`total_distance_km` is a planar figure for the
//! direct and graph strategies; only the external service returns
//! real-world road distance).
//!
//! The serializer does not enforce the two-coordinate minimum on
//! linestrings; that invariant belongs to the route constructors, which
//! duplicate a lone coordinate before serializing.

use geo_types::{Coord, Point};
use thiserror::Error;

/// Error parsing or producing WKT geometry text.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The text is not a well-formed WKT point.
    #[error("malformed WKT point: {text:?}")]
    MalformedPoint {
        /// The offending input text.
        text: String,
    },

    /// A coordinate ordinate could not be parsed as a number.
    #[error("invalid ordinate {ordinate:?} in WKT: {text:?}")]
    InvalidOrdinate {
        /// The ordinate token that failed to parse.
        ordinate: String,
        /// The offending input text.
        text: String,
    },
}

/// Parse WKT `POINT (x y)` text into a planar point.
///
/// Accepts both `POINT(x y)` and `POINT (x y)` spellings, case-insensitive.
/// The x ordinate is longitude, y is latitude, matching the storage
/// convention for hub locations.
pub fn parse_point(text: &str) -> Result<Point<f64>, GeometryError> {
    let trimmed = text.trim();
    let malformed = || GeometryError::MalformedPoint {
        text: text.to_string(),
    };

    let rest = trimmed
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("POINT"))
        .map(|_| trimmed[5..].trim_start())
        .ok_or_else(malformed)?;

    let inner = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut ordinates = inner.split_whitespace();
    let x = parse_ordinate(ordinates.next().ok_or_else(malformed)?, text)?;
    let y = parse_ordinate(ordinates.next().ok_or_else(malformed)?, text)?;
    if ordinates.next().is_some() {
        return Err(malformed());
    }

    Ok(Point::new(x, y))
}

/// Serialize a coordinate sequence as WKT `LINESTRING` text.
///
/// Coordinates are written in storage order (x = longitude first). An
/// empty slice serializes to `LINESTRING EMPTY`; callers that require the
/// two-coordinate minimum enforce it before serializing.
pub fn serialize_line(coords: &[Coord<f64>]) -> String {
    if coords.is_empty() {
        return "LINESTRING EMPTY".to_string();
    }
    let body = coords
        .iter()
        .map(|c| format!("{} {}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(", ");
    format!("LINESTRING ({body})")
}

/// Planar Euclidean distance between two points.
pub fn planar_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

fn parse_ordinate(token: &str, text: &str) -> Result<f64, GeometryError> {
    token
        .parse::<f64>()
        .map_err(|_| GeometryError::InvalidOrdinate {
            ordinate: token.to_string(),
            text: text.to_string(),
        })
}
