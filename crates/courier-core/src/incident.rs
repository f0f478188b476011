//! # Incident Context
//!
//! An [`Incident`] is the trigger for recalculating an existing route. It
//! is a typed, extensible context value: strategies receive it on every
//! recalculation and may use it to bias their computation. None of the
//! current strategies interpret it — the type exists so that ones which
//! eventually do have a stable contract instead of an untyped blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad classification of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentKind {
    /// A road segment is closed.
    RoadClosure,
    /// Severe congestion on the current path.
    Congestion,
    /// The assigned vehicle broke down.
    VehicleBreakdown,
    /// Weather conditions affecting the path.
    Weather,
    /// Anything else.
    Other,
}

impl std::fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RoadClosure => "ROAD_CLOSURE",
            Self::Congestion => "CONGESTION",
            Self::VehicleBreakdown => "VEHICLE_BREAKDOWN",
            Self::Weather => "WEATHER",
            Self::Other => "OTHER",
        };
        f.write_str(s)
    }
}

/// A reported incident prompting route recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Incident classification.
    pub kind: IncidentKind,
    /// Human-readable description.
    pub description: String,
    /// When the incident was reported.
    pub reported_at: DateTime<Utc>,
    /// Structured details a future strategy may interpret.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl Incident {
    /// Build an incident reported now, with no structured details.
    pub fn new(kind: IncidentKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            reported_at: Utc::now(),
            details: serde_json::Value::Null,
        }
    }
}
