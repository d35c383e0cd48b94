//! Tactical output records: risk zones, safe paths, and strike nodes.
//!
//! All three are created fresh on every assessment, never mutated after
//! creation, and are plain data suitable for direct serialization to a
//! rendering layer.

use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Vec2};
use super::situation::Severity;

/// A rectangular region annotated with fire-risk severity and confidence.
///
/// Normally covers exactly one room's bounds. Confidence is capped at 95
/// by the calculator to reflect irreducible uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: String,
    pub bounds: Rect,
    pub severity: Severity,
    /// Risk assessment confidence, 0-95.
    pub confidence: f32,
}

impl RiskZone {
    /// Whether a point falls inside this zone.
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

/// A proposed evacuation route, ranked by priority.
///
/// `points` is a polyline with at least two vertices; priority 1 is the
/// most preferred route and higher numbers are less preferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafePath {
    pub id: String,
    pub points: Vec<Vec2>,
    pub priority: u32,
    pub description: String,
}

/// Classification of a strike node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrikeNodeKind {
    FireOrigin,
    ExitRisk,
    Stairwell,
    Other(String),
}

/// A point flagged as a priority target for intervention effort.
///
/// Priorities form three non-overlapping tiers: the fire origin is always
/// 1, exit-risk nodes occupy `[2, 10)`, stairwell nodes start at 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeNode {
    pub id: String,
    pub position: Vec2,
    pub kind: StrikeNodeKind,
    pub priority: u32,
    pub description: String,
}
