//! Risk zone calculation.
//!
//! Distance-based risk scoring: every room is scored by its center's
//! Euclidean distance from the resolved fire point, normalized against a
//! fixed 50-unit reference distance. The immediate fire room is always
//! flagged regardless of the severity cut thanks to the near-distance rule.

use tracing::debug;

use crate::core_types::{distance, FireOrigin, LayoutTemplate, RiskZone, Severity, Vec2};
use crate::matching::{resolve_fire_point, RoomMatcher};

/// Distance at which risk decays to zero, in layout units.
const REFERENCE_DISTANCE: f32 = 50.0;

/// Rooms closer than this to the fire point are always flagged, even when
/// their computed severity is low (keeps the fire room itself in the
/// output at boundary conditions).
const ALWAYS_FLAG_DISTANCE: f32 = 15.0;

/// Confidence ceiling; never report 100% certainty.
const CONFIDENCE_CAP: f32 = 95.0;

/// Classify a normalized risk level into a severity bucket.
fn classify(risk: f32) -> Severity {
    if risk > 0.6 {
        Severity::High
    } else if risk > 0.3 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Compute risk zones for a layout given a fire origin.
///
/// Emits one zone per room whose severity is not low or whose raw distance
/// from the fire point is under 15 units; the output set is therefore
/// data-dependent and may be smaller than the room count. Zone confidence
/// is monotonically non-increasing with distance and capped at 95.
///
/// Total over all structurally valid input: a layout with zero rooms
/// yields an empty list.
pub fn calculate_risk_zones(
    layout: &LayoutTemplate,
    origin: &FireOrigin,
    matcher: &dyn RoomMatcher,
) -> Vec<RiskZone> {
    let fire_point = resolve_fire_point(layout, origin, matcher);
    risk_zones_from_point(layout, fire_point)
}

/// Risk zone computation from an already-resolved fire point.
pub fn risk_zones_from_point(layout: &LayoutTemplate, fire_point: Vec2) -> Vec<RiskZone> {
    let mut zones = Vec::new();

    for room in &layout.rooms {
        let dist = distance(room.center(), fire_point);
        let normalized = (dist / REFERENCE_DISTANCE).min(1.0);
        let risk = 1.0 - normalized;
        let severity = classify(risk);

        if severity != Severity::Low || dist < ALWAYS_FLAG_DISTANCE {
            zones.push(RiskZone {
                id: format!("risk-{}", room.id),
                bounds: room.bounds,
                severity,
                confidence: (risk * 100.0).min(CONFIDENCE_CAP),
            });
        }
    }

    debug!(
        zone_count = zones.len(),
        fire_x = fire_point.x,
        fire_y = fire_point.y,
        "computed risk zones"
    );
    zones
}
