//! Safe path planning.
//!
//! Ranks evacuation routes from a start point to the layout's exits,
//! skipping exits that sit inside a non-low risk zone. Routes are direct
//! two-point lines: the planner deliberately does not model walls or
//! corridor topology, so a drawn path may visually cross a risk zone or
//! room boundary. This is a known, accepted limitation, not a bug.

use tracing::debug;

use crate::core_types::{LayoutTemplate, RiskZone, Room, SafePath, Severity, Vec2};

/// Compute ranked evacuation paths.
///
/// The start point is the center of `start_room_id` when that room exists,
/// otherwise the coordinate-system center. An exit is safe unless it falls
/// inside a risk zone whose severity is not low. One two-point path is
/// emitted per safe exit in layout declaration order, priority ascending
/// from 1.
///
/// Never returns an empty list while the layout has any exit: when no exit
/// is safe, a single priority-1 emergency route to the first declared exit
/// is emitted instead. A layout with zero exits yields an empty list.
pub fn calculate_safe_paths(
    layout: &LayoutTemplate,
    risk_zones: &[RiskZone],
    start_room_id: Option<&str>,
) -> Vec<SafePath> {
    let start = start_room_id
        .and_then(|id| layout.rooms.iter().find(|room| room.id == id))
        .map_or_else(|| layout.coordinate_system.center(), Room::center);

    let mut paths: Vec<SafePath> = layout
        .exits
        .iter()
        .filter(|exit| exit_is_safe(exit.position, risk_zones))
        .enumerate()
        .map(|(index, exit)| SafePath {
            id: format!("path-{}", exit.id),
            points: vec![start, exit.position],
            priority: index as u32 + 1,
            description: format!("Route to {}", exit.name),
        })
        .collect();

    if paths.is_empty() {
        if let Some(exit) = layout.exits.first() {
            paths.push(SafePath {
                id: format!("path-emergency-{}", exit.id),
                points: vec![start, exit.position],
                priority: 1,
                description: format!("Emergency route to {} (risky but closest)", exit.name),
            });
        }
    }

    debug!(path_count = paths.len(), "planned evacuation paths");
    paths
}

/// An exit is safe unless some non-low risk zone contains it.
fn exit_is_safe(position: Vec2, risk_zones: &[RiskZone]) -> bool {
    risk_zones
        .iter()
        .find(|zone| zone.contains(position))
        .is_none_or(|zone| zone.severity == Severity::Low)
}
