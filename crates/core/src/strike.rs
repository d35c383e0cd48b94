//! Strike node identification.
//!
//! Flags priority intervention points for firefighting effort in three
//! fixed priority tiers: the fire origin itself (priority 1), high-risk
//! zones threatening exits (priorities 2..), and stairwells needing
//! protection (priorities 10..). Tiers never overlap and no cross-tier
//! re-ranking is attempted.

use tracing::debug;

use crate::core_types::{
    distance, ExitKind, FireOrigin, LayoutTemplate, RiskZone, Severity, StrikeNode,
    StrikeNodeKind, Vec2,
};
use crate::matching::{resolve_fire_point, RoomMatcher};

/// A high zone whose center is within this distance of an exit threatens
/// that exit.
const EXIT_THREAT_DISTANCE: f32 = 10.0;

/// Identify ranked intervention points.
///
/// Always emits the fire-origin node, even for a layout with no rooms or
/// exits; exit-risk nodes follow in risk-zone order with a stable
/// input-order tie-break; stairwell nodes follow in layout exit order.
pub fn identify_strike_nodes(
    layout: &LayoutTemplate,
    origin: &FireOrigin,
    risk_zones: &[RiskZone],
    matcher: &dyn RoomMatcher,
) -> Vec<StrikeNode> {
    let fire_point = resolve_fire_point(layout, origin, matcher);
    strike_nodes_from_point(layout, fire_point, risk_zones)
}

/// Strike node identification from an already-resolved fire point.
pub fn strike_nodes_from_point(
    layout: &LayoutTemplate,
    fire_point: Vec2,
    risk_zones: &[RiskZone],
) -> Vec<StrikeNode> {
    let mut nodes = vec![StrikeNode {
        id: "strike-origin".to_string(),
        position: fire_point,
        kind: StrikeNodeKind::FireOrigin,
        priority: 1,
        description: "Fire origin - primary strike point".to_string(),
    }];

    let mut exit_risk_index: u32 = 0;
    for zone in risk_zones
        .iter()
        .filter(|zone| zone.severity == Severity::High)
    {
        let center = zone.bounds.center();
        let near_exit = layout
            .exits
            .iter()
            .any(|exit| distance(exit.position, center) < EXIT_THREAT_DISTANCE);
        if near_exit {
            nodes.push(StrikeNode {
                id: format!("strike-exit-risk-{exit_risk_index}"),
                position: center,
                kind: StrikeNodeKind::ExitRisk,
                priority: 2 + exit_risk_index,
                description: "High-risk zone near exit - priority intervention".to_string(),
            });
            exit_risk_index += 1;
        }
    }

    for (index, exit) in layout
        .exits
        .iter()
        .filter(|exit| exit.kind == ExitKind::Stairwell)
        .enumerate()
    {
        nodes.push(StrikeNode {
            id: format!("strike-stairwell-{index}"),
            position: exit.position,
            kind: StrikeNodeKind::Stairwell,
            priority: 10 + index as u32,
            description: format!("Stairwell {} - evacuation route protection", exit.name),
        });
    }

    debug!(node_count = nodes.len(), "identified strike nodes");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{
        CoordinateSystem, EnvironmentType, Exit, LayoutTemplate, Rect, Room, RoomKind,
    };

    fn layout() -> LayoutTemplate {
        LayoutTemplate {
            id: "test".to_string(),
            environment: EnvironmentType::Office,
            name: "Test".to_string(),
            floors: 1,
            rooms: vec![Room::new(
                "floor",
                "Floor",
                RoomKind::Workspace,
                Rect::new(0.0, 0.0, 100.0, 100.0),
            )],
            exits: vec![
                Exit::new("door", "Main Door", Vec2::new(20.0, 20.0), ExitKind::Door),
                Exit::new(
                    "stairs-a",
                    "Stairwell A",
                    Vec2::new(90.0, 10.0),
                    ExitKind::Stairwell,
                ),
                Exit::new(
                    "stairs-b",
                    "Stairwell B",
                    Vec2::new(90.0, 90.0),
                    ExitKind::Stairwell,
                ),
            ],
            coordinate_system: CoordinateSystem::normalized(),
        }
    }

    fn high_zone(id: &str, bounds: Rect) -> RiskZone {
        RiskZone {
            id: id.to_string(),
            bounds,
            severity: Severity::High,
            confidence: 90.0,
        }
    }

    #[test]
    fn test_origin_node_always_first() {
        let mut layout = layout();
        layout.rooms.clear();
        layout.exits.clear();
        let nodes = strike_nodes_from_point(&layout, Vec2::new(50.0, 50.0), &[]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, StrikeNodeKind::FireOrigin);
        assert_eq!(nodes[0].priority, 1);
        assert_eq!(nodes[0].position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_exit_risk_requires_proximity_and_high_severity() {
        let layout = layout();
        // Zone centered at (20,20): on top of the door.
        let near = high_zone("risk-near", Rect::new(15.0, 15.0, 10.0, 10.0));
        // Zone centered at (55,55): far from every exit.
        let far = high_zone("risk-far", Rect::new(50.0, 50.0, 10.0, 10.0));
        // Medium zone on the door does not qualify.
        let medium = RiskZone {
            severity: Severity::Medium,
            ..high_zone("risk-medium", Rect::new(15.0, 15.0, 10.0, 10.0))
        };

        let nodes = strike_nodes_from_point(
            &layout,
            Vec2::new(50.0, 50.0),
            &[far.clone(), near.clone(), medium],
        );
        let exit_risk: Vec<_> = nodes
            .iter()
            .filter(|n| n.kind == StrikeNodeKind::ExitRisk)
            .collect();
        assert_eq!(exit_risk.len(), 1);
        assert_eq!(exit_risk[0].priority, 2);
        assert_eq!(exit_risk[0].position, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_stairwell_nodes_in_layout_order() {
        let layout = layout();
        let nodes = strike_nodes_from_point(&layout, Vec2::new(50.0, 50.0), &[]);
        let stairwells: Vec<_> = nodes
            .iter()
            .filter(|n| n.kind == StrikeNodeKind::Stairwell)
            .collect();
        assert_eq!(stairwells.len(), 2);
        assert_eq!(stairwells[0].priority, 10);
        assert_eq!(stairwells[1].priority, 11);
        assert!(stairwells[0].description.contains("Stairwell A"));
    }

    #[test]
    fn test_identify_resolves_origin_through_matcher() {
        use crate::core_types::FireOrigin;
        use crate::matching::SubstringMatcher;

        let layout = layout();
        let origin = FireOrigin {
            floor: 1,
            area: "floor".to_string(),
            coordinates: None,
            confidence: 80.0,
        };
        let nodes = identify_strike_nodes(&layout, &origin, &[], &SubstringMatcher);
        // "floor" matches the single room, so the origin node sits at its center.
        assert_eq!(nodes[0].position, Vec2::new(50.0, 50.0));
        assert_eq!(nodes[0].kind, StrikeNodeKind::FireOrigin);
    }

    #[test]
    fn test_priority_tiers_never_overlap() {
        let layout = layout();
        let zones: Vec<RiskZone> = (0..3)
            .map(|i| {
                high_zone(
                    &format!("risk-{i}"),
                    Rect::new(15.0, 15.0, 10.0, 10.0),
                )
            })
            .collect();
        let nodes = strike_nodes_from_point(&layout, Vec2::new(50.0, 50.0), &zones);

        for node in &nodes {
            match node.kind {
                StrikeNodeKind::FireOrigin => assert_eq!(node.priority, 1),
                StrikeNodeKind::ExitRisk => {
                    assert!((2..10).contains(&node.priority), "{:?}", node)
                }
                StrikeNodeKind::Stairwell => assert!(node.priority >= 10),
                StrikeNodeKind::Other(_) => unreachable!(),
            }
        }
    }
}
