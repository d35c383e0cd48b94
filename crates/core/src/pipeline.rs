//! Assessment pipeline.
//!
//! Runs the geometric components in their data-flow order: risk zones
//! first (their output feeds both the path planner and the strike node
//! identifier), then reasoning over all three. The fire point is resolved
//! once and shared, so every component and any spread session started from
//! the result agree on where the fire is.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core_types::{LayoutTemplate, RiskZone, SafePath, SituationAnalysis, StrikeNode, Vec2};
use crate::matching::{resolve_fire_point, RoomMatcher, SubstringMatcher};
use crate::reasoning::{generate_decision_reasoning, DecisionReasoning};
use crate::risk::risk_zones_from_point;
use crate::spread::{FireSpreadSession, SpreadParameters};
use crate::strike::strike_nodes_from_point;

/// Complete spatial decision-support picture for one incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// The resolved fire point every component worked from.
    pub fire_point: Vec2,
    pub risk_zones: Vec<RiskZone>,
    pub safe_paths: Vec<SafePath>,
    pub strike_nodes: Vec<StrikeNode>,
    pub reasoning: DecisionReasoning,
}

impl Assessment {
    /// Start a fire-spread session seeded from this assessment's fire
    /// point and risk zones.
    pub fn start_spread_session(
        &self,
        layout: &LayoutTemplate,
        params: SpreadParameters,
    ) -> FireSpreadSession {
        FireSpreadSession::start(
            params,
            self.fire_point,
            layout.clone(),
            self.risk_zones.clone(),
        )
    }
}

/// Run the full assessment pipeline with the default room matcher.
pub fn assess(
    layout: &LayoutTemplate,
    analysis: &SituationAnalysis,
    start_room_id: Option<&str>,
) -> Assessment {
    assess_with_matcher(layout, analysis, start_room_id, &SubstringMatcher)
}

/// Run the full assessment pipeline with an explicit matching strategy.
pub fn assess_with_matcher(
    layout: &LayoutTemplate,
    analysis: &SituationAnalysis,
    start_room_id: Option<&str>,
    matcher: &dyn RoomMatcher,
) -> Assessment {
    let fire_point = resolve_fire_point(layout, &analysis.fire_origin, matcher);
    info!(
        environment = layout.environment.label(),
        area = %analysis.fire_origin.area,
        fire_x = fire_point.x,
        fire_y = fire_point.y,
        "running incident assessment"
    );

    let risk_zones = risk_zones_from_point(layout, fire_point);
    let safe_paths = crate::paths::calculate_safe_paths(layout, &risk_zones, start_room_id);
    let strike_nodes = strike_nodes_from_point(layout, fire_point, &risk_zones);
    let reasoning =
        generate_decision_reasoning(analysis, &risk_zones, &safe_paths, &strike_nodes);

    info!(
        risk_zones = risk_zones.len(),
        safe_paths = safe_paths.len(),
        strike_nodes = strike_nodes.len(),
        uncertainty_markers = reasoning.uncertainty_markers.len(),
        "assessment complete"
    );

    Assessment {
        fire_point,
        risk_zones,
        safe_paths,
        strike_nodes,
        reasoning,
    }
}
