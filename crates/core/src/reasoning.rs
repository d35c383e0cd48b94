//! Decision reasoning generation.
//!
//! A pure, deterministic templating pass: every risk zone, path, and
//! strike node gets a human-readable justification, and uncertain inputs
//! (inferred origin, shaky environment classification, low-confidence
//! hazards) get explicit uncertainty markers. No randomness, no side
//! effects; output list lengths are exactly 1:1 with the input counts for
//! the first three lists.

use serde::{Deserialize, Serialize};

use crate::core_types::{
    RiskZone, SafePath, Severity, SituationAnalysis, StrikeNode, StrikeNodeKind,
};

/// Paths with priority at or below this are recommended routes.
const RECOMMENDED_PRIORITY_CUTOFF: u32 = 2;

/// Environment classification below this confidence gets an uncertainty
/// marker.
const ENVIRONMENT_CONFIDENCE_FLOOR: f32 = 90.0;

/// Hazards below this confidence get an uncertainty marker.
const HAZARD_CONFIDENCE_FLOOR: f32 = 80.0;

/// Justification for one risk zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZoneReasoning {
    pub zone_id: String,
    pub explanation: String,
    pub confidence: f32,
}

/// Justification for one evacuation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReasoning {
    pub path_id: String,
    pub explanation: String,
    pub recommended: bool,
}

/// Justification for one strike node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeNodeReasoning {
    pub node_id: String,
    pub explanation: String,
    pub priority: u32,
}

/// A flagged source of uncertainty in the derived picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyMarker {
    pub field: String,
    pub explanation: String,
    pub confidence: f32,
}

/// Natural-language justifications for every derived fact, plus
/// uncertainty markers. Purely derived; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReasoning {
    pub risk_zones: Vec<RiskZoneReasoning>,
    pub paths: Vec<PathReasoning>,
    pub strike_nodes: Vec<StrikeNodeReasoning>,
    pub uncertainty_markers: Vec<UncertaintyMarker>,
}

/// Generate justifications for a complete tactical picture.
pub fn generate_decision_reasoning(
    analysis: &SituationAnalysis,
    risk_zones: &[RiskZone],
    paths: &[SafePath],
    strike_nodes: &[StrikeNode],
) -> DecisionReasoning {
    DecisionReasoning {
        risk_zones: risk_zones.iter().map(explain_risk_zone).collect(),
        paths: paths.iter().map(explain_path).collect(),
        strike_nodes: strike_nodes.iter().map(explain_strike_node).collect(),
        uncertainty_markers: collect_uncertainty_markers(analysis),
    }
}

fn explain_risk_zone(zone: &RiskZone) -> RiskZoneReasoning {
    let mut explanation = format!(
        "Zone marked as {} risk based on proximity to fire origin. ",
        zone.severity.label()
    );
    explanation += match zone.severity {
        Severity::High => "This area is within immediate danger zone and requires urgent attention. ",
        Severity::Medium => "This area may be affected by smoke or heat spread. ",
        Severity::Low => "This area has lower risk but should still be monitored. ",
    };
    explanation += &format!("Risk assessment confidence: {:.0}%", zone.confidence);

    RiskZoneReasoning {
        zone_id: zone.id.clone(),
        explanation,
        confidence: zone.confidence,
    }
}

fn explain_path(path: &SafePath) -> PathReasoning {
    let recommended = path.priority <= RECOMMENDED_PRIORITY_CUTOFF;
    let mut explanation = format!("Path to {}. ", path.description);
    if recommended {
        explanation += "This route avoids high-risk zones and provides safe access to exit. ";
        explanation += &format!("Recommended for evacuation with priority {}.", path.priority);
    } else {
        explanation += "Alternative evacuation route. May pass through medium-risk areas. ";
        explanation += "Consider this path if primary routes are blocked.";
    }

    PathReasoning {
        path_id: path.id.clone(),
        explanation,
        recommended,
    }
}

fn explain_strike_node(node: &StrikeNode) -> StrikeNodeReasoning {
    let explanation = match &node.kind {
        StrikeNodeKind::FireOrigin => {
            "Fire origin at this location - highest priority strike point. \
             All firefighting efforts should be focused here to contain the source."
                .to_string()
        }
        StrikeNodeKind::ExitRisk => {
            "High-risk zone near critical exit point. \
             Protecting this exit is essential for safe evacuation routes."
                .to_string()
        }
        StrikeNodeKind::Stairwell => {
            "Critical evacuation route (stairwell). \
             Ensure this path remains clear and protected during operations."
                .to_string()
        }
        StrikeNodeKind::Other(_) => format!(
            "Strategic intervention point. Priority: {}. {}",
            node.priority, node.description
        ),
    };

    StrikeNodeReasoning {
        node_id: node.id.clone(),
        explanation,
        priority: node.priority,
    }
}

fn collect_uncertainty_markers(analysis: &SituationAnalysis) -> Vec<UncertaintyMarker> {
    let mut markers = Vec::new();

    if analysis.inferred {
        markers.push(UncertaintyMarker {
            field: "Fire Origin Location".to_string(),
            explanation: format!(
                "Fire origin location was inferred from transcript description. \
                 Actual coordinates may vary. Confidence: {:.0}%",
                analysis.fire_origin.confidence
            ),
            confidence: analysis.fire_origin.confidence,
        });
    }

    if analysis.environment_confidence < ENVIRONMENT_CONFIDENCE_FLOOR {
        markers.push(UncertaintyMarker {
            field: "Environment Type".to_string(),
            explanation: format!(
                "Environment type identified with {:.0}% confidence. \
                 Layout selection based on best match.",
                analysis.environment_confidence
            ),
            confidence: analysis.environment_confidence,
        });
    }

    for hazard in &analysis.hazards {
        if hazard.confidence < HAZARD_CONFIDENCE_FLOOR {
            markers.push(UncertaintyMarker {
                field: format!("Hazard: {}", hazard.kind),
                explanation: format!(
                    "Hazard location inferred with {:.0}% confidence. \
                     Verification recommended before action.",
                    hazard.confidence
                ),
                confidence: hazard.confidence,
            });
        }
    }

    markers
}
