//! Structured situation input produced by the upstream extraction stage.
//!
//! The extraction stage (language-model-backed or keyword-based) lives outside this
//! crate; a [`SituationAnalysis`] arrives here as an already-validated,
//! read-only record. Confidence values are percentages in `[0, 100]`.

use serde::{Deserialize, Serialize};

use super::geometry::Vec2;
use super::layout::EnvironmentType;

/// Qualitative severity bucket.
///
/// Total order: `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lowercase label used in explanation templates.
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Overall urgency of the incident as judged upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Medium,
    High,
    Critical,
}

/// Where the fire started, as described by the caller.
///
/// `coordinates` is only present when the upstream stage could pin an
/// explicit location; otherwise `area` is matched against room names
/// (see [`crate::matching`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireOrigin {
    pub floor: i32,
    pub area: String,
    pub coordinates: Option<Vec2>,
    /// Confidence in the origin location, 0-100.
    pub confidence: f32,
}

/// A named landmark mentioned in the call (elevator, stairwell, ...).
///
/// Carried through as opaque context; no engine component derives
/// geometry from landmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub kind: String,
    pub location: String,
}

/// A hazard reported or inferred from the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: String,
    pub location: String,
    pub severity: Severity,
    /// Confidence in the hazard report, 0-100.
    pub confidence: f32,
}

/// Complete structured description of an in-progress fire emergency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationAnalysis {
    pub environment: EnvironmentType,
    /// Confidence in the environment classification, 0-100.
    pub environment_confidence: f32,
    pub fire_origin: FireOrigin,
    pub landmarks: Vec<Landmark>,
    pub hazards: Vec<Hazard>,
    pub urgency: UrgencyLevel,
    /// True when the upstream stage inferred values instead of reading
    /// them verbatim from the transcript.
    pub inferred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_urgency_order() {
        assert!(UrgencyLevel::Critical > UrgencyLevel::High);
        assert!(UrgencyLevel::High > UrgencyLevel::Medium);
    }
}
