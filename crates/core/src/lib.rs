//! IGNIS Spatial Reasoning & Fire-Spread Simulation Engine
//!
//! Turns a structured description of an in-progress fire emergency into a
//! spatial decision-support picture over a building layout:
//!
//! - risk zones with severity and confidence,
//! - ranked evacuation paths to safe exits,
//! - prioritized intervention points ("strike nodes"),
//! - a human-readable justification for each derived fact,
//! - and a seeded, steppable probabilistic fire-spread particle simulation.
//!
//! Transcript extraction, voice transport, persistence, and drawing all
//! live outside this crate; the engine consumes an already-validated
//! [`SituationAnalysis`] plus a [`LayoutTemplate`] and produces plain
//! serializable data. All geometric components are total functions over
//! structurally valid input: lookup misses and empty layouts resolve to
//! documented fallbacks, never to errors.

// Core types and utilities
pub mod core_types;

// Layout registry and room matching
pub mod matching;
pub mod registry;

// Geometric assessment components
pub mod paths;
pub mod reasoning;
pub mod risk;
pub mod strike;

// Pipeline orchestration
pub mod pipeline;

// Probabilistic fire-spread simulation
pub mod spread;

// Re-export core types
pub use core_types::{
    distance, CoordinateSystem, EnvironmentType, Exit, ExitKind, FireOrigin, Hazard, Landmark,
    LayoutTemplate, Rect, RiskZone, Room, RoomKind, SafePath, Severity, SituationAnalysis,
    StrikeNode, StrikeNodeKind, UrgencyLevel, Vec2,
};

// Re-export component entry points
pub use matching::{resolve_fire_point, ExactIdMatcher, RoomMatcher, SubstringMatcher};
pub use paths::calculate_safe_paths;
pub use pipeline::{assess, assess_with_matcher, Assessment};
pub use reasoning::{generate_decision_reasoning, DecisionReasoning};
pub use registry::LayoutRegistry;
pub use risk::calculate_risk_zones;
pub use strike::identify_strike_nodes;

// Re-export simulation types
pub use spread::{FireParticle, FireSpreadSession, Lcg, SpreadParameters};
