//! Core types and utilities

pub mod geometry;
pub mod layout;
pub mod situation;
pub mod tactical;

pub use geometry::{distance, Rect, Vec2};
pub use layout::{
    CoordinateSystem, EnvironmentType, Exit, ExitKind, LayoutTemplate, Room, RoomKind,
};
pub use situation::{FireOrigin, Hazard, Landmark, Severity, SituationAnalysis, UrgencyLevel};
pub use tactical::{RiskZone, SafePath, StrikeNode, StrikeNodeKind};
