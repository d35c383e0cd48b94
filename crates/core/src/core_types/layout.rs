//! Floor-plan layout templates.
//!
//! A [`LayoutTemplate`] is a static floor plan for one environment category:
//! rectangular rooms plus point exits, expressed in a normalized coordinate
//! system (100x100 by convention). Templates are immutable once loaded and
//! shared read-only by every assessment component and simulation session.

use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Vec2};

/// Environment categories an incident can be classified into.
///
/// Each category maps to exactly one builtin layout template; see
/// [`crate::registry::LayoutRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    Apartment,
    Office,
    School,
    Forest,
    Warehouse,
}

impl EnvironmentType {
    /// Human-readable label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            EnvironmentType::Apartment => "apartment",
            EnvironmentType::Office => "office",
            EnvironmentType::School => "school",
            EnvironmentType::Forest => "forest",
            EnvironmentType::Warehouse => "warehouse",
        }
    }
}

/// Functional classification of a room.
///
/// Only `Hallway` carries engine semantics (the spread simulator boosts
/// spread probability inside hallways); everything else is descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Hallway,
    Residential,
    Kitchen,
    Workspace,
    Classroom,
    Storage,
    Vegetation,
    Other(String),
}

/// A rectangular room within a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub kind: RoomKind,
    pub bounds: Rect,
}

impl Room {
    pub fn new(id: &str, name: &str, kind: RoomKind, bounds: Rect) -> Self {
        Room {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            bounds,
        }
    }

    /// Center of the room's bounding rectangle.
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Kind of egress point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitKind {
    Door,
    Stairwell,
    Elevator,
    Window,
}

/// A point exit from the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub id: String,
    pub name: String,
    pub position: Vec2,
    pub kind: ExitKind,
}

impl Exit {
    pub fn new(id: &str, name: &str, position: Vec2, kind: ExitKind) -> Self {
        Exit {
            id: id.to_string(),
            name: name.to_string(),
            position,
            kind,
        }
    }
}

/// Size of a layout's normalized coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub width: f32,
    pub height: f32,
}

impl CoordinateSystem {
    /// Standard normalized 100x100 system used by all builtin templates.
    pub fn normalized() -> Self {
        CoordinateSystem {
            width: 100.0,
            height: 100.0,
        }
    }

    /// Geometric center, used as the fallback fire/start point when a
    /// room lookup misses.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies inside the coordinate system bounds.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// Static floor-plan template for one environment category.
///
/// Rooms and exits are ordered collections; several components (the path
/// planner, the strike node identifier) define their output priorities in
/// terms of declaration order, so order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub id: String,
    pub environment: EnvironmentType,
    pub name: String,
    pub floors: u8,
    pub rooms: Vec<Room>,
    pub exits: Vec<Exit>,
    pub coordinate_system: CoordinateSystem,
}

impl LayoutTemplate {
    /// Whether a point lies inside at least one room.
    ///
    /// The spread simulator uses this as the "valid spread area" check:
    /// particles may only exist inside rooms.
    pub fn point_in_any_room(&self, point: Vec2) -> bool {
        self.rooms.iter().any(|room| room.bounds.contains(point))
    }

    /// Whether a point lies inside a hallway-typed room.
    pub fn point_in_hallway(&self, point: Vec2) -> bool {
        self.rooms
            .iter()
            .any(|room| room.kind == RoomKind::Hallway && room.bounds.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_layout() -> LayoutTemplate {
        LayoutTemplate {
            id: "test".to_string(),
            environment: EnvironmentType::Apartment,
            name: "Test".to_string(),
            floors: 1,
            rooms: vec![
                Room::new(
                    "hall",
                    "Hallway",
                    RoomKind::Hallway,
                    Rect::new(0.0, 40.0, 100.0, 20.0),
                ),
                Room::new(
                    "unit-1",
                    "Unit 1",
                    RoomKind::Residential,
                    Rect::new(0.0, 0.0, 50.0, 40.0),
                ),
            ],
            exits: vec![Exit::new(
                "door",
                "Main Door",
                Vec2::new(95.0, 50.0),
                ExitKind::Door,
            )],
            coordinate_system: CoordinateSystem::normalized(),
        }
    }

    #[test]
    fn test_point_in_any_room() {
        let layout = two_room_layout();
        assert!(layout.point_in_any_room(Vec2::new(25.0, 20.0)));
        assert!(layout.point_in_any_room(Vec2::new(80.0, 50.0)));
        assert!(!layout.point_in_any_room(Vec2::new(80.0, 20.0)));
    }

    #[test]
    fn test_point_in_hallway_checks_kind() {
        let layout = two_room_layout();
        assert!(layout.point_in_hallway(Vec2::new(50.0, 50.0)));
        assert!(!layout.point_in_hallway(Vec2::new(25.0, 20.0)));
    }

    #[test]
    fn test_coordinate_system_center() {
        let cs = CoordinateSystem::normalized();
        assert_eq!(cs.center(), Vec2::new(50.0, 50.0));
        assert!(cs.contains(Vec2::new(0.0, 100.0)));
        assert!(!cs.contains(Vec2::new(100.1, 50.0)));
    }
}
