//! Static layout registry.
//!
//! Maps an environment category to its floor-plan template. Pure lookup;
//! templates are authored in code and immutable after registration. The
//! warehouse category currently reuses the office template as its closest
//! structural match.

use rustc_hash::FxHashMap;

use crate::core_types::{
    CoordinateSystem, EnvironmentType, Exit, ExitKind, LayoutTemplate, Rect, Room, RoomKind, Vec2,
};

/// Registry of layout templates keyed by environment category.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    templates: FxHashMap<EnvironmentType, LayoutTemplate>,
}

impl LayoutRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with one template per environment category.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(apartment_template());
        registry.register(office_template());
        registry.register(school_template());
        registry.register(forest_template());

        // No dedicated warehouse plan yet; the office plan is the
        // closest structural match.
        let mut warehouse = office_template();
        warehouse.environment = EnvironmentType::Warehouse;
        registry.templates.insert(EnvironmentType::Warehouse, warehouse);

        registry
    }

    /// Register a template under its own environment category, replacing
    /// any previous template for that category.
    pub fn register(&mut self, template: LayoutTemplate) {
        self.templates.insert(template.environment, template);
    }

    /// Look up the template for an environment category.
    pub fn get(&self, environment: EnvironmentType) -> Option<&LayoutTemplate> {
        self.templates.get(&environment)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Single-floor apartment: units off a central hallway, stairwell and
/// main door at opposite ends.
fn apartment_template() -> LayoutTemplate {
    LayoutTemplate {
        id: "apartment-standard".to_string(),
        environment: EnvironmentType::Apartment,
        name: "Standard Apartment Floor".to_string(),
        floors: 4,
        rooms: vec![
            Room::new(
                "hallway-main",
                "Main Hallway",
                RoomKind::Hallway,
                Rect::new(0.0, 40.0, 100.0, 20.0),
            ),
            Room::new(
                "unit-2a",
                "Apartment 2A",
                RoomKind::Residential,
                Rect::new(0.0, 0.0, 45.0, 40.0),
            ),
            Room::new(
                "unit-2b",
                "Apartment 2B",
                RoomKind::Residential,
                Rect::new(55.0, 0.0, 45.0, 40.0),
            ),
            Room::new(
                "unit-2c",
                "Apartment 2C",
                RoomKind::Residential,
                Rect::new(0.0, 60.0, 45.0, 40.0),
            ),
            Room::new(
                "kitchen-2d",
                "Apartment 2D Kitchen",
                RoomKind::Kitchen,
                Rect::new(55.0, 60.0, 45.0, 40.0),
            ),
        ],
        exits: vec![
            Exit::new(
                "stairwell-west",
                "West Stairwell",
                Vec2::new(2.0, 50.0),
                ExitKind::Stairwell,
            ),
            Exit::new(
                "door-main",
                "Main Entrance",
                Vec2::new(98.0, 50.0),
                ExitKind::Door,
            ),
            Exit::new(
                "elevator-central",
                "Central Elevator",
                Vec2::new(50.0, 42.0),
                ExitKind::Elevator,
            ),
        ],
        coordinate_system: CoordinateSystem::normalized(),
    }
}

/// Open-plan office floor: workspace blocks around an L-shaped corridor,
/// break room in the corner.
fn office_template() -> LayoutTemplate {
    LayoutTemplate {
        id: "office-open-plan".to_string(),
        environment: EnvironmentType::Office,
        name: "Open Plan Office Floor".to_string(),
        floors: 8,
        rooms: vec![
            Room::new(
                "corridor",
                "Central Corridor",
                RoomKind::Hallway,
                Rect::new(40.0, 0.0, 20.0, 100.0),
            ),
            Room::new(
                "open-office",
                "Open Office",
                RoomKind::Workspace,
                Rect::new(0.0, 0.0, 40.0, 60.0),
            ),
            Room::new(
                "conference",
                "Conference Room",
                RoomKind::Workspace,
                Rect::new(60.0, 0.0, 40.0, 40.0),
            ),
            Room::new(
                "break-room",
                "Break Room",
                RoomKind::Kitchen,
                Rect::new(60.0, 40.0, 40.0, 30.0),
            ),
            Room::new(
                "server-room",
                "Server Room",
                RoomKind::Storage,
                Rect::new(0.0, 60.0, 40.0, 40.0),
            ),
            Room::new(
                "storage",
                "Storage",
                RoomKind::Storage,
                Rect::new(60.0, 70.0, 40.0, 30.0),
            ),
        ],
        exits: vec![
            Exit::new(
                "stairwell-north",
                "North Stairwell",
                Vec2::new(50.0, 2.0),
                ExitKind::Stairwell,
            ),
            Exit::new(
                "stairwell-south",
                "South Stairwell",
                Vec2::new(50.0, 98.0),
                ExitKind::Stairwell,
            ),
            Exit::new(
                "elevator-lobby",
                "Elevator Lobby",
                Vec2::new(42.0, 50.0),
                ExitKind::Elevator,
            ),
        ],
        coordinate_system: CoordinateSystem::normalized(),
    }
}

/// School wing: classrooms along a long corridor, lab and cafeteria at
/// the ends.
fn school_template() -> LayoutTemplate {
    LayoutTemplate {
        id: "school-wing".to_string(),
        environment: EnvironmentType::School,
        name: "School Classroom Wing".to_string(),
        floors: 2,
        rooms: vec![
            Room::new(
                "corridor-main",
                "Main Corridor",
                RoomKind::Hallway,
                Rect::new(0.0, 45.0, 100.0, 15.0),
            ),
            Room::new(
                "classroom-101",
                "Classroom 101",
                RoomKind::Classroom,
                Rect::new(0.0, 0.0, 33.0, 45.0),
            ),
            Room::new(
                "classroom-102",
                "Classroom 102",
                RoomKind::Classroom,
                Rect::new(33.0, 0.0, 33.0, 45.0),
            ),
            Room::new(
                "science-lab",
                "Science Lab",
                RoomKind::Classroom,
                Rect::new(66.0, 0.0, 34.0, 45.0),
            ),
            Room::new(
                "cafeteria",
                "Cafeteria",
                RoomKind::Kitchen,
                Rect::new(0.0, 60.0, 50.0, 40.0),
            ),
            Room::new(
                "gym",
                "Gymnasium",
                RoomKind::Other("gym".to_string()),
                Rect::new(50.0, 60.0, 50.0, 40.0),
            ),
        ],
        exits: vec![
            Exit::new(
                "door-east",
                "East Exit",
                Vec2::new(98.0, 52.0),
                ExitKind::Door,
            ),
            Exit::new(
                "door-west",
                "West Exit",
                Vec2::new(2.0, 52.0),
                ExitKind::Door,
            ),
            Exit::new(
                "stairwell-central",
                "Central Stairwell",
                Vec2::new(50.0, 47.0),
                ExitKind::Stairwell,
            ),
        ],
        coordinate_system: CoordinateSystem::normalized(),
    }
}

/// Forest area: vegetation blocks separated by a firebreak trail, trail
/// heads act as exits.
fn forest_template() -> LayoutTemplate {
    LayoutTemplate {
        id: "forest-trail-area".to_string(),
        environment: EnvironmentType::Forest,
        name: "Forest Trail Area".to_string(),
        floors: 1,
        rooms: vec![
            Room::new(
                "trail",
                "Firebreak Trail",
                RoomKind::Hallway,
                Rect::new(45.0, 0.0, 10.0, 100.0),
            ),
            Room::new(
                "grove-west",
                "West Grove",
                RoomKind::Vegetation,
                Rect::new(0.0, 0.0, 45.0, 100.0),
            ),
            Room::new(
                "grove-east",
                "East Grove",
                RoomKind::Vegetation,
                Rect::new(55.0, 0.0, 45.0, 100.0),
            ),
        ],
        exits: vec![
            Exit::new(
                "trailhead-north",
                "North Trailhead",
                Vec2::new(50.0, 2.0),
                ExitKind::Door,
            ),
            Exit::new(
                "trailhead-south",
                "South Trailhead",
                Vec2::new(50.0, 98.0),
                ExitKind::Door,
            ),
        ],
        coordinate_system: CoordinateSystem::normalized(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_environment() {
        let registry = LayoutRegistry::builtin();
        for env in [
            EnvironmentType::Apartment,
            EnvironmentType::Office,
            EnvironmentType::School,
            EnvironmentType::Forest,
            EnvironmentType::Warehouse,
        ] {
            let layout = registry.get(env).unwrap();
            assert!(!layout.rooms.is_empty(), "{} has no rooms", env.label());
            assert!(!layout.exits.is_empty(), "{} has no exits", env.label());
        }
    }

    #[test]
    fn test_warehouse_falls_back_to_office_plan() {
        let registry = LayoutRegistry::builtin();
        let office = registry.get(EnvironmentType::Office).unwrap();
        let warehouse = registry.get(EnvironmentType::Warehouse).unwrap();
        assert_eq!(warehouse.environment, EnvironmentType::Warehouse);
        assert_eq!(warehouse.rooms, office.rooms);
        assert_eq!(warehouse.exits, office.exits);
    }

    #[test]
    fn test_every_template_has_hallway_and_normalized_system() {
        let registry = LayoutRegistry::builtin();
        for env in [
            EnvironmentType::Apartment,
            EnvironmentType::Office,
            EnvironmentType::School,
            EnvironmentType::Forest,
        ] {
            let layout = registry.get(env).unwrap();
            assert!(
                layout
                    .rooms
                    .iter()
                    .any(|room| room.kind == RoomKind::Hallway),
                "{} template has no hallway",
                env.label()
            );
            assert_eq!(layout.coordinate_system.width, 100.0);
            assert_eq!(layout.coordinate_system.height, 100.0);
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = LayoutRegistry::builtin();
        let mut custom = forest_template();
        custom.name = "Custom Forest".to_string();
        registry.register(custom);
        assert_eq!(
            registry.get(EnvironmentType::Forest).unwrap().name,
            "Custom Forest"
        );
        assert_eq!(registry.len(), 5);
    }
}
