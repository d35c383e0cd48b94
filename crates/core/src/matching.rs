//! Room matching strategies and fire-point resolution.
//!
//! The caller's description of the fire area is free text ("kitchen",
//! "apartment 2b"), so locating it in a layout is a heuristic string match
//! rather than a structured join. The strategy sits behind the
//! [`RoomMatcher`] trait so it can be swapped for exact-id or fuzzy
//! matching without touching any caller.

use crate::core_types::{FireOrigin, LayoutTemplate, Room, Vec2};

/// Strategy for locating the room a free-text area description refers to.
pub trait RoomMatcher {
    /// Return the first room in layout order that matches the area text,
    /// or `None` when nothing matches.
    fn find_room<'a>(&self, layout: &'a LayoutTemplate, area: &str) -> Option<&'a Room>;
}

/// Default strategy: case-insensitive substring match against room name
/// or id.
///
/// "kitchen" matches "Apartment 2D Kitchen"; an empty area text matches
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl RoomMatcher for SubstringMatcher {
    fn find_room<'a>(&self, layout: &'a LayoutTemplate, area: &str) -> Option<&'a Room> {
        let needle = area.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        layout.rooms.iter().find(|room| {
            room.name.to_lowercase().contains(&needle)
                || room.id.to_lowercase().contains(&needle)
        })
    }
}

/// Strict strategy: case-insensitive equality against the room id only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactIdMatcher;

impl RoomMatcher for ExactIdMatcher {
    fn find_room<'a>(&self, layout: &'a LayoutTemplate, area: &str) -> Option<&'a Room> {
        layout
            .rooms
            .iter()
            .find(|room| room.id.eq_ignore_ascii_case(area.trim()))
    }
}

/// Resolve a concrete fire point from an origin description.
///
/// Explicit coordinates win; otherwise the area text is matched against
/// the layout's rooms and the matched room's center is used; if nothing
/// matches, the coordinate-system center is the documented fallback.
/// A lookup miss is never an error.
pub fn resolve_fire_point(
    layout: &LayoutTemplate,
    origin: &FireOrigin,
    matcher: &dyn RoomMatcher,
) -> Vec2 {
    if let Some(point) = origin.coordinates {
        return point;
    }
    matcher
        .find_room(layout, &origin.area)
        .map_or_else(|| layout.coordinate_system.center(), Room::center)
}
