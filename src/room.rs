//! Rooms carved inside partition leaves, and their narrative roles.

use glam::Vec2;
use rand::Rng;

use crate::bsp::PartitionTree;
use crate::config::DungeonConfig;
use crate::rect::Rect;

/// A rectangular room carved inside one partition leaf.
///
/// Immutable once created; the dungeon's ordered room list holds copies of
/// the leaf-owned rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    bounds: Rect,
}

impl Room {
    /// Create a room from its bounds. Width and height must be positive.
    pub fn new(bounds: Rect) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);
        Self { bounds }
    }

    /// The room's rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Midpoint of the room (fractional).
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Carve one room into every leaf of the tree.
///
/// Room dimensions target `leaf × room_size_factor`, floored at the minimum
/// room size and capped one unit below the leaf, so the room never crosses
/// its leaf's boundary. The top-left offset is uniform in the remaining
/// slack with the far side keeping at least one unit of margin. Corridors
/// connect room centers, so staying inside the leaf keeps them from
/// clipping through an unrelated leaf's room.
pub fn place_rooms(tree: &mut PartitionTree, config: &DungeonConfig, rng: &mut impl Rng) {
    for id in tree.leaves().to_vec() {
        let area = tree.node(id).area;
        let (x, width) = room_span(area.x, area.width, config, rng);
        let (y, height) = room_span(area.y, area.height, config, rng);
        tree.node_mut(id).room = Some(Room::new(Rect::new(x, y, width, height)));
    }
}

/// Pick a room's start and length along one axis of its leaf.
fn room_span(origin: i32, leaf_len: i32, config: &DungeonConfig, rng: &mut impl Rng) -> (i32, i32) {
    let target = (leaf_len as f32 * config.room_size_factor) as i32;
    let len = target
        .max(config.min_room_size)
        .min(leaf_len - 1)
        .max(1);
    let slack = leaf_len - len;
    let start = if slack > 0 {
        origin + rng.gen_range(0..slack)
    } else {
        origin
    };
    (start, len)
}

/// Narrative role a room plays. Assigned after generation by scanning the
/// ordered room list, never computed by the generator itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomRole {
    /// Player spawn, always the first room
    Start,
    /// Final encounter, the last room
    Boss,
    Treasure,
    Altar,
    Normal,
}

/// Tag each room with a role.
///
/// The first room is the start and the last the boss room; one middle room
/// holds treasure and another an altar when enough rooms exist.
pub fn assign_room_roles(rooms: &[Room], rng: &mut impl Rng) -> Vec<RoomRole> {
    let mut roles = vec![RoomRole::Normal; rooms.len()];
    let Some(last) = rooms.len().checked_sub(1) else {
        return roles;
    };

    roles[0] = RoomRole::Start;
    if last > 0 {
        roles[last] = RoomRole::Boss;
    }

    let mut middle: Vec<usize> = (1..last).collect();
    if !middle.is_empty() {
        let idx = middle.swap_remove(rng.gen_range(0..middle.len()));
        roles[idx] = RoomRole::Treasure;
    }
    if !middle.is_empty() {
        let idx = middle.swap_remove(rng.gen_range(0..middle.len()));
        roles[idx] = RoomRole::Altar;
    }

    roles
}
