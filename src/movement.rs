//! Wall-sliding movement resolution.
//!
//! Every moving entity (player, enemies, projectiles) funnels its desired
//! displacement through [`resolve_move`] before committing a position.

use glam::Vec2;
use log::trace;

use crate::dungeon::Dungeon;
use crate::rect::Rect;

/// Bounding box of a mover whose top-left corner sits at `position`.
fn mover_bounds(position: Vec2, size: (i32, i32)) -> Rect {
    Rect::new(position.x as i32, position.y as i32, size.0, size.1)
}

/// Resolve a desired displacement against the dungeon's walkable space.
///
/// The full displacement is tried first. When that is blocked, the X-only
/// and Y-only displacements are each tried against the original position,
/// so a diagonal move blocked on one axis still slides along the other.
/// When both axes are blocked the position comes back unchanged.
pub fn resolve_move(dungeon: &Dungeon, position: Vec2, size: (i32, i32), delta: Vec2) -> Vec2 {
    let full = position + delta;
    if dungeon.is_movement_valid(mover_bounds(full, size)) {
        return full;
    }

    let mut resolved = position;
    let x_only = position + Vec2::new(delta.x, 0.0);
    if dungeon.is_movement_valid(mover_bounds(x_only, size)) {
        resolved.x = x_only.x;
    }
    let y_only = position + Vec2::new(0.0, delta.y);
    if dungeon.is_movement_valid(mover_bounds(y_only, size)) {
        resolved.y = y_only.y;
    }

    if resolved == position {
        trace!("move blocked at {position}");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-room dungeon plus the room's bounds, for predictable walls.
    fn single_room_dungeon() -> (Dungeon, Rect) {
        let dungeon = Dungeon::generate(Rect::new(0, 0, 1920, 1080), Some(11));
        assert_eq!(dungeon.rooms().len(), 1);
        let bounds = dungeon.rooms()[0].bounds();
        (dungeon, bounds)
    }

    #[test]
    fn test_free_move_commits_full_displacement() {
        let (dungeon, room) = single_room_dungeon();
        let pos = room.center();
        let delta = Vec2::new(12.0, -7.0);
        assert_eq!(resolve_move(&dungeon, pos, (10, 10), delta), pos + delta);
    }

    #[test]
    fn test_blocked_axis_slides_along_the_other() {
        let (dungeon, room) = single_room_dungeon();
        // Flush against the right wall, clear of the top and bottom
        let pos = Vec2::new((room.right() - 11) as f32, room.center().y);
        let delta = Vec2::new(5.0, 3.0);

        let resolved = resolve_move(&dungeon, pos, (10, 10), delta);
        assert_eq!(resolved, pos + Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_corner_blocks_both_axes() {
        let (dungeon, room) = single_room_dungeon();
        let pos = Vec2::new((room.right() - 11) as f32, (room.bottom() - 11) as f32);
        let delta = Vec2::new(5.0, 5.0);

        assert_eq!(resolve_move(&dungeon, pos, (10, 10), delta), pos);
    }

    #[test]
    fn test_each_axis_is_tried_against_the_original_position() {
        let (dungeon, room) = single_room_dungeon();
        // In the open: a diagonal that is valid as a whole moves diagonally,
        // so the axis trials only ever run from a blocked full move
        let pos = room.center();
        let resolved = resolve_move(&dungeon, pos, (10, 10), Vec2::new(3.0, 4.0));
        assert_eq!(resolved, pos + Vec2::new(3.0, 4.0));

        // Against the left wall, a leftward diagonal keeps only its y part
        let pos = Vec2::new((room.x + 1) as f32, room.center().y);
        let resolved = resolve_move(&dungeon, pos, (10, 10), Vec2::new(-4.0, 6.0));
        assert_eq!(resolved, pos + Vec2::new(0.0, 6.0));
    }
}
