//! L-shaped corridors connecting sibling subtrees of the partition tree.

use glam::Vec2;

use crate::bsp::{NodeId, PartitionTree};
use crate::rect::Rect;

/// Emit the two rectangles of an L-shaped corridor between two points.
///
/// The horizontal segment runs at `start.y`, the vertical segment at
/// `end.x`; the two overlap at the bend `(end.x, start.y)`. A segment with
/// no extent along its axis comes out zero-sized and contains nothing.
pub fn add_corridor(start: Vec2, end: Vec2, width: i32, out: &mut Vec<Rect>) {
    let (sx, sy) = (start.x.round() as i32, start.y.round() as i32);
    let (ex, ey) = (end.x.round() as i32, end.y.round() as i32);

    out.push(Rect::new(
        sx.min(ex),
        sy - width / 2,
        (ex - sx).abs(),
        width,
    ));
    out.push(Rect::new(
        ex - width / 2,
        sy.min(ey),
        width,
        (ey - sy).abs(),
    ));
}

/// Walk the tree bottom-up and connect every internal node's subtrees.
///
/// Children are connected before their parent, so each side of a join is
/// already internally connected; linking one representative room from each
/// side is then enough to keep the whole dungeon reachable.
pub fn connect_tree(tree: &PartitionTree, width: i32, out: &mut Vec<Rect>) {
    connect_node(tree, tree.root(), width, out);
}

fn connect_node(tree: &PartitionTree, id: NodeId, width: i32, out: &mut Vec<Rect>) {
    let Some((left, right)) = tree.node(id).children else {
        return;
    };
    connect_node(tree, left, width, out);
    connect_node(tree, right, width, out);

    if let (Some(a), Some(b)) = (
        tree.representative_room(left),
        tree.representative_room(right),
    ) {
        add_corridor(a.center(), b.center(), width, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DungeonConfig;
    use crate::room::place_rooms;

    #[test]
    fn test_straight_corridor_covers_the_segment() {
        let mut out = Vec::new();
        add_corridor(Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0), 100, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Rect::new(100, 50, 400, 100));
        // The segment between the centers sits inside the horizontal rect
        for x in 100..500 {
            assert!(out[0].contains(x, 100));
            assert!(out[0].contains(x, 51));
            assert!(out[0].contains(x, 149));
        }
        // Vertical segment is degenerate for a straight join
        assert_eq!(out[1].height, 0);
    }

    #[test]
    fn test_bent_corridor_meets_at_the_elbow() {
        let mut out = Vec::new();
        add_corridor(Vec2::new(0.0, 0.0), Vec2::new(300.0, 400.0), 20, &mut out);

        let (h, v) = (out[0], out[1]);
        assert_eq!(h, Rect::new(0, -10, 300, 20));
        assert_eq!(v, Rect::new(290, 0, 20, 400));
        // Bend at (end.x, start.y) is covered by both segments
        assert!(h.contains(295, 0));
        assert!(v.contains(295, 0));
        assert!(h.intersects(&v));
    }

    #[test]
    fn test_connect_tree_links_every_internal_node() {
        let mut rng = rand::thread_rng();
        let config = DungeonConfig::default();
        let mut tree = PartitionTree::build(
            Rect::new(0, 0, 4000, 4000),
            &config,
            &mut rng,
        );
        place_rooms(&mut tree, &config, &mut rng);

        let mut corridors = Vec::new();
        connect_tree(&tree, config.corridor_width, &mut corridors);

        let internal = tree.nodes().iter().filter(|n| !n.is_leaf()).count();
        assert_eq!(corridors.len(), internal * 2);
    }

    #[test]
    fn test_single_leaf_needs_no_corridors() {
        let mut rng = rand::thread_rng();
        let config = DungeonConfig::default();
        let tree = PartitionTree::build(Rect::new(0, 0, 100, 100), &config, &mut rng);

        let mut corridors = Vec::new();
        connect_tree(&tree, config.corridor_width, &mut corridors);
        assert!(corridors.is_empty());
    }
}
