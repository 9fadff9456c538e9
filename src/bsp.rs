//! Binary space partitioning of the world area.
//!
//! The tree is arena-backed: nodes live in a flat `Vec` and refer to each
//! other by index, so the parent back-reference stays a plain id instead of
//! a shared-ownership pointer.

use rand::Rng;

use crate::config::DungeonConfig;
use crate::rect::Rect;
use crate::room::Room;

/// Index of a node within its [`PartitionTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

/// Axis a node was split along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Split into top/bottom children at a y offset
    Horizontal,
    /// Split into left/right children at an x offset
    Vertical,
}

/// A node in the BSP tree. Either a leaf (may hold a room) or an internal
/// node with exactly two children.
#[derive(Clone, Debug)]
pub struct SpatialNode {
    /// The region this node covers
    pub area: Rect,
    /// Parent node. Informational back-reference, `None` for the root.
    pub parent: Option<NodeId>,
    /// Left/top and right/bottom children after a split
    pub children: Option<(NodeId, NodeId)>,
    /// The room carved in this region (leaves only)
    pub room: Option<Room>,
    /// Axis and offset of the split (internal nodes only)
    pub split: Option<(SplitAxis, i32)>,
}

impl SpatialNode {
    fn new(area: Rect, parent: Option<NodeId>) -> Self {
        Self {
            area,
            parent,
            children: None,
            room: None,
            split: None,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// The full partition tree produced by one generation call.
///
/// Built once per generation and replaced wholesale on regeneration; there
/// is no incremental mutation beyond room placement into leaves.
#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: Vec<SpatialNode>,
    root: NodeId,
    leaves: Vec<NodeId>,
}

impl PartitionTree {
    /// Recursively partition `area` down to the configured leaf size.
    pub fn build(area: Rect, config: &DungeonConfig, rng: &mut impl Rng) -> Self {
        let mut tree = Self::single(area);
        tree.split(tree.root, 0, config, rng);
        let mut leaves = Vec::new();
        tree.collect_leaves(tree.root, &mut leaves);
        tree.leaves = leaves;
        tree
    }

    /// A tree holding one unsplit leaf covering `area`.
    pub fn single(area: Rect) -> Self {
        Self {
            nodes: vec![SpatialNode::new(area, None)],
            root: NodeId(0),
            leaves: vec![NodeId(0)],
        }
    }

    /// Recursively split a node until leaves reach the size floor or the
    /// depth bound.
    fn split(&mut self, id: NodeId, iterations: u32, config: &DungeonConfig, rng: &mut impl Rng) {
        let area = self.node(id).area;
        let min = config.min_leaf_size;

        if iterations >= config.max_depth {
            return;
        }
        // Splitting a dimension under twice the leaf floor would leave a
        // child below the floor
        if area.width < min * 2 || area.height < min * 2 {
            return;
        }

        // Split across the longer dimension; coin flip when nearly square
        let axis = if (area.width - area.height).abs() <= min {
            if rng.gen_bool(0.5) {
                SplitAxis::Horizontal
            } else {
                SplitAxis::Vertical
            }
        } else if area.width < area.height {
            SplitAxis::Horizontal
        } else {
            SplitAxis::Vertical
        };

        // Keep both children at least `min` along the split axis
        let (low, high) = match axis {
            SplitAxis::Horizontal => (area.y + min, area.y + area.height - min),
            SplitAxis::Vertical => (area.x + min, area.x + area.width - min),
        };
        if low >= high {
            return;
        }
        let offset = rng.gen_range(low..=high);

        let (first, second) = match axis {
            SplitAxis::Horizontal => (
                Rect::new(area.x, area.y, area.width, offset - area.y),
                Rect::new(area.x, offset, area.width, area.bottom() - offset),
            ),
            SplitAxis::Vertical => (
                Rect::new(area.x, area.y, offset - area.x, area.height),
                Rect::new(offset, area.y, area.right() - offset, area.height),
            ),
        };

        let left = self.push(SpatialNode::new(first, Some(id)));
        let right = self.push(SpatialNode::new(second, Some(id)));
        let node = &mut self.nodes[id.0];
        node.children = Some((left, right));
        node.split = Some((axis, offset));

        self.split(left, iterations + 1, config, rng);
        self.split(right, iterations + 1, config, rng);
    }

    fn push(&mut self, node: SpatialNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.node(id).children {
            None => out.push(id),
            Some((left, right)) => {
                self.collect_leaves(left, out);
                self.collect_leaves(right, out);
            }
        }
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> &[SpatialNode] {
        &self.nodes
    }

    /// Leaf ids in pre-order, left subtree first. Room insertion order
    /// follows this: the left-most leaf's room ends up at index 0.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &SpatialNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SpatialNode {
        &mut self.nodes[id.0]
    }

    /// First room found in the subtree rooted at `id`, descending
    /// left-then-right. Used to pick corridor endpoints.
    pub fn representative_room(&self, id: NodeId) -> Option<Room> {
        let node = self.node(id);
        if let Some(room) = node.room {
            return Some(room);
        }
        let (left, right) = node.children?;
        self.representative_room(left)
            .or_else(|| self.representative_room(right))
    }

    /// All rooms in leaf order; the left-most leaf's room comes first.
    pub fn collect_rooms(&self) -> Vec<Room> {
        self.leaves
            .iter()
            .filter_map(|id| self.node(*id).room)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DungeonConfig {
        DungeonConfig::default()
    }

    #[test]
    fn test_small_area_stays_single_leaf() {
        let mut rng = rand::thread_rng();
        let tree = PartitionTree::build(Rect::new(0, 0, 500, 500), &config(), &mut rng);
        assert_eq!(tree.leaves().len(), 1);
        assert!(tree.node(tree.root()).is_leaf());
    }

    #[test]
    fn test_large_area_splits() {
        let mut rng = rand::thread_rng();
        let tree = PartitionTree::build(Rect::new(0, 0, 3840, 2160), &config(), &mut rng);
        assert!(tree.leaves().len() >= 2);
        assert!(!tree.node(tree.root()).is_leaf());
    }

    #[test]
    fn test_leaves_respect_size_floor() {
        let mut rng = rand::thread_rng();
        let tree = PartitionTree::build(Rect::new(0, 0, 4000, 4000), &config(), &mut rng);
        for id in tree.leaves() {
            let area = tree.node(*id).area;
            assert!(area.width >= config().min_leaf_size);
            assert!(area.height >= config().min_leaf_size);
        }
    }

    #[test]
    fn test_children_partition_their_parent() {
        let mut rng = rand::thread_rng();
        let tree = PartitionTree::build(Rect::new(0, 0, 4000, 4000), &config(), &mut rng);
        for (i, node) in tree.nodes().iter().enumerate() {
            let Some((left, right)) = node.children else {
                continue;
            };
            let (l, r) = (tree.node(left), tree.node(right));
            assert_eq!(l.parent, Some(NodeId(i)));
            assert_eq!(r.parent, Some(NodeId(i)));
            assert!(node.area.contains_rect(&l.area));
            assert!(node.area.contains_rect(&r.area));
            assert!(!l.area.intersects(&r.area));
            assert_eq!(
                l.area.width * l.area.height + r.area.width * r.area.height,
                node.area.width * node.area.height
            );
            // Arena ids only grow toward the leaves, so the tree is acyclic
            assert!(left.0 > i && right.0 > i);
        }
    }

    #[test]
    fn test_depth_bound_limits_leaf_count() {
        let mut rng = rand::thread_rng();
        let shallow = DungeonConfig {
            max_depth: 2,
            ..DungeonConfig::default()
        };
        let tree = PartitionTree::build(Rect::new(0, 0, 100_000, 100_000), &shallow, &mut rng);
        assert!(tree.leaves().len() <= 4);
    }

    #[test]
    fn test_split_metadata_only_on_internal_nodes() {
        let mut rng = rand::thread_rng();
        let tree = PartitionTree::build(Rect::new(0, 0, 3840, 2160), &config(), &mut rng);
        for node in tree.nodes() {
            assert_eq!(node.split.is_some(), node.children.is_some());
        }
    }
}
