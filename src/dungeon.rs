//! The generated dungeon and its walkable-space query.

use glam::Vec2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bsp::PartitionTree;
use crate::config::DungeonConfig;
use crate::corridor::{add_corridor, connect_tree};
use crate::rect::Rect;
use crate::room::{place_rooms, Room};

/// A generated dungeon layout.
///
/// Rooms are ordered and index 0 is the starting room. The partition tree
/// is kept for debug and visualization. Obstacle bounds are the one field
/// mutated after generation: the game loop rebuilds them whenever
/// destructible-object state changes.
///
/// On regeneration the whole dungeon is replaced at the call site, and
/// entities must be repositioned into the new starting room before the
/// simulation resumes.
#[derive(Clone, Debug)]
pub struct Dungeon {
    rooms: Vec<Room>,
    corridors: Vec<Rect>,
    tree: PartitionTree,
    obstacles: Vec<Rect>,
}

impl Dungeon {
    /// An unpopulated dungeon. Every movement query on it returns false.
    pub fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            corridors: Vec::new(),
            tree: PartitionTree::single(Rect::new(0, 0, 0, 0)),
            obstacles: Vec::new(),
        }
    }

    /// Generate a dungeon with the default configuration.
    ///
    /// `None` draws a seed from entropy; passing one makes the layout
    /// reproducible.
    pub fn generate(world: Rect, seed: Option<u64>) -> Self {
        Self::generate_with(world, &DungeonConfig::default(), seed)
    }

    /// Generate a dungeon with explicit tunables.
    pub fn generate_with(world: Rect, config: &DungeonConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        info!(
            "generating dungeon: world {}x{}, seed {}",
            world.width, world.height, seed
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate_with_rng(world, config, &mut rng)
    }

    /// Generate a dungeon from an injected random source.
    ///
    /// Total over any positive-area world: degenerate configurations and
    /// tiny worlds degrade to a single-room dungeon instead of failing.
    pub fn generate_with_rng(world: Rect, config: &DungeonConfig, rng: &mut impl Rng) -> Self {
        let config = config.clamped();
        let world = Rect::new(world.x, world.y, world.width.max(1), world.height.max(1));

        let mut tree = PartitionTree::build(world, &config, rng);
        place_rooms(&mut tree, &config, rng);
        let rooms = tree.collect_rooms();

        let mut corridors = Vec::new();
        connect_tree(&tree, config.corridor_width, &mut corridors);

        debug!(
            "dungeon ready: {} leaves, {} rooms, {} corridor segments",
            tree.leaves().len(),
            rooms.len(),
            corridors.len()
        );

        Self {
            rooms,
            corridors,
            tree,
            obstacles: Vec::new(),
        }
    }

    /// All rooms in insertion order. Index 0 is the starting room; role
    /// tagging scans this sequence.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The starting room, where entities are placed after (re)generation.
    pub fn starting_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    /// All corridor rectangles, two per L-shaped join.
    pub fn corridors(&self) -> &[Rect] {
        &self.corridors
    }

    /// The partition tree this layout was carved from.
    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    /// Stitch an extra L-shaped corridor between two points.
    pub fn add_corridor(&mut self, start: Vec2, end: Vec2, width: i32) {
        add_corridor(start, end, width, &mut self.corridors);
    }

    /// Currently registered obstacle rectangles.
    pub fn obstacle_bounds(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Replace the obstacle overlay. The game loop calls this whenever a
    /// destructible object spawns or breaks.
    pub fn set_obstacle_bounds(&mut self, bounds: Vec<Rect>) {
        self.obstacles = bounds;
    }

    /// Drop every registered obstacle.
    pub fn clear_obstacle_bounds(&mut self) {
        self.obstacles.clear();
    }

    /// Whether `bounds` lies entirely in walkable space.
    ///
    /// Each of the four corners must fall inside at least one room or
    /// corridor rectangle, and outside every registered obstacle. Corners
    /// may be satisfied by different rectangles, which lets a box straddle
    /// the seam between a room and its corridor instead of snagging on it.
    /// Returns false when no rooms exist.
    pub fn is_movement_valid(&self, bounds: Rect) -> bool {
        if self.rooms.is_empty() {
            return false;
        }

        let corners = [
            (bounds.x, bounds.y),
            (bounds.right(), bounds.y),
            (bounds.x, bounds.bottom()),
            (bounds.right(), bounds.bottom()),
        ];

        for (x, y) in corners {
            let walkable = self
                .rooms
                .iter()
                .map(|room| room.bounds())
                .chain(self.corridors.iter().copied())
                .any(|rect| rect.contains(x, y));
            if !walkable {
                return false;
            }
            if self.obstacles.iter().any(|rect| rect.contains(x, y)) {
                return false;
            }
        }
        true
    }
}
