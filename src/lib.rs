//! BSP dungeon generation and spatial validity for a 2D dungeon-crawler.
//!
//! The world area is recursively partitioned into a binary tree, a room is
//! carved inside every leaf, sibling subtrees are linked with L-shaped
//! corridors, and the resulting [`Dungeon`] answers the query every moving
//! entity asks each frame: is this box entirely inside walkable space?
//!
//! Generation is synchronous, bounded, and never fails; given a seed it is
//! bit-for-bit reproducible.

pub mod bsp;
pub mod config;
pub mod constants;
pub mod corridor;
pub mod dungeon;
pub mod movement;
pub mod rect;
pub mod room;

pub use bsp::{NodeId, PartitionTree, SpatialNode, SplitAxis};
pub use config::{ConfigError, DungeonConfig};
pub use dungeon::Dungeon;
pub use movement::resolve_move;
pub use rect::Rect;
pub use room::{assign_room_roles, Room, RoomRole};
