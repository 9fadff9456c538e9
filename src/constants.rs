//! Dungeon generation constants.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! These are the reference values behind the default [`DungeonConfig`];
//! callers that need a different dungeon shape build their own config.
//!
//! [`DungeonConfig`]: crate::config::DungeonConfig

/// Minimum size of a BSP leaf node in both dimensions (world units)
pub const DUNGEON_MIN_LEAF_SIZE: i32 = 800;
/// Minimum room size within a leaf
pub const DUNGEON_MIN_ROOM_SIZE: i32 = 720;
/// Fraction of a leaf dimension a room aims to fill
pub const DUNGEON_ROOM_SIZE_FACTOR: f32 = 0.85;
/// Thickness of corridor segments
pub const DUNGEON_CORRIDOR_WIDTH: i32 = 100;
/// Maximum BSP recursion depth
pub const DUNGEON_MAX_SPLIT_DEPTH: u32 = 8;
