//! Generation tunables and their validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Error raised when loading or validating a [`DungeonConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: i32 },
    #[error("room_size_factor must be in (0, 1) (got {0})")]
    FactorOutOfRange(f32),
}

/// Tunables that shape dungeon generation.
///
/// All of these materially change the layout: leaf size bounds how far the
/// partition recurses, room size and factor control how much of each leaf a
/// room fills, corridor width sets how wide the walkable joins are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Minimum size of a BSP leaf in both dimensions
    pub min_leaf_size: i32,
    /// Minimum room size within a leaf
    pub min_room_size: i32,
    /// Fraction of a leaf dimension a room aims to fill
    pub room_size_factor: f32,
    /// Thickness of corridor segments
    pub corridor_width: i32,
    /// Maximum BSP recursion depth
    pub max_depth: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            min_leaf_size: DUNGEON_MIN_LEAF_SIZE,
            min_room_size: DUNGEON_MIN_ROOM_SIZE,
            room_size_factor: DUNGEON_ROOM_SIZE_FACTOR,
            corridor_width: DUNGEON_CORRIDOR_WIDTH,
            max_depth: DUNGEON_MAX_SPLIT_DEPTH,
        }
    }
}

impl DungeonConfig {
    /// Load a config from a JSON file. Missing fields fall back to the
    /// defaults; present fields are validated.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is in a usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_leaf_size <= 0 {
            return Err(ConfigError::NonPositive {
                field: "min_leaf_size",
                value: self.min_leaf_size,
            });
        }
        if self.min_room_size <= 0 {
            return Err(ConfigError::NonPositive {
                field: "min_room_size",
                value: self.min_room_size,
            });
        }
        if self.corridor_width <= 0 {
            return Err(ConfigError::NonPositive {
                field: "corridor_width",
                value: self.corridor_width,
            });
        }
        if !self.room_size_factor.is_finite()
            || self.room_size_factor <= 0.0
            || self.room_size_factor >= 1.0
        {
            return Err(ConfigError::FactorOutOfRange(self.room_size_factor));
        }
        Ok(())
    }

    /// Clamp tunables into ranges the generator can always work with.
    ///
    /// Generation never fails: a degenerate config degrades to a
    /// single-room dungeon instead of erroring.
    pub(crate) fn clamped(&self) -> Self {
        Self {
            min_leaf_size: self.min_leaf_size.max(1),
            min_room_size: self.min_room_size.max(1),
            room_size_factor: if self.room_size_factor.is_finite() {
                self.room_size_factor.clamp(0.05, 0.95)
            } else {
                DUNGEON_ROOM_SIZE_FACTOR
            },
            corridor_width: self.corridor_width.max(1),
            max_depth: self.max_depth,
        }
    }
}
