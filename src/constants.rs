// Constants for datasets, playback and the terminal front-end

use crate::step::Value;

/// Auto-advance intervals in milliseconds, slowest tier first
pub const SPEED_PRESETS_MS: [u64; 5] = [1000, 500, 250, 125, 50];

/// Display labels matching [`SPEED_PRESETS_MS`]
pub const SPEED_LABELS: [&str; 5] = ["0.25x", "0.5x", "1x", "2x", "4x"];

/// Tier selected on startup (1x)
pub const DEFAULT_SPEED_TIER: usize = 2;

/// Bars view: array size limits and value range
pub const BARS_MIN_SIZE: usize = 8;
pub const BARS_MAX_SIZE: usize = 64;
pub const BARS_DEFAULT_SIZE: usize = 24;
pub const BARS_VALUE_RANGE: (Value, Value) = (5, 99);

/// Blocks view (searching)
pub const BLOCKS_MIN_SIZE: usize = 4;
pub const BLOCKS_MAX_SIZE: usize = 24;
pub const BLOCKS_DEFAULT_SIZE: usize = 16;
pub const BLOCKS_VALUE_RANGE: (Value, Value) = (1, 99);

/// Tree view, kept small so the recursion tree fits on screen
pub const TREE_MIN_SIZE: usize = 4;
pub const TREE_MAX_SIZE: usize = 16;
pub const TREE_DEFAULT_SIZE: usize = 12;
pub const TREE_VALUE_RANGE: (Value, Value) = (1, 50);

pub const BARS_INITIAL: [Value; 24] = [
    64, 34, 25, 12, 22, 11, 90, 45, 33, 21, 56, 78, 89, 43, 67, 10, 5, 95, 23, 87, 44, 30, 99, 15,
];

pub const BLOCKS_INITIAL: [Value; 16] = [64, 34, 25, 12, 22, 11, 90, 45, 33, 21, 56, 78, 89, 43, 67, 10];

/// Starting search target, present in [`BLOCKS_INITIAL`]
pub const BLOCKS_INITIAL_TARGET: Value = 45;

pub const TREE_INITIAL: [Value; 12] = [64, 34, 25, 12, 22, 11, 8, 45, 33, 21, 56, 4];

/// Event poll timeout of the TUI loop
pub const FRAME_POLL_MS: u64 = 50;
