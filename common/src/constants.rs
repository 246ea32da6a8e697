// Maze defaults:
pub const DEFAULT_COLS: usize = 20;
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_RANDOMNESS: f64 = 0.5; // Chance of resuming a dead end from anywhere in the stack rather than its top.
pub const DEFAULT_BREAK_CHANCE: f64 = 0.125; // One cell in eight tries to punch an extra wall.

// Environment variables read by `MazeConfig::from_env`:
pub const COLS_VAR: &str = "MAZE_COLS";
pub const ROWS_VAR: &str = "MAZE_ROWS";
pub const RANDOMNESS_VAR: &str = "MAZE_RANDOMNESS";
pub const BREAK_CHANCE_VAR: &str = "MAZE_BREAK_CHANCE";
