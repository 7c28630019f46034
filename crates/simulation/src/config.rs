pub const GRID_ROWS: usize = 8;
pub const GRID_COLS: usize = 10;

/// Period of the production tick. One tick is one simulated second.
pub const TICK_INTERVAL_MS: u64 = 1000;

pub const STARTING_CREDITS: u32 = 1000;
pub const STARTING_ENERGY: u32 = 200;
pub const STARTING_WATER: u32 = 200;
pub const STARTING_AIR_QUALITY: u32 = 100;

/// Air quality is a percentage.
pub const MAX_AIR_QUALITY: u32 = 100;
