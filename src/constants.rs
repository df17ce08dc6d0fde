// default run settings:
pub const NUM_ITERATIONS: usize = 1000; // 0 = run until interrupted
pub const BUGS_NUMBER: usize = 100;
pub const WORLD_WIDTH: usize = 100;
pub const WORLD_HEIGHT: usize = 100;

pub const WORLD_DIFFUSION_RATE: f64 = 0.90; // [0..1] share of heat handed to the neighbours
pub const WORLD_EVAPORATION_RATE: f64 = 0.01; // [0..1] share of heat lost every step

pub const BUGS_RANDOM_MOVE_CHANCE: f64 = 0.0; // [0..100] percent
pub const BUGS_TEMP_MIN_IDEAL: u32 = 10;
pub const BUGS_TEMP_MAX_IDEAL: u32 = 40;
pub const BUGS_HEAT_MIN_OUTPUT: u32 = 5;
pub const BUGS_HEAT_MAX_OUTPUT: u32 = 25;

pub const OUTPUT_FILENAME: &str = "heatbugs.csv";

// Validation limits (exclusive)
pub const IDEAL_TEMPERATURE_LIMIT: u32 = 200;
pub const OUTPUT_HEAT_LIMIT: u32 = 100;

/// Share of the world a population may fill before a crowding warning is logged
pub const CROWDING_WARNING_RATIO: f64 = 0.8;

/// Moore neighbourhood size
pub const NUM_NEIGHBOURS: usize = 8;
