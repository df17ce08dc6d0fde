use crate::constants::*;
use crate::error::{HeatbugsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a heatbugs run.
///
/// A config is validated once, before a [`Simulation`](crate::sim::Simulation)
/// is built from it; the simulation itself trusts every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Iterations to run; 0 never stops on its own.
    pub num_iterations: usize,
    pub bugs_number: usize,
    pub world_width: usize,
    pub world_height: usize,
    /// [0..1], share of a cell's heat handed to its 8 neighbours each step
    pub diffusion_rate: f64,
    /// [0..1], share of heat lost to the ether each step
    pub evaporation_rate: f64,
    /// [0..100], percent chance an unhappy bug moves to any free neighbour
    pub random_move_chance: f64,
    /// Ideal temperatures are drawn from [min, max)
    pub temperature_min_ideal: u32,
    pub temperature_max_ideal: u32,
    /// Output heat is drawn from [min, max)
    pub heat_min_output: u32,
    pub heat_max_output: u32,
    /// Fixed seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub output_filename: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_iterations: NUM_ITERATIONS,
            bugs_number: BUGS_NUMBER,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            diffusion_rate: WORLD_DIFFUSION_RATE,
            evaporation_rate: WORLD_EVAPORATION_RATE,
            random_move_chance: BUGS_RANDOM_MOVE_CHANCE,
            temperature_min_ideal: BUGS_TEMP_MIN_IDEAL,
            temperature_max_ideal: BUGS_TEMP_MAX_IDEAL,
            heat_min_output: BUGS_HEAT_MIN_OUTPUT,
            heat_max_output: BUGS_HEAT_MAX_OUTPUT,
            seed: None,
            output_filename: OUTPUT_FILENAME.to_string(),
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Number of cells in the world
    pub fn world_size(&self) -> usize {
        self.world_width * self.world_height
    }

    /// The configured seed, or a fresh one from the OS-seeded thread rng.
    pub fn resolve_seed(&self) -> u64 {
        use rand::Rng;
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Reject configurations the simulation core cannot run.
    ///
    /// Checks run in a fixed order so the first problem reported is stable:
    /// world dimensions, then population, then ideal temperature, then output
    /// heat, then rates.
    pub fn validate(&self) -> Result<()> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(HeatbugsError::EmptyWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.bugs_number == 0 {
            return Err(HeatbugsError::BugsZero);
        }
        if self.bugs_number >= self.world_size() {
            return Err(HeatbugsError::BugsOverflow {
                bugs: self.bugs_number,
                cells: self.world_size(),
            });
        }

        if self.temperature_min_ideal > self.temperature_max_ideal {
            return Err(HeatbugsError::TemperatureOverlap {
                min: self.temperature_min_ideal,
                max: self.temperature_max_ideal,
            });
        }
        if self.temperature_max_ideal >= IDEAL_TEMPERATURE_LIMIT {
            return Err(HeatbugsError::TemperatureOutOfRange {
                max: self.temperature_max_ideal,
                limit: IDEAL_TEMPERATURE_LIMIT,
            });
        }

        if self.heat_min_output > self.heat_max_output {
            return Err(HeatbugsError::OutputHeatOverlap {
                min: self.heat_min_output,
                max: self.heat_max_output,
            });
        }
        if self.heat_max_output >= OUTPUT_HEAT_LIMIT {
            return Err(HeatbugsError::OutputHeatOutOfRange {
                max: self.heat_max_output,
                limit: OUTPUT_HEAT_LIMIT,
            });
        }

        check_rate("diffusion_rate", self.diffusion_rate, 1.0)?;
        check_rate("evaporation_rate", self.evaporation_rate, 1.0)?;
        check_rate("random_move_chance", self.random_move_chance, 100.0)?;

        if self.bugs_number as f64 >= CROWDING_WARNING_RATIO * self.world_size() as f64 {
            log::warn!(
                "bugs number ({}) near available world slots ({})",
                self.bugs_number,
                self.world_size()
            );
        }

        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64, max: f64) -> Result<()> {
    // written as a negated containment test so NaN is rejected too
    if !(0.0..=max).contains(&value) {
        return Err(HeatbugsError::RateOutOfRange {
            name,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(())
}
