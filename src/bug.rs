use crate::config::SimConfig;
use crate::error::{HeatbugsError, Result};
use crate::rng::RandomSource;
use crate::world::World;
use std::collections::HashSet;

/// A single heatbug.
///
/// `ideal_temperature` and `output_heat` are fixed at creation; `locus` and
/// `unhappiness` change as the bug lives.
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    /// Cell index on the torus
    pub locus: usize,
    pub ideal_temperature: u32,
    pub output_heat: u32,
    /// |ideal_temperature - heat at locus|, as of the bug's last turn
    pub unhappiness: f64,
}

impl Bug {
    pub fn new(locus: usize, ideal_temperature: u32, output_heat: u32) -> Self {
        Self {
            locus,
            ideal_temperature,
            output_heat,
            unhappiness: 0.0,
        }
    }

    pub fn unhappiness_at(&self, heat: f64) -> f64 {
        (self.ideal_temperature as f64 - heat).abs()
    }
}

/// The fixed-size swarm plus the scratch order the movement kernel shuffles.
#[derive(Debug, Clone)]
pub struct Population {
    pub bugs: Vec<Bug>,
    /// Processing order for the current step; reshuffled every step
    pub(crate) order: Vec<usize>,
}

impl Population {
    /// Create `config.bugs_number` bugs on free cells of `world`.
    ///
    /// Each bug draws cells until it lands on an empty one, so the config
    /// must leave at least one cell free (checked by [`SimConfig::validate`]).
    pub fn spawn(config: &SimConfig, world: &mut World, rng: &mut RandomSource) -> Self {
        let size = world.size();
        let mut bugs = Vec::with_capacity(config.bugs_number);

        for id in 0..config.bugs_number {
            let locus = loop {
                let candidate = rng.uniform_int(0, size);
                if world.occupancy.is_free(candidate) {
                    break candidate;
                }
            };
            world.occupancy.place(locus, id);

            let ideal_temperature =
                rng.uniform_int(config.temperature_min_ideal, config.temperature_max_ideal);
            let output_heat = rng.uniform_int(config.heat_min_output, config.heat_max_output);

            let mut bug = Bug::new(locus, ideal_temperature, output_heat);
            bug.unhappiness = bug.unhappiness_at(world.heat.heat(locus));
            bugs.push(bug);
        }

        Self::with_order(bugs)
    }

    /// Register pre-placed bugs in `world`'s occupancy map.
    ///
    /// Every cell is checked before any is taken, so on error `world` is
    /// left as it was.
    pub fn from_bugs(world: &mut World, mut bugs: Vec<Bug>) -> Result<Self> {
        let mut claimed = HashSet::with_capacity(bugs.len());
        for bug in bugs.iter_mut() {
            bug.locus %= world.size();
            if !world.occupancy.is_free(bug.locus) || !claimed.insert(bug.locus) {
                return Err(HeatbugsError::CellOccupied { index: bug.locus });
            }
        }

        for (id, bug) in bugs.iter_mut().enumerate() {
            world.occupancy.place(bug.locus, id);
            bug.unhappiness = bug.unhappiness_at(world.heat.heat(bug.locus));
        }
        Ok(Self::with_order(bugs))
    }

    fn with_order(bugs: Vec<Bug>) -> Self {
        let order = (0..bugs.len()).collect();
        Self { bugs, order }
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bug> {
        self.bugs.iter()
    }
}
