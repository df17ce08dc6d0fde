use crate::bug::Population;
use crate::world::World;

/// Arithmetic mean of every bug's unhappiness; 0 for an empty population.
pub fn mean_unhappiness(population: &Population) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let sum: f64 = population.iter().map(|bug| bug.unhappiness).sum();
    sum / population.len() as f64
}

/// Summary of one step, for progress reporting
#[derive(Debug, Clone, PartialEq)]
pub struct StepStats {
    pub step: usize,
    pub mean_unhappiness: f64,
    pub min_unhappiness: f64,
    pub max_unhappiness: f64,
    pub total_heat: f64,
}

impl StepStats {
    pub fn collect(step: usize, world: &World, population: &Population) -> Self {
        let (min, max) = population.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), bug| (min.min(bug.unhappiness), max.max(bug.unhappiness)),
        );
        let (min, max) = if population.is_empty() { (0.0, 0.0) } else { (min, max) };

        Self {
            step,
            mean_unhappiness: mean_unhappiness(population),
            min_unhappiness: min,
            max_unhappiness: max,
            total_heat: world.heat.total(),
        }
    }
}
