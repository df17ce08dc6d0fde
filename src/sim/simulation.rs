use crate::bug::Population;
use crate::config::SimConfig;
use crate::error::Result;
use crate::rng::RandomSource;
use crate::sim::heat_transport::transport_heat;
use crate::sim::movement::bug_step;
use crate::sim::sim_op::{SimOp, SimOpHandle};
use crate::stats::mean_unhappiness;
use crate::world::World;
use colored::Colorize;
use std::time::{Duration, Instant};

/// Timing information for one operator or kernel
#[derive(Debug, Clone)]
pub struct OpTiming {
    pub op_name: String,
    pub init_time: Duration,
    pub total_update_time: Duration,
    pub update_call_count: u32,
    pub after_time: Duration,
}

impl OpTiming {
    fn new(op_name: String) -> Self {
        Self {
            op_name,
            init_time: Duration::ZERO,
            total_update_time: Duration::ZERO,
            update_call_count: 0,
            after_time: Duration::ZERO,
        }
    }

    pub fn total_time(&self) -> Duration {
        self.init_time + self.total_update_time + self.after_time
    }

    pub fn avg_update_time(&self) -> Duration {
        if self.update_call_count > 0 {
            self.total_update_time / self.update_call_count
        } else {
            Duration::ZERO
        }
    }
}

/// The heatbugs driver.
///
/// Owns the world, the population and the random source for the whole run.
/// Each step runs heat transport, swaps the heat buffers, moves the bugs,
/// then records the mean unhappiness and hands control to the ops.
pub struct Simulation {
    pub config: SimConfig,
    pub world: World,
    pub population: Population,
    rng: RandomSource,
    ops: Vec<Box<dyn SimOp>>,
    step: usize,
    started: bool,
    mean_unhappiness: f64,
    heat_timing: OpTiming,
    movement_timing: OpTiming,
    op_timings: Vec<OpTiming>,
}

impl Simulation {
    /// Validate `config`, seed the random source, and place the population.
    pub fn new(config: SimConfig, ops: Vec<SimOpHandle>) -> Result<Simulation> {
        config.validate()?;

        let mut rng = RandomSource::new(config.resolve_seed());
        let mut world = World::new(config.world_width, config.world_height);
        let population = Population::spawn(&config, &mut world, &mut rng);

        log::info!(
            "heatbugs: {} bugs on a {}x{} torus, seed {}",
            population.len(),
            config.world_width,
            config.world_height,
            rng.seed()
        );

        Ok(Self::from_parts(config, world, population, rng, ops))
    }

    /// Assemble a simulation from a prepared world and population.
    ///
    /// Nothing is validated; `population` must already be registered in
    /// `world`'s occupancy map.
    pub fn from_parts(
        config: SimConfig,
        world: World,
        population: Population,
        rng: RandomSource,
        ops: Vec<SimOpHandle>,
    ) -> Simulation {
        let ops: Vec<Box<dyn SimOp>> = ops.into_iter().map(|handle| handle.op).collect();
        let op_timings = ops
            .iter()
            .map(|op| OpTiming::new(op.name().to_string()))
            .collect();
        let mean_unhappiness = mean_unhappiness(&population);

        Simulation {
            config,
            world,
            population,
            rng,
            ops,
            step: 0,
            started: false,
            mean_unhappiness,
            heat_timing: OpTiming::new("heat transport".to_string()),
            movement_timing: OpTiming::new("bug movement".to_string()),
            op_timings,
        }
    }

    /// Get the current simulation step number (0 before the first step)
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Mean unhappiness after the last completed step
    pub fn mean_unhappiness(&self) -> f64 {
        self.mean_unhappiness
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True once the configured iteration limit is reached; never for a limit of 0
    pub fn is_done(&self) -> bool {
        self.config.num_iterations != 0 && self.step >= self.config.num_iterations
    }

    /// Advance the world by one step without running any ops
    pub fn step(&mut self) {
        let start = Instant::now();
        transport_heat(
            &self.world.torus,
            &mut self.world.heat,
            self.config.diffusion_rate,
            self.config.evaporation_rate,
        );
        self.heat_timing.total_update_time += start.elapsed();
        self.heat_timing.update_call_count += 1;

        let start = Instant::now();
        bug_step(
            &mut self.world,
            &mut self.population,
            &mut self.rng,
            self.config.random_move_chance,
        );
        self.movement_timing.total_update_time += start.elapsed();
        self.movement_timing.update_call_count += 1;

        self.mean_unhappiness = mean_unhappiness(&self.population);
        self.step += 1;
    }

    /// Run a single step with custom operators (for testing)
    pub fn step_with_ops(&mut self, ops: &mut [&mut dyn SimOp]) -> Result<()> {
        self.step();
        for op in ops {
            op.update_sim(self)?;
        }
        Ok(())
    }

    /// Run to the iteration limit, or forever when the limit is 0.
    ///
    /// The first op error stops the stepping; `after_sim` still runs for
    /// every op and the first error is returned. Timings are collected
    /// throughout, see [`Simulation::print_timing_report`].
    pub fn run(&mut self) -> Result<()> {
        if self.started {
            panic!("Simulation.run can only execute once");
        }
        self.started = true;

        let mut result = self.simulate_init();
        while result.is_ok() && !self.is_done() {
            self.step();
            result = self.simulate_step();
            log::debug!(
                "step {}: mean unhappiness {}",
                self.step,
                self.mean_unhappiness
            );
        }

        // end hooks run even after a failure so sinks get to flush
        let end = self.simulate_end();
        result?;
        end?;

        log::info!(
            "heatbugs: finished {} steps, mean unhappiness {:.4}",
            self.step,
            self.mean_unhappiness
        );
        Ok(())
    }

    fn simulate_init(&mut self) -> Result<()> {
        let mut ops = std::mem::take(&mut self.ops);
        let mut result = Ok(());

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            result = op.init_sim(self);
            self.op_timings[i].init_time = start.elapsed();
            if result.is_err() {
                break;
            }
        }
        self.ops = ops;
        result
    }

    fn simulate_step(&mut self) -> Result<()> {
        let mut ops = std::mem::take(&mut self.ops);
        let mut result = Ok(());

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            result = op.update_sim(self);
            self.op_timings[i].total_update_time += start.elapsed();
            self.op_timings[i].update_call_count += 1;
            if result.is_err() {
                break;
            }
        }
        self.ops = ops;
        result
    }

    fn simulate_end(&mut self) -> Result<()> {
        let mut ops = std::mem::take(&mut self.ops);
        let mut result = Ok(());

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            result = op.after_sim(self);
            self.op_timings[i].after_time = start.elapsed();
            if result.is_err() {
                break;
            }
        }
        self.ops = ops;
        result
    }

    /// Kernel timings followed by op timings
    pub fn timings(&self) -> Vec<&OpTiming> {
        [&self.heat_timing, &self.movement_timing]
            .into_iter()
            .chain(self.op_timings.iter())
            .collect()
    }

    pub fn print_timing_report(&self) {
        println!("\n{}", "=== HEATBUGS TIMING REPORT ===".bold());
        println!("Total steps: {}", self.step);
        println!("Seed: {}", self.seed());
        println!();

        let timings = self.timings();
        let total_time: Duration = timings.iter().map(|t| t.total_time()).sum();

        for timing in &timings {
            let total_op_time = timing.total_time();
            let percentage = if total_time.as_micros() > 0 {
                total_op_time.as_micros() as f64 / total_time.as_micros() as f64 * 100.0
            } else {
                0.0
            };

            println!(
                "  {:<20} | Total: {:>10.2}ms | Avg/step: {:>8.3}ms | Share: {:>5.1}%",
                timing.op_name.cyan(),
                total_op_time.as_secs_f64() * 1000.0,
                timing.avg_update_time().as_secs_f64() * 1000.0,
                percentage
            );
        }

        println!();
        println!(
            "{} {:.2}ms ({:.2}s)",
            "TOTAL SIMULATION TIME:".green(),
            total_time.as_secs_f64() * 1000.0,
            total_time.as_secs_f64()
        );
        if self.step > 0 && total_time > Duration::ZERO {
            println!(
                "Steps per second: {:.2}",
                self.step as f64 / total_time.as_secs_f64()
            );
        }
    }
}
