//! heatbugs - CLI entry point

use clap::Parser;
use heatbugs::SimConfig;
use heatbugs::sim::Simulation;
use heatbugs::sim::sim_op::{ProgressReporterOp, UnhappinessWriterOp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heatbugs")]
#[command(version)]
#[command(about = "Heatbugs swarm simulation on a toroidal heat field")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Base configuration file (JSON); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this file (JSON)
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Number of iterations (0 = run until interrupted)
    #[arg(short = 'i', long)]
    iterations: Option<usize>,

    /// Number of bugs in the world
    #[arg(short = 'n', long)]
    bugs: Option<usize>,

    /// World width
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// World height
    #[arg(short = 'W', long)]
    height: Option<usize>,

    /// Diffusion rate [0..1]
    #[arg(short = 'd', long)]
    diffusion: Option<f64>,

    /// Evaporation rate [0..1]
    #[arg(short = 'e', long)]
    evaporation: Option<f64>,

    /// Random move chance [0..100]
    #[arg(short = 'r', long)]
    random_move_chance: Option<f64>,

    /// Minimum ideal temperature
    #[arg(short = 't', long)]
    temp_min: Option<u32>,

    /// Maximum ideal temperature (exclusive, < 200)
    #[arg(short = 'T', long)]
    temp_max: Option<u32>,

    /// Minimum output heat
    #[arg(short = 'h', long)]
    heat_min: Option<u32>,

    /// Maximum output heat (exclusive, < 100)
    #[arg(short = 'H', long)]
    heat_max: Option<u32>,

    /// Random seed for reproducibility (default: from OS entropy)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Output file for the per-step mean unhappiness
    #[arg(short = 'f', long)]
    output: Option<String>,

    /// Log progress every N steps
    #[arg(long, default_value = "100")]
    report_interval: usize,

    /// Skip the timing report
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(v) = self.iterations {
            config.num_iterations = v;
        }
        if let Some(v) = self.bugs {
            config.bugs_number = v;
        }
        if let Some(v) = self.width {
            config.world_width = v;
        }
        if let Some(v) = self.height {
            config.world_height = v;
        }
        if let Some(v) = self.diffusion {
            config.diffusion_rate = v;
        }
        if let Some(v) = self.evaporation {
            config.evaporation_rate = v;
        }
        if let Some(v) = self.random_move_chance {
            config.random_move_chance = v;
        }
        if let Some(v) = self.temp_min {
            config.temperature_min_ideal = v;
        }
        if let Some(v) = self.temp_max {
            config.temperature_max_ideal = v;
        }
        if let Some(v) = self.heat_min {
            config.heat_min_output = v;
        }
        if let Some(v) = self.heat_max {
            config.heat_max_output = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(v) = &self.output {
            config.output_filename = v.clone();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("loading config from {:?}", path);
            SimConfig::from_file(path)?
        }
        None => SimConfig::default(),
    };
    cli.apply(&mut config);

    // pin the seed so a saved config reproduces this run
    config.seed = Some(config.resolve_seed());
    config.validate()?;

    if let Some(path) = &cli.save_config {
        config.save(path)?;
        log::info!("config saved to {:?}", path);
    }

    let ops = vec![
        UnhappinessWriterOp::handle(&config.output_filename),
        ProgressReporterOp::handle(cli.report_interval),
    ];
    let mut sim = Simulation::new(config, ops)?;
    sim.run()?;

    if !cli.quiet {
        sim.print_timing_report();
    }

    Ok(())
}
