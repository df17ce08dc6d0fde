use crate::error::Result;
use crate::sim::Simulation;
use crate::sim::sim_op::{SimOp, SimOpHandle};
use crate::stats::StepStats;

/// Progress Reporter Operator
///
/// Logs the unhappiness spread and total heat every `report_interval` steps,
/// plus the state at setup and at the end of the run.
#[derive(Debug, Clone)]
pub struct ProgressReporterOp {
    pub name: String,
    pub report_interval: usize, // Report every N steps
}

impl ProgressReporterOp {
    pub fn new(report_interval: usize) -> Self {
        Self {
            name: "ProgressReporterOp".to_string(),
            report_interval: report_interval.max(1),
        }
    }

    pub fn handle(report_interval: usize) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new(report_interval)))
    }

    fn should_report(&self, step: usize) -> bool {
        step % self.report_interval == 0
    }

    fn describe(stats: &StepStats) -> String {
        format!(
            "step {}: unhappiness mean = {:.3} (min {:.3}, max {:.3}), total heat = {:.1}",
            stats.step,
            stats.mean_unhappiness,
            stats.min_unhappiness,
            stats.max_unhappiness,
            stats.total_heat
        )
    }
}

impl SimOp for ProgressReporterOp {
    fn name(&self) -> &str {
        &self.name
    }

    fn init_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        let stats = StepStats::collect(sim.current_step(), &sim.world, &sim.population);
        log::info!("{}", Self::describe(&stats));
        Ok(())
    }

    fn update_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        if self.should_report(sim.current_step()) {
            let stats = StepStats::collect(sim.current_step(), &sim.world, &sim.population);
            log::info!("{}", Self::describe(&stats));
        }
        Ok(())
    }

    fn after_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        let stats = StepStats::collect(sim.current_step(), &sim.world, &sim.population);
        log::info!("simulation complete, {}", Self::describe(&stats));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = ProgressReporterOp::new(10);
        assert_eq!(reporter.report_interval, 10);
        assert!(reporter.should_report(20));
        assert!(!reporter.should_report(25));
    }

    #[test]
    fn test_zero_interval_reports_every_step() {
        let reporter = ProgressReporterOp::new(0);
        assert_eq!(reporter.report_interval, 1);
        assert!(reporter.should_report(7));
    }

    #[test]
    fn test_describe() {
        let stats = StepStats {
            step: 4,
            mean_unhappiness: 1.5,
            min_unhappiness: 0.0,
            max_unhappiness: 3.0,
            total_heat: 42.0,
        };
        let line = ProgressReporterOp::describe(&stats);
        assert!(line.starts_with("step 4:"));
        assert!(line.contains("mean = 1.500"));
    }
}
