mod progress_reporter_op;
mod unhappiness_recorder_op;
mod unhappiness_writer_op;

pub use progress_reporter_op::ProgressReporterOp;
pub use unhappiness_recorder_op::UnhappinessRecorderOp;
pub use unhappiness_writer_op::UnhappinessWriterOp;

use crate::error::Result;
use crate::sim::Simulation;

/// An observer hooked into the simulation loop.
///
/// Ops run after the kernels: `init_sim` once the world is set up (step 0),
/// `update_sim` after every completed step, `after_sim` when the run ends.
/// An error from any hook stops the run; `after_sim` is still called.
pub trait SimOp {
    /// The name of this operator (for identification and timing)
    fn name(&self) -> &str;

    /// Called once at the beginning of the simulation
    fn init_sim(&mut self, _sim: &mut Simulation) -> Result<()> {
        Ok(())
    }

    /// Called every simulation step
    fn update_sim(&mut self, _sim: &mut Simulation) -> Result<()> {
        Ok(())
    }

    /// Called once at the end of the simulation
    fn after_sim(&mut self, _sim: &mut Simulation) -> Result<()> {
        Ok(())
    }
}

pub struct SimOpHandle {
    pub op: Box<dyn SimOp>,
}

impl SimOpHandle {
    pub fn new(op: Box<dyn SimOp>) -> Self {
        SimOpHandle { op }
    }

    /// Run the op's step hook on `sim`
    pub fn execute(&mut self, sim: &mut Simulation) -> Result<()> {
        self.op.update_sim(sim)
    }
}
