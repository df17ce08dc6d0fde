use crate::error::Result;
use crate::sim::Simulation;
use crate::sim::sim_op::{SimOp, SimOpHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps the mean unhappiness of every step in memory.
///
/// The values live behind a shared handle so they can still be read after
/// the op has been moved into a simulation.
#[derive(Debug, Clone, Default)]
pub struct UnhappinessRecorderOp {
    values: Rc<RefCell<Vec<f64>>>,
}

impl UnhappinessRecorderOp {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle for the simulation plus the shared series it fills
    pub fn handle() -> (SimOpHandle, Rc<RefCell<Vec<f64>>>) {
        let op = Self::new();
        let values = op.values();
        (SimOpHandle::new(Box::new(op)), values)
    }

    pub fn values(&self) -> Rc<RefCell<Vec<f64>>> {
        Rc::clone(&self.values)
    }
}

impl SimOp for UnhappinessRecorderOp {
    fn name(&self) -> &str {
        "UnhappinessRecorderOp"
    }

    fn init_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        self.values.borrow_mut().push(sim.mean_unhappiness());
        Ok(())
    }

    fn update_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        self.values.borrow_mut().push(sim.mean_unhappiness());
        Ok(())
    }
}
