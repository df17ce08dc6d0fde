use crate::error::Result;
use crate::sim::Simulation;
use crate::sim::sim_op::{SimOp, SimOpHandle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Unhappiness Writer Operator
///
/// The run's output sink: one line per step holding the mean unhappiness,
/// starting with the value right after setup (step 0). Lines are buffered
/// and only flushed when the run ends.
pub struct UnhappinessWriterOp {
    /// Path of the file to write (created or truncated at init)
    pub file_path: PathBuf,

    writer: Option<BufWriter<File>>,
}

impl UnhappinessWriterOp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            writer: None,
        }
    }

    pub fn handle(file_path: impl Into<PathBuf>) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new(file_path)))
    }

    fn write_value(&mut self, value: f64) -> Result<()> {
        if self.writer.is_none() {
            self.writer = Some(BufWriter::new(File::create(&self.file_path)?));
        }
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}", value)?;
        }
        Ok(())
    }
}

impl SimOp for UnhappinessWriterOp {
    fn name(&self) -> &str {
        "UnhappinessWriterOp"
    }

    fn init_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        self.writer = None;
        self.write_value(sim.mean_unhappiness())
    }

    fn update_sim(&mut self, sim: &mut Simulation) -> Result<()> {
        self.write_value(sim.mean_unhappiness())
    }

    fn after_sim(&mut self, _sim: &mut Simulation) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}
