use thiserror::Error;

/// Everything that can stop a heatbugs run.
///
/// The validation variants are raised before a simulation is built; once a
/// run is going only I/O failures from the output sinks can surface.
#[derive(Debug, Error)]
pub enum HeatbugsError {
    #[error("there are no bugs")]
    BugsZero,
    #[error("number of bugs ({bugs}) must be less than the number of world cells ({cells})")]
    BugsOverflow { bugs: usize, cells: usize },
    #[error("world dimensions must be non-zero (got {width}x{height})")]
    EmptyWorld { width: usize, height: usize },
    #[error("bug's ideal temperature range overlaps ({min} > {max})")]
    TemperatureOverlap { min: u32, max: u32 },
    #[error("bug's max ideal temperature {max} is out of range (must be < {limit})")]
    TemperatureOutOfRange { max: u32, limit: u32 },
    #[error("bug's output heat range overlaps ({min} > {max})")]
    OutputHeatOverlap { min: u32, max: u32 },
    #[error("bug's max output heat {max} is out of range (must be < {limit})")]
    OutputHeatOutOfRange { max: u32, limit: u32 },
    #[error("{name} = {value} is outside [{min}, {max}]")]
    RateOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeatbugsError>;
