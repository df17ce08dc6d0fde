mod heat_field;
mod occupancy;
mod torus;

pub use heat_field::HeatField;
pub use occupancy::{Occupancy, OccupancyMap};
pub use torus::{Direction, Locus, Torus};

/// The toroidal grid: geometry, heat field and occupancy map
#[derive(Debug, Clone)]
pub struct World {
    pub torus: Torus,
    pub heat: HeatField,
    pub occupancy: OccupancyMap,
}

impl World {
    /// An empty world with a zero heat field
    pub fn new(width: usize, height: usize) -> Self {
        let torus = Torus::new(width, height);
        Self {
            torus,
            heat: HeatField::new(torus.size()),
            occupancy: OccupancyMap::new(torus.size()),
        }
    }

    pub fn size(&self) -> usize {
        self.torus.size()
    }
}
