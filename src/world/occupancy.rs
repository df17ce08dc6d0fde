/// What sits in a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupancy {
    #[default]
    Empty,
    /// Index of the bug in its population
    Bug(usize),
}

impl Occupancy {
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupancy::Empty)
    }
}

/// Per-cell record of which bug, if any, is there. At most one bug per cell.
#[derive(Debug, Clone)]
pub struct OccupancyMap {
    cells: Vec<Occupancy>,
}

impl OccupancyMap {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Occupancy::Empty; size],
        }
    }

    pub fn get(&self, index: usize) -> Occupancy {
        self.cells[index]
    }

    pub fn is_free(&self, index: usize) -> bool {
        self.cells[index].is_empty()
    }

    pub fn place(&mut self, index: usize, bug: usize) {
        debug_assert!(self.is_free(index), "cell {index} already occupied");
        self.cells[index] = Occupancy::Bug(bug);
    }

    pub fn vacate(&mut self, index: usize) {
        self.cells[index] = Occupancy::Empty;
    }

    /// Move whatever is at `from` to the free cell `to`
    pub fn relocate(&mut self, from: usize, to: usize) {
        debug_assert!(self.is_free(to), "cell {to} already occupied");
        self.cells[to] = self.cells[from];
        self.cells[from] = Occupancy::Empty;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Occupancy> {
        self.cells.iter()
    }
}
