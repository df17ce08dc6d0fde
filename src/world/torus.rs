use crate::constants::NUM_NEIGHBOURS;

/// Neighbour identities, in the order [`Torus::neighbours`] returns them.
///
/// The grid grows west to east along a row and south to north across rows,
/// so "north" of row `r` is row `r + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    SW = 0,
    S,
    SE,
    W,
    E,
    NW,
    N,
    NE,
}

impl Direction {
    pub const ALL: [Direction; NUM_NEIGHBOURS] = [
        Direction::SW,
        Direction::S,
        Direction::SE,
        Direction::W,
        Direction::E,
        Direction::NW,
        Direction::N,
        Direction::NE,
    ];
}

/// Row/column position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locus {
    pub row: usize,
    pub col: usize,
}

/// Toroidal grid geometry. Cells are stored row-major, `index = row * width + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    pub width: usize,
    pub height: usize,
}

impl Torus {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Cell index of `(row, col)`, both wrapped onto the torus
    pub fn index(&self, row: usize, col: usize) -> usize {
        (row % self.height) * self.width + (col % self.width)
    }

    pub fn locus(&self, index: usize) -> Locus {
        Locus {
            row: index / self.width,
            col: index % self.width,
        }
    }

    /// The 8 Moore neighbours of `index`, in [`Direction::ALL`] order.
    ///
    /// Edges fold across the grid boundary, so every cell has a full set.
    /// On grids narrower than 3 cells some neighbours repeat.
    pub fn neighbours(&self, index: usize) -> [usize; NUM_NEIGHBOURS] {
        let Locus { row: rc, col: cc } = self.locus(index);
        let rn = (rc + 1) % self.height;
        let rs = (rc + self.height - 1) % self.height;
        let ce = (cc + 1) % self.width;
        let cw = (cc + self.width - 1) % self.width;
        let w = self.width;

        [
            rs * w + cw, // SW
            rs * w + cc, // S
            rs * w + ce, // SE
            rc * w + cw, // W
            rc * w + ce, // E
            rn * w + cw, // NW
            rn * w + cc, // N
            rn * w + ce, // NE
        ]
    }

    pub fn neighbour(&self, index: usize, direction: Direction) -> usize {
        self.neighbours(index)[direction as usize]
    }

    pub fn is_neighbour(&self, index: usize, other: usize) -> bool {
        self.neighbours(index).contains(&other)
    }
}
