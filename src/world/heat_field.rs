/// Double-buffered heat map.
///
/// `main` selects which buffer is the current field; the other is scratch
/// for the next one. [`HeatField::swap`] flips the roles without copying.
#[derive(Debug, Clone)]
pub struct HeatField {
    buffers: [Vec<f64>; 2],
    main: usize,
}

impl HeatField {
    /// A zeroed field of `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            buffers: [vec![0.0; size], vec![0.0; size]],
            main: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> &[f64] {
        &self.buffers[self.main]
    }

    pub fn current_mut(&mut self) -> &mut [f64] {
        &mut self.buffers[self.main]
    }

    pub fn heat(&self, index: usize) -> f64 {
        self.buffers[self.main][index]
    }

    pub fn add_heat(&mut self, index: usize, heat: f64) {
        self.buffers[self.main][index] += heat;
    }

    /// Current field for reading alongside the next field for writing
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.main == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Make the next field current
    pub fn swap(&mut self) {
        self.main = 1 - self.main;
    }

    pub fn total(&self) -> f64 {
        self.current().iter().sum()
    }
}
