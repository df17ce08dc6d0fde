use crate::constants::NUM_NEIGHBOURS;
use crate::world::{HeatField, Torus};

/// Diffusion fused with evaporation, one pass over the grid.
///
/// For every cell `c` with Moore neighbours `N(c)` on the torus:
///
/// ```text
/// next[c] = (sum(current[n] for n in N(c)) * diffusion / 8 + current[c] * (1 - diffusion))
///           * (1 - evaporation)
/// ```
///
/// `next` is written from `current` only, never from itself, so the two
/// slices must be distinct buffers.
pub fn diffuse_and_evaporate(
    torus: &Torus,
    current: &[f64],
    next: &mut [f64],
    diffusion_rate: f64,
    evaporation_rate: f64,
) {
    debug_assert_eq!(current.len(), torus.size());
    debug_assert_eq!(next.len(), torus.size());

    let keep = 1.0 - diffusion_rate;
    let remain = 1.0 - evaporation_rate;
    let share = diffusion_rate / NUM_NEIGHBOURS as f64;

    for (cell, out) in next.iter_mut().enumerate() {
        let neighbours: f64 = torus.neighbours(cell).iter().map(|&n| current[n]).sum();
        *out = (neighbours * share + current[cell] * keep) * remain;
    }
}

/// Compute the next field into the scratch buffer and make it current.
pub fn transport_heat(
    torus: &Torus,
    heat: &mut HeatField,
    diffusion_rate: f64,
    evaporation_rate: f64,
) {
    {
        let (current, next) = heat.split();
        diffuse_and_evaporate(torus, current, next, diffusion_rate, evaporation_rate);
    }
    heat.swap();
}
