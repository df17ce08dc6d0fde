use crate::bug::Population;
use crate::constants::NUM_NEIGHBOURS;
use crate::rng::RandomSource;
use crate::world::{OccupancyMap, Torus, World};

/// What an unhappy bug is looking for this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Random move: any free neighbour will do
    SeekAnyFree,
    /// Too cold: hottest of the current cell and its neighbours
    SeekMax,
    /// Too hot: coolest of the current cell and its neighbours
    SeekMin,
}

impl Intent {
    /// Pick the intent for a bug at `heat` preferring `ideal`.
    ///
    /// `roll` is a draw from [0, 100); below `random_move_chance` the bug
    /// wanders regardless of temperature.
    pub fn choose(heat: f64, ideal: f64, roll: f64, random_move_chance: f64) -> Self {
        if roll < random_move_chance {
            Intent::SeekAnyFree
        } else if heat < ideal {
            Intent::SeekMax
        } else {
            Intent::SeekMin
        }
    }
}

/// Where a bug at `locus` should go.
///
/// `scan_order` is a permutation of the 8 neighbour slots; it decides both
/// which of several equally good neighbours wins and the order the free-cell
/// fallback tries them in.
///
/// Comparisons are strict: a neighbour only replaces the running best if it
/// is strictly hotter (or cooler), so the current cell wins every tie and
/// among tied neighbours the first one scanned wins.
///
/// The result is always `locus` itself or a free neighbour.
pub fn best_free_neighbour(
    intent: Intent,
    torus: &Torus,
    heat: &[f64],
    occupancy: &OccupancyMap,
    locus: usize,
    scan_order: &[usize; NUM_NEIGHBOURS],
) -> usize {
    let neighbours = torus.neighbours(locus);

    if intent != Intent::SeekAnyFree {
        let mut best = locus;
        let mut best_heat = heat[locus];

        for &slot in scan_order {
            let candidate = neighbours[slot];
            let candidate_heat = heat[candidate];
            let better = match intent {
                Intent::SeekMax => candidate_heat > best_heat,
                _ => candidate_heat < best_heat,
            };
            if better {
                best = candidate;
                best_heat = candidate_heat;
            }
        }

        if best == locus || occupancy.is_free(best) {
            return best;
        }
    }

    scan_order
        .iter()
        .map(|&slot| neighbours[slot])
        .find(|&candidate| occupancy.is_free(candidate))
        .unwrap_or(locus)
}

/// One movement pass over the whole population.
///
/// Bugs act one at a time in a freshly shuffled order. Each sees the heat
/// deposits and moves of the bugs before it in the same pass.
pub fn bug_step(
    world: &mut World,
    population: &mut Population,
    rng: &mut RandomSource,
    random_move_chance: f64,
) {
    let Population { bugs, order } = population;

    for (slot, id) in order.iter_mut().enumerate() {
        *id = slot;
    }
    rng.shuffle(order);

    let mut scan_order: [usize; NUM_NEIGHBOURS] = std::array::from_fn(|i| i);

    for &id in order.iter() {
        let bug = &mut bugs[id];
        let locus = bug.locus;
        let heat_here = world.heat.heat(locus);
        let output_heat = bug.output_heat as f64;

        bug.unhappiness = bug.unhappiness_at(heat_here);

        if bug.unhappiness == 0.0 {
            world.heat.add_heat(locus, output_heat);
            continue;
        }

        let roll = rng.uniform_real(0.0, 100.0);
        let intent = Intent::choose(
            heat_here,
            bug.ideal_temperature as f64,
            roll,
            random_move_chance,
        );

        for (i, s) in scan_order.iter_mut().enumerate() {
            *s = i;
        }
        rng.shuffle(&mut scan_order);

        let target = best_free_neighbour(
            intent,
            &world.torus,
            world.heat.current(),
            &world.occupancy,
            locus,
            &scan_order,
        );

        world.heat.add_heat(target, output_heat);

        if target != locus {
            world.occupancy.relocate(locus, target);
            bug.locus = target;
        }
    }
}
