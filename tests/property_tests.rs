// Whole-run invariants: occupancy, heat conservation, wraparound, reproducibility

use approx::assert_abs_diff_eq;
use heatbugs::sim::Simulation;
use heatbugs::sim::heat_transport::{diffuse_and_evaporate, transport_heat};
use heatbugs::sim::sim_op::UnhappinessRecorderOp;
use heatbugs::world::{HeatField, Occupancy, Torus};
use heatbugs::{RandomSource, SimConfig};
use more_asserts::assert_lt;

fn crowded_config(seed: u64) -> SimConfig {
    SimConfig {
        num_iterations: 60,
        bugs_number: 90,
        world_width: 12,
        world_height: 10,
        random_move_chance: 10.0,
        seed: Some(seed),
        ..SimConfig::default()
    }
}

fn unhappiness_series(config: SimConfig) -> Vec<f64> {
    let (handle, values) = UnhappinessRecorderOp::handle();
    let mut sim = Simulation::new(config, vec![handle]).unwrap();
    sim.run().unwrap();
    let series = values.borrow().clone();
    series
}

#[test]
fn test_occupancy_matches_population_every_step() {
    let mut sim = Simulation::new(crowded_config(11), vec![]).unwrap();

    for step in 0..=60 {
        assert_eq!(
            sim.world.occupancy.occupied_count(),
            90,
            "occupied count drifted at step {step}"
        );
        for (id, bug) in sim.population.iter().enumerate() {
            assert_eq!(sim.world.occupancy.get(bug.locus), Occupancy::Bug(id));
        }
        sim.step();
    }
}

#[test]
fn test_transport_never_creates_heat() {
    let torus = Torus::new(9, 8);
    let mut rng = RandomSource::new(5);
    let current: Vec<f64> = (0..torus.size()).map(|_| rng.uniform_real(0.0, 100.0)).collect();
    let before: f64 = current.iter().sum();
    let mut next = vec![0.0; torus.size()];

    for evaporation in [0.01, 0.1, 0.5, 1.0] {
        diffuse_and_evaporate(&torus, &current, &mut next, 0.9, evaporation);
        assert_lt!(next.iter().sum::<f64>(), before);
        assert_abs_diff_eq!(
            next.iter().sum::<f64>(),
            before * (1.0 - evaporation),
            epsilon = 1e-8
        );
    }

    for diffusion in [0.0, 0.3, 1.0] {
        diffuse_and_evaporate(&torus, &current, &mut next, diffusion, 0.0);
        assert_abs_diff_eq!(next.iter().sum::<f64>(), before, epsilon = 1e-8);
    }
}

#[test]
fn test_hot_cell_spreads_the_same_everywhere() {
    let torus = Torus::new(6, 5);
    let (diffusion, evaporation) = (0.9, 0.05);
    let centre_heat = 100.0 * (1.0 - diffusion) * (1.0 - evaporation);
    let neighbour_heat = 100.0 * diffusion / 8.0 * (1.0 - evaporation);

    for cell in 0..torus.size() {
        let mut field = HeatField::new(torus.size());
        field.add_heat(cell, 100.0);

        transport_heat(&torus, &mut field, diffusion, evaporation);

        let neighbours = torus.neighbours(cell);
        for other in 0..torus.size() {
            let expected = if other == cell {
                centre_heat
            } else if neighbours.contains(&other) {
                neighbour_heat
            } else {
                0.0
            };
            assert_abs_diff_eq!(field.heat(other), expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_same_seed_same_series() {
    let first = unhappiness_series(crowded_config(2024));
    let second = unhappiness_series(crowded_config(2024));
    assert_eq!(first.len(), 61);
    assert_eq!(first, second);
}

#[test]
fn test_same_seed_same_world() {
    let mut a = Simulation::new(crowded_config(99), vec![]).unwrap();
    let mut b = Simulation::new(crowded_config(99), vec![]).unwrap();
    for _ in 0..25 {
        a.step();
        b.step();
    }
    assert_eq!(a.world.heat.current(), b.world.heat.current());
    assert_eq!(a.population.bugs, b.population.bugs);
}

#[test]
fn test_unhappiness_is_non_negative() {
    for value in unhappiness_series(crowded_config(8)) {
        assert!(value >= 0.0);
        assert!(value.is_finite());
    }
}
