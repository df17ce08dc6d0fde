// Small hand-checkable worlds driven step by step through the public API

use heatbugs::sim::Simulation;
use heatbugs::sim::sim_op::UnhappinessRecorderOp;
use heatbugs::world::Occupancy;
use heatbugs::{Bug, Population, RandomSource, SimConfig, World};

fn still_world_config() -> SimConfig {
    SimConfig {
        num_iterations: 30,
        bugs_number: 1,
        world_width: 5,
        world_height: 5,
        diffusion_rate: 0.0,
        evaporation_rate: 0.0,
        random_move_chance: 0.0,
        ..SimConfig::default()
    }
}

fn single_bug_sim(ideal_temperature: u32, output_heat: u32, seed: u64) -> Simulation {
    let config = still_world_config();
    let mut world = World::new(config.world_width, config.world_height);
    let origin = world.torus.index(0, 0);
    let population = Population::from_bugs(
        &mut world,
        vec![Bug::new(origin, ideal_temperature, output_heat)],
    )
    .unwrap();
    Simulation::from_parts(config, world, population, RandomSource::new(seed), vec![])
}

#[test]
fn test_content_bug_stays_until_its_own_heat_builds_up() {
    let mut sim = single_bug_sim(0, 10, 1);
    assert_eq!(sim.mean_unhappiness(), 0.0);

    // step 1: the field is still zero, so the bug is content and warms its own cell
    sim.step();
    assert_eq!(sim.mean_unhappiness(), 0.0);
    assert_eq!(sim.population.bugs[0].locus, 0);
    assert_eq!(sim.world.heat.heat(0), 10.0);
    assert_eq!(sim.world.heat.total(), 10.0);

    // step 2: its own deposit makes it too hot, so it leaves for a cooler neighbour
    sim.step();
    assert_eq!(sim.mean_unhappiness(), 10.0);
    let locus = sim.population.bugs[0].locus;
    assert_ne!(locus, 0);
    assert!(sim.world.torus.is_neighbour(0, locus));
    assert_eq!(sim.world.heat.heat(0), 10.0);
    assert_eq!(sim.world.heat.heat(locus), 10.0);
    assert!(sim.world.occupancy.is_free(0));
    assert_eq!(sim.world.occupancy.get(locus), Occupancy::Bug(0));
}

#[test]
fn test_movement_reads_transported_field() {
    let config = SimConfig {
        diffusion_rate: 0.5,
        ..still_world_config()
    };
    let mut world = World::new(5, 5);
    world.heat.add_heat(12, 80.0);
    let population = Population::from_bugs(&mut world, vec![Bug::new(12, 40, 5)]).unwrap();
    let mut sim = Simulation::from_parts(config, world, population, RandomSource::new(6), vec![]);
    assert_eq!(sim.mean_unhappiness(), 40.0);

    // half of the 80 spreads out before the bug looks, leaving exactly its ideal 40
    sim.step();
    assert_eq!(sim.mean_unhappiness(), 0.0);
    assert_eq!(sim.population.bugs[0].locus, 12);
    assert_eq!(sim.world.heat.heat(12), 45.0);
    for n in sim.world.torus.neighbours(12) {
        assert_eq!(sim.world.heat.heat(n), 5.0);
    }
}

#[test]
fn test_lone_bug_deposits_once_per_step_nearby() {
    for seed in [1, 7, 42, 1234] {
        let mut sim = single_bug_sim(50, 10, seed);
        assert_eq!(sim.mean_unhappiness(), 50.0);

        for step in 1..=30 {
            let before: Vec<f64> = sim.world.heat.current().to_vec();
            let previous = sim.population.bugs[0].locus;

            sim.step();

            let after = sim.world.heat.current();
            let changed: Vec<usize> = (0..after.len()).filter(|&i| after[i] != before[i]).collect();
            assert_eq!(changed.len(), 1, "seed {seed} step {step}: {changed:?}");

            let warmed = changed[0];
            assert_eq!(after[warmed] - before[warmed], 10.0);
            assert!(
                warmed == previous || sim.world.torus.is_neighbour(previous, warmed),
                "seed {seed} step {step}: warmed {warmed} away from {previous}"
            );
            // the warmed cell is where the bug ended up
            assert_eq!(sim.population.bugs[0].locus, warmed);
        }
    }
}

#[test]
fn test_lone_bug_first_unhappiness_matches_setup() {
    // unhappiness is measured before the bug acts, on a still-zero field
    let mut sim = single_bug_sim(50, 10, 3);
    sim.step();
    assert_eq!(sim.mean_unhappiness(), 50.0);
    sim.step();
    assert_eq!(sim.mean_unhappiness(), 40.0);
}

#[test]
fn test_content_bug_ignores_crowd() {
    let config = SimConfig {
        bugs_number: 3,
        ..still_world_config()
    };
    let mut world = World::new(5, 5);
    let population = Population::from_bugs(
        &mut world,
        vec![Bug::new(12, 0, 0), Bug::new(13, 30, 5), Bug::new(7, 30, 5)],
    )
    .unwrap();
    let mut sim = Simulation::from_parts(config, world, population, RandomSource::new(77), vec![]);

    for _ in 0..10 {
        sim.step();
        assert_eq!(sim.population.bugs[0].locus, 12);
        assert_eq!(sim.world.occupancy.get(12), Occupancy::Bug(0));
    }
}

#[test]
fn test_run_reports_setup_value_first() {
    let config = SimConfig {
        num_iterations: 5,
        bugs_number: 12,
        world_width: 9,
        world_height: 7,
        seed: Some(31),
        ..SimConfig::default()
    };
    let (handle, values) = UnhappinessRecorderOp::handle();
    let mut sim = Simulation::new(config, vec![handle]).unwrap();
    let setup = sim.mean_unhappiness();

    sim.run().unwrap();

    let values = values.borrow();
    assert_eq!(values.len(), 6);
    assert_eq!(values[0], setup);
}
