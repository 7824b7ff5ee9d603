#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ecosim::simulation::ecosystem::Ecosystem;
use ecosim::simulation::entity::Entity;
use ecosim::simulation::event_log::{EventCategory, EventLog};
use ecosim::simulation::geometric_utils::{vec2, wrap_around_mut};
use ecosim::simulation::kind::Kind;
use ecosim::simulation::params::{Params, ReproductionPolicy};
use ecosim::simulation::rng::SimRng;
use rand::SeedableRng;

fn create_test_params() -> Params {
    Params {
        seed: Some(7),
        ..Params::default()
    }
}

/// Params for hand-built scenarios: no background seeding, no initial food.
fn quiet_params() -> Params {
    Params {
        initial_food: 0,
        plant_growth_chance: 0.0,
        direction_change_chance: 0.0,
        ..create_test_params()
    }
}

fn herbivore(energy: f32, age: u32) -> Entity {
    let mut rng = SimRng::seed_from_u64(1);
    Entity::new(Kind::Herbivore, vec2(50.0, 50.0), "h", &mut rng)
        .with_energy(energy)
        .with_age(age)
}

#[test]
fn test_ecosystem_initialization() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(params.clone());

    ecosystem.initialize(20, 5, 30);

    assert_eq!(ecosystem.entities().len(), 55);
    assert_eq!(ecosystem.food().len(), params.initial_food);
    assert_eq!(ecosystem.tick(), 0);

    let stats = ecosystem.statistics();
    assert_eq!(stats.herbivores, 20);
    assert_eq!(stats.carnivores, 5);
    assert_eq!(stats.plants, 30);
    assert_eq!(stats.food, 20);

    for entity in ecosystem.entities() {
        assert!(entity.is_alive());
        assert!(entity.pos[0] >= 0.0 && entity.pos[0] < params.world_width);
        assert!(entity.pos[1] >= 0.0 && entity.pos[1] < params.world_height);
    }
    for item in ecosystem.food() {
        assert_eq!(item.energy, 25.0);
    }
}

#[test]
fn test_zero_delta_step_keeps_population() {
    let mut ecosystem = Ecosystem::new(create_test_params());
    ecosystem.initialize(20, 5, 30);

    ecosystem.step(0.0);

    let stats = ecosystem.statistics();
    assert_eq!(ecosystem.entities().len(), 55);
    assert_eq!(stats.population(), 55);
    assert_eq!(stats.food, 20);
    assert_eq!(stats.births_this_tick, 0);
    assert_eq!(stats.deaths_this_tick, 0);
    assert_eq!(stats.tick, 1);
}

#[test]
fn test_initialize_clamps_to_population_cap() {
    let params = Params {
        max_entities: 10,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(params);

    ecosystem.initialize(20, 5, 30);

    assert_eq!(ecosystem.entities().len(), 10);
    assert_eq!(ecosystem.statistics().herbivores, 10);
    assert_eq!(ecosystem.statistics().carnivores, 0);
}

#[test]
fn test_initialize_is_a_full_reset() {
    let mut ecosystem = Ecosystem::new(create_test_params());
    ecosystem.initialize(20, 5, 30);
    for _ in 0..25 {
        ecosystem.step(0.1);
    }
    ecosystem.spawn_food(50);

    ecosystem.initialize(3, 2, 1);

    assert_eq!(ecosystem.entities().len(), 6);
    assert_eq!(ecosystem.food().len(), 20);
    assert_eq!(ecosystem.tick(), 0);
    assert_eq!(ecosystem.statistics().total_births, 0);
    assert_eq!(ecosystem.statistics().total_deaths, 0);
    assert!(ecosystem.entities().iter().all(|e| e.age() == 0));
}

#[test]
fn test_spawn_food_truncates_at_capacity() {
    let mut ecosystem = Ecosystem::new(create_test_params());
    ecosystem.initialize(0, 0, 0);
    assert_eq!(ecosystem.spawn_food(70), 70);
    assert_eq!(ecosystem.food().len(), 90);

    let added = ecosystem.spawn_food(200);

    assert_eq!(added, 10);
    assert_eq!(ecosystem.food().len(), 100);
    assert_eq!(ecosystem.spawn_food(5), 0);
    assert_eq!(ecosystem.statistics().food, 100);
}

#[test]
fn test_add_food_respects_capacity() {
    let params = Params {
        max_food: 2,
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 0);

    assert!(ecosystem.add_food(vec2(1.0, 1.0), 10.0));
    assert!(ecosystem.add_food(vec2(2.0, 2.0), 10.0));
    assert!(!ecosystem.add_food(vec2(3.0, 3.0), 10.0));
    assert_eq!(ecosystem.food().len(), 2);
}

#[test]
fn test_add_entity_respects_cap_and_rejects_dead() {
    let params = Params {
        max_entities: 1,
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params.clone());
    ecosystem.initialize(0, 0, 0);

    let mut corpse = herbivore(0.01, 0);
    let mut rng = SimRng::seed_from_u64(3);
    corpse.update(1.0, &params, &mut rng);
    assert!(!ecosystem.add_entity(corpse));

    assert!(ecosystem.add_entity(herbivore(80.0, 0)));
    assert!(!ecosystem.add_entity(herbivore(80.0, 0)));
    assert_eq!(ecosystem.entities().len(), 1);
}

#[test]
fn test_deaths_are_counted_and_removed() {
    let mut ecosystem = Ecosystem::new(quiet_params());
    ecosystem.initialize(0, 0, 0);
    for _ in 0..5 {
        ecosystem.add_entity(herbivore(0.01, 0));
    }
    for _ in 0..3 {
        ecosystem.add_entity(herbivore(80.0, 0));
    }
    ecosystem.add_entity(herbivore(80.0, 199));

    ecosystem.step(1.0);

    let stats = ecosystem.statistics();
    assert_eq!(stats.deaths_this_tick, 6);
    assert_eq!(stats.starved_this_tick, 5);
    assert_eq!(stats.aged_out_this_tick, 1);
    assert_eq!(ecosystem.entities().len(), 3);
    assert!(ecosystem.entities().iter().all(Entity::is_alive));

    ecosystem.step(1.0);
    assert_eq!(ecosystem.statistics().deaths_this_tick, 0);
    assert_eq!(ecosystem.statistics().total_deaths, 6);
}

#[test]
fn test_organism_death_from_no_energy() {
    let mut ecosystem = Ecosystem::new(quiet_params());
    ecosystem.initialize(0, 0, 3);
    let mut rng = SimRng::seed_from_u64(5);

    for i in 0..25 {
        let kind = if i < 20 { Kind::Herbivore } else { Kind::Carnivore };
        let entity = Entity::new(kind, vec2(10.0 * i as f32, 40.0), "starving", &mut rng)
            .with_energy(0.01);
        assert!(ecosystem.add_entity(entity));
    }

    // insertion is visible before the next tick
    let stats = ecosystem.statistics();
    assert_eq!(stats.herbivores, 20);
    assert_eq!(stats.carnivores, 5);
    assert_eq!(stats.population(), 28);

    ecosystem.step(1.0);

    assert_eq!(ecosystem.statistics().deaths_this_tick, 25);
    assert_eq!(ecosystem.statistics().starved_this_tick, 25);
    assert!(
        ecosystem
            .entities()
            .iter()
            .all(|entity| entity.kind == Kind::Plant)
    );
}

#[test]
fn test_event_log_keeps_most_recent() {
    let mut log = EventLog::with_capacity(3);
    for tick in 0..5 {
        log.log(tick, format!("drop {tick}"), EventCategory::Food);
    }

    let ticks: Vec<u64> = log.latest(10).map(|event| event.tick).collect();
    assert_eq!(ticks, vec![4, 3, 2]);
    assert_eq!(log.count(EventCategory::Food), 3);

    log.clear();
    assert_eq!(log.latest(10).count(), 0);
}

#[test]
fn test_reproduction_appends_offspring() {
    let params = Params {
        reproduction: ReproductionPolicy {
            chance: 1.0,
            ..ReproductionPolicy::default()
        },
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 0);
    ecosystem.add_entity(herbivore(150.0, 30));

    ecosystem.step(0.0);

    let stats = ecosystem.statistics();
    assert_eq!(stats.births_this_tick, 1);
    assert_eq!(ecosystem.entities().len(), 2);
    let child = &ecosystem.entities()[1];
    assert_eq!(child.age(), 0);
    assert!(child.energy() < ecosystem.entities()[0].energy());

    // the parent paid for it and is no longer eligible
    ecosystem.step(0.0);
    assert_eq!(ecosystem.statistics().births_this_tick, 0);
    assert_eq!(ecosystem.statistics().total_births, 1);
}

#[test]
fn test_reproduction_respects_population_cap() {
    let params = Params {
        max_entities: 3,
        reproduction: ReproductionPolicy {
            chance: 1.0,
            ..ReproductionPolicy::default()
        },
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 0);
    ecosystem.add_entity(herbivore(150.0, 30));
    ecosystem.add_entity(herbivore(150.0, 30));

    ecosystem.step(0.0);

    assert_eq!(ecosystem.statistics().births_this_tick, 1);
    assert_eq!(ecosystem.entities().len(), 3);
}

#[test]
fn test_plant_growth() {
    let params = Params {
        plant_growth_chance: 1.0,
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 0);

    ecosystem.step(0.0);
    assert_eq!(ecosystem.statistics().plants, 0);

    ecosystem.step(0.1);
    assert_eq!(ecosystem.statistics().plants, 1);
    let newest = ecosystem.event_log().latest(1).next().expect("growth was logged");
    assert_eq!(newest.category, EventCategory::Growth);
    assert_eq!(newest.to_string(), format!("[2] {}", newest.description));
}

#[test]
fn test_plant_growth_stops_at_cap() {
    let params = Params {
        max_entities: 4,
        plant_growth_chance: 1.0,
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 4);

    for _ in 0..10 {
        ecosystem.step(0.1);
        assert!(ecosystem.entities().len() <= 4);
    }
}

#[test]
fn test_plants_photosynthesize() {
    let mut ecosystem = Ecosystem::new(quiet_params());
    ecosystem.initialize(0, 0, 1);

    ecosystem.step(0.0);

    let plant = &ecosystem.entities()[0];
    assert!((plant.energy() - 50.1).abs() < 1e-4);
}

#[test]
fn test_wrap_around() {
    let params = quiet_params();
    let mut ecosystem = Ecosystem::new(params.clone());
    ecosystem.initialize(0, 0, 0);

    let mut rng = SimRng::seed_from_u64(5);
    let mut runner = Entity::new(Kind::Carnivore, vec2(1199.0, 400.0), "runner", &mut rng);
    runner.vel = vec2(1.0, 0.0);
    ecosystem.add_entity(runner);

    ecosystem.step(1.0);

    let runner = &ecosystem.entities()[0];
    assert!((runner.pos[0] - 19.0).abs() < 1e-3);
    assert!(runner.pos[0] >= 0.0 && runner.pos[0] < params.world_width);
}

#[test]
fn test_wrap_around_never_lands_on_far_edge() {
    let mut pos = vec2(-1e-6, -1e-6);
    wrap_around_mut(&mut pos, 1200.0, 800.0);
    assert!(pos[0] >= 0.0 && pos[0] < 1200.0, "x wrapped to {}", pos[0]);
    assert!(pos[1] >= 0.0 && pos[1] < 800.0, "y wrapped to {}", pos[1]);

    let mut pos = vec2(-250.0, 1700.0);
    wrap_around_mut(&mut pos, 1200.0, 800.0);
    assert_eq!(pos[0], 950.0);
    assert_eq!(pos[1], 100.0);
}

#[test]
fn test_consume_food_is_atomic() {
    let mut ecosystem = Ecosystem::new(quiet_params());
    ecosystem.initialize(0, 0, 0);
    ecosystem.add_entity(herbivore(80.0, 0));
    ecosystem.add_food(vec2(10.0, 10.0), 25.0);

    assert_eq!(ecosystem.consume_food(1, 0), None);
    assert_eq!(ecosystem.consume_food(0, 1), None);

    assert_eq!(ecosystem.consume_food(0, 0), Some(25.0));
    assert!(ecosystem.food().is_empty());
    assert_eq!(ecosystem.entities()[0].energy(), 105.0);
    assert_eq!(ecosystem.consume_food(0, 0), None);
}

#[test]
fn test_seeded_runs_are_deterministic() {
    let run = || {
        let mut ecosystem = Ecosystem::with_rng(Params::default(), SimRng::seed_from_u64(99));
        ecosystem.initialize(20, 5, 30);
        for _ in 0..150 {
            ecosystem.step(0.1);
        }
        ecosystem
    };

    let a = run();
    let b = run();

    assert_eq!(a.statistics(), b.statistics());
    assert_eq!(a.entities().len(), b.entities().len());
    for (x, y) in a.entities().iter().zip(b.entities()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.energy(), y.energy());
        assert_eq!(x.name, y.name);
    }
}

#[test]
fn test_snapshot_mirrors_state() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(params.clone());
    ecosystem.initialize(4, 3, 2);

    let snapshot = ecosystem.snapshot();

    assert_eq!(snapshot.width, params.world_width);
    assert_eq!(snapshot.height, params.world_height);
    assert_eq!(snapshot.entities.len(), 9);
    assert_eq!(snapshot.food.len(), 20);
    for (view, entity) in snapshot.entities.iter().zip(ecosystem.entities()) {
        assert_eq!(view.kind, entity.kind);
        assert_eq!(view.pos, [entity.pos[0], entity.pos[1]]);
        assert_eq!(view.size, entity.size);
        assert!(view.is_alive);
        assert_eq!(view.color, entity.display_color(params.low_energy_threshold));
    }
}

#[test]
fn test_event_log_records_births_and_deaths() {
    let params = Params {
        reproduction: ReproductionPolicy {
            chance: 1.0,
            ..ReproductionPolicy::default()
        },
        ..quiet_params()
    };
    let mut ecosystem = Ecosystem::new(params);
    ecosystem.initialize(0, 0, 0);
    ecosystem.add_entity(herbivore(150.0, 30));
    ecosystem.add_entity(herbivore(0.01, 0));

    ecosystem.step(0.5);

    let log = ecosystem.event_log();
    assert_eq!(log.count(EventCategory::Birth), 1);
    assert_eq!(log.count(EventCategory::Death), 1);
    assert_eq!(log.count(EventCategory::Food), 0);
}
