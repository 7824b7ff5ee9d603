//! Main ecosystem simulation.
//!
//! The ecosystem owns every entity and food item and advances them through a
//! fixed per-tick pipeline:
//! - entity updates (drain, aging, movement, vitality)
//! - eating (passive photosynthesis for plants)
//! - two-phase reproduction under the population cap
//! - removal of the dead
//! - background plant seeding
//! - statistics
//!
//! All randomness comes from a single generator owned by the ecosystem, so a
//! seeded ecosystem replays identically.

use ndarray::Array1;
use rand::Rng;

use super::entity::Entity;
use super::event_log::{EventCategory, EventLog};
use super::food::Food;
use super::geometric_utils::{random_position, wrap_around_mut};
use super::kind::Kind;
use super::params::Params;
use super::rng::{self, SimRng};
use super::snapshot::{EntityView, FoodView, Snapshot};
use super::stats::Statistics;

/// The simulated world.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    params: Params,
    entities: Vec<Entity>,
    food: Vec<Food>,
    stats: Statistics,
    event_log: EventLog,
    rng: SimRng,
    /// Ticks since the last initialize.
    tick: u64,
    /// Counter used to give spawned entities unique names.
    serial: u64,
}

impl Ecosystem {
    /// Creates an empty ecosystem, seeding its generator from `params.seed`.
    ///
    /// Call [`Ecosystem::initialize`] to populate it.
    pub fn new(params: Params) -> Self {
        let rng = rng::seeded(params.seed);
        Self::with_rng(params, rng)
    }

    /// Creates an empty ecosystem driven by the given generator.
    pub fn with_rng(params: Params, rng: SimRng) -> Self {
        log::info!(
            "ecosystem created: {}x{}, at most {} entities and {} food",
            params.world_width,
            params.world_height,
            params.max_entities,
            params.max_food
        );
        Self {
            params,
            entities: Vec::new(),
            food: Vec::new(),
            stats: Statistics::default(),
            event_log: EventLog::default(),
            rng,
            tick: 0,
            serial: 0,
        }
    }

    /// Clears all state and spawns a fresh population plus the initial food batch.
    ///
    /// Spawning stops at the population cap, so the live population can be
    /// smaller than requested. Safe to call again as a full reset.
    pub fn initialize(&mut self, herbivores: usize, carnivores: usize, plants: usize) {
        self.entities.clear();
        self.food.clear();
        self.event_log.clear();
        self.stats = Statistics::default();
        self.tick = 0;
        self.serial = 0;

        let requested = herbivores + carnivores + plants;
        for (kind, count) in [
            (Kind::Herbivore, herbivores),
            (Kind::Carnivore, carnivores),
            (Kind::Plant, plants),
        ] {
            for _ in 0..count {
                if !self.spawn_random_entity(kind) {
                    break;
                }
            }
        }

        if self.entities.len() < requested {
            log::warn!(
                "requested {} entities but the population cap is {}; spawned {}",
                requested,
                self.params.max_entities,
                self.entities.len()
            );
        }

        self.spawn_food(self.params.initial_food);
        self.stats.recount(&self.entities, self.food.len());

        log::info!(
            "ecosystem initialized with {} entities and {} food",
            self.entities.len(),
            self.food.len()
        );
    }

    /// Advances the simulation by one tick covering `dt` simulated seconds.
    pub fn step(&mut self, dt: f32) {
        self.tick += 1;
        self.stats.begin_tick();

        self.update_entities(dt);
        self.handle_eating();
        self.handle_reproduction();
        self.remove_dead_entities();
        self.handle_plant_growth(dt);

        self.stats.tick = self.tick;
        self.stats.recount(&self.entities, self.food.len());
    }

    /// Adds up to `count` food items at random positions.
    ///
    /// Requests beyond the food capacity are truncated. Returns how many items
    /// were actually added.
    pub fn spawn_food(&mut self, count: usize) -> usize {
        let room = self.params.max_food.saturating_sub(self.food.len());
        let added = count.min(room);

        for _ in 0..added {
            let item = Food::new_random(
                &mut self.rng,
                self.params.world_width,
                self.params.world_height,
                self.params.food_energy,
            );
            self.food.push(item);
        }

        if added > 0 {
            self.event_log.log(
                self.tick,
                format!("{added} food items added"),
                EventCategory::Food,
            );
        }
        if added < count {
            log::debug!("food capacity reached, dropped {} items", count - added);
        }
        self.stats.food = self.food.len();
        added
    }

    /// Inserts a food item at `pos`. Returns `false` if the food capacity is reached.
    pub fn add_food(&mut self, pos: Array1<f32>, energy: f32) -> bool {
        if self.food.len() >= self.params.max_food {
            return false;
        }
        self.food.push(Food::new(pos, energy));
        self.stats.food = self.food.len();
        true
    }

    /// Inserts an entity. Returns `false` if the population cap is reached or
    /// the entity is already dead.
    pub fn add_entity(&mut self, entity: Entity) -> bool {
        if self.entities.len() >= self.params.max_entities || !entity.is_alive() {
            return false;
        }
        self.entities.push(entity);
        self.stats.recount(&self.entities, self.food.len());
        true
    }

    /// Feeds the food item at `food_index` to the entity at `entity_index`.
    ///
    /// The item is removed whole. Returns the energy offered, or `None` if
    /// either index is out of range or the entity is dead.
    pub fn consume_food(&mut self, food_index: usize, entity_index: usize) -> Option<f32> {
        if food_index >= self.food.len() {
            return None;
        }
        let entity = self.entities.get_mut(entity_index)?;
        if !entity.is_alive() {
            return None;
        }

        let item = self.food.remove(food_index);
        let energy = item.consume_by(entity);
        self.stats.food = self.food.len();
        Some(energy)
    }

    /// Builds a render view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let threshold = self.params.low_energy_threshold;
        Snapshot {
            width: self.params.world_width,
            height: self.params.world_height,
            entities: self
                .entities
                .iter()
                .map(|entity| EntityView::of(entity, threshold))
                .collect(),
            food: self.food.iter().map(FoodView::of).collect(),
        }
    }

    /// Statistics as of the last tick (or initialize).
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Live entities.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Food items.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Recent notable events.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Ticks since the last initialize.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// World width.
    pub fn width(&self) -> f32 {
        self.params.world_width
    }

    /// World height.
    pub fn height(&self) -> f32 {
        self.params.world_height
    }

    fn update_entities(&mut self, dt: f32) {
        let Self {
            entities,
            params,
            rng,
            ..
        } = self;

        for entity in entities.iter_mut() {
            entity.update(dt, params, rng);
            if params.wrap_edges {
                wrap_around_mut(&mut entity.pos, params.world_width, params.world_height);
            }
        }
    }

    // Plants photosynthesize. Feeding rules for the mobile kinds would hook in here.
    fn handle_eating(&mut self) {
        let credit = self.params.photosynthesis_rate;
        self.entities
            .iter_mut()
            .filter(|entity| entity.kind == Kind::Plant && entity.is_alive())
            .for_each(|plant| plant.eat(credit));
    }

    fn handle_reproduction(&mut self) {
        let Self {
            entities,
            params,
            rng,
            ..
        } = self;

        let population = entities.len();
        let mut offspring = Vec::new();

        for parent in entities.iter_mut() {
            if population + offspring.len() >= params.max_entities {
                break;
            }
            if let Some(child) = parent.reproduce(&params.reproduction, rng) {
                offspring.push(child);
            }
        }

        if offspring.is_empty() {
            return;
        }

        for child in &offspring {
            log::debug!("{} was born", child.name);
            self.event_log.log(
                self.tick,
                format!("{} was born", child.name),
                EventCategory::Birth,
            );
        }
        self.stats.record_births(offspring.len());
        self.entities.extend(offspring);
    }

    fn remove_dead_entities(&mut self) {
        for entity in &self.entities {
            if let Some(cause) = entity.death_cause() {
                self.stats.record_death(cause);
                self.event_log.log(
                    self.tick,
                    format!("{} died of {}", entity.name, cause),
                    EventCategory::Death,
                );
            }
        }
        self.entities.retain(Entity::is_alive);
    }

    // Time-driven, so a zero-length tick seeds nothing.
    fn handle_plant_growth(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.rng.random::<f32>() < self.params.plant_growth_chance
            && self.spawn_random_entity(Kind::Plant)
        {
            self.event_log.log(
                self.tick,
                "a new plant sprouted".to_string(),
                EventCategory::Growth,
            );
        }
    }

    fn spawn_random_entity(&mut self, kind: Kind) -> bool {
        if self.entities.len() >= self.params.max_entities {
            return false;
        }

        let pos = random_position(
            &mut self.rng,
            self.params.world_width,
            self.params.world_height,
        );
        let name = format!("{}_{}", kind.label(), self.serial);
        self.serial += 1;

        let entity = Entity::new(kind, pos, name, &mut self.rng);
        self.entities.push(entity);
        true
    }
}
