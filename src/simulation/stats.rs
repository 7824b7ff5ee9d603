//! Aggregate statistics derived from the live entity and food sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{DeathCause, Entity};
use super::kind::Kind;

/// Population counters for one tick.
///
/// Counts are recomputed from scratch each tick. The per-tick birth and death
/// counters only reflect the most recent tick; the `total_*` counters
/// accumulate since the last initialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Ticks elapsed since the last initialize.
    pub tick: u64,
    /// Live herbivores.
    pub herbivores: usize,
    /// Live carnivores.
    pub carnivores: usize,
    /// Live plants.
    pub plants: usize,
    /// Food items in the world.
    pub food: usize,
    /// Offspring born during the last tick.
    pub births_this_tick: usize,
    /// Entities removed during the last tick.
    pub deaths_this_tick: usize,
    /// Deaths during the last tick caused by starvation.
    pub starved_this_tick: usize,
    /// Deaths during the last tick caused by old age.
    pub aged_out_this_tick: usize,
    /// Births since the last initialize.
    pub total_births: u64,
    /// Deaths since the last initialize.
    pub total_deaths: u64,
}

impl Statistics {
    /// Total live entities.
    pub fn population(&self) -> usize {
        self.herbivores + self.carnivores + self.plants
    }

    /// Live entities of `kind`.
    pub fn count_of(&self, kind: Kind) -> usize {
        match kind {
            Kind::Herbivore => self.herbivores,
            Kind::Carnivore => self.carnivores,
            Kind::Plant => self.plants,
        }
    }

    /// Clears the per-tick transition counters.
    pub(crate) fn begin_tick(&mut self) {
        self.births_this_tick = 0;
        self.deaths_this_tick = 0;
        self.starved_this_tick = 0;
        self.aged_out_this_tick = 0;
    }

    pub(crate) fn record_births(&mut self, count: usize) {
        self.births_this_tick += count;
        self.total_births += count as u64;
    }

    pub(crate) fn record_death(&mut self, cause: DeathCause) {
        self.deaths_this_tick += 1;
        self.total_deaths += 1;
        match cause {
            DeathCause::Starvation => self.starved_this_tick += 1,
            DeathCause::OldAge => self.aged_out_this_tick += 1,
        }
    }

    /// Recounts the live population and food.
    pub(crate) fn recount(&mut self, entities: &[Entity], food: usize) {
        self.herbivores = 0;
        self.carnivores = 0;
        self.plants = 0;
        self.food = food;

        for entity in entities {
            match entity.kind {
                Kind::Herbivore => self.herbivores += 1,
                Kind::Carnivore => self.carnivores += 1,
                Kind::Plant => self.plants += 1,
            }
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: herbivores {}, carnivores {}, plants {}, food {}, births {}, deaths {}",
            self.tick,
            self.herbivores,
            self.carnivores,
            self.plants,
            self.food,
            self.births_this_tick,
            self.deaths_this_tick,
        )
    }
}
