//! Entity state and lifecycle.
//!
//! An entity drains (or, for plants, gains) energy every tick, ages, wanders
//! and eventually dies of starvation or old age. Randomness is always borrowed
//! from the caller so a seeded ecosystem replays identically.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Rgba;
use super::geometric_utils::{magnitude, random_direction};
use super::kind::{Kind, KindTraits};
use super::params::{Params, ReproductionPolicy};

/// Why an entity died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Energy dropped to zero.
    Starvation,
    /// Age reached the kind's maximum.
    OldAge,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::Starvation => f.write_str("starvation"),
            DeathCause::OldAge => f.write_str("old age"),
        }
    }
}

/// A single organism.
///
/// Energy, age and death are private so that their invariants hold:
/// energy stays in `[0, max_energy]`, age never decreases and death is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Kind of the entity.
    pub kind: Kind,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Velocity (always zero for plants).
    pub vel: Array1<f32>,
    /// Display size.
    pub size: f32,
    /// Display name.
    pub name: String,
    energy: f32,
    age: u32,
    death: Option<DeathCause>,
    children: u32,
}

impl Entity {
    /// Creates a fresh entity of `kind` at `pos` with the kind's initial energy.
    pub fn new(kind: Kind, pos: Array1<f32>, name: impl Into<String>, rng: &mut impl Rng) -> Self {
        let traits = kind.traits();
        Self {
            kind,
            pos,
            vel: initial_velocity(kind, rng),
            size: traits.size,
            name: name.into(),
            energy: traits.initial_energy,
            age: 0,
            death: None,
            children: 0,
        }
    }

    /// Replaces the energy, clamped to `[0, max_energy]`.
    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = energy.clamp(0.0, self.max_energy());
        self
    }

    /// Replaces the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Constant table for this entity's kind.
    pub fn traits(&self) -> &'static KindTraits {
        self.kind.traits()
    }

    /// Current energy.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Upper bound for energy.
    pub fn max_energy(&self) -> f32 {
        self.traits().max_energy
    }

    /// Energy as a fraction of `max_energy`.
    pub fn energy_fraction(&self) -> f32 {
        self.energy / self.max_energy()
    }

    /// Age in ticks.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Age at which the entity dies.
    pub fn max_age(&self) -> u32 {
        self.traits().max_age
    }

    /// Whether the entity is alive.
    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    /// Why the entity died, if it has.
    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death
    }

    /// Advances the entity by one tick covering `dt` seconds.
    ///
    /// Order: energy drain, aging, movement, vitality check. Dead entities are
    /// left untouched.
    pub fn update(&mut self, dt: f32, params: &Params, rng: &mut impl Rng) {
        if !self.is_alive() {
            return;
        }

        self.consume_energy(self.traits().drain_rate * dt);
        if dt > 0.0 {
            self.age = self.age.saturating_add(params.age_step);
        }
        self.move_by(dt, params, rng);
        self.check_vitality();
    }

    /// Wanders for `dt` seconds and pays the movement cost. Plants stay put.
    pub fn move_by(&mut self, dt: f32, params: &Params, rng: &mut impl Rng) {
        if !self.kind.is_mobile() {
            return;
        }

        if rng.random::<f32>() < params.direction_change_chance {
            self.vel = random_direction(rng);
        }

        self.pos += &(&self.vel * (dt * params.move_speed));
        self.consume_energy(magnitude(&self.vel) * dt * params.move_energy_rate);
    }

    /// Adds energy, capped at `max_energy`.
    pub fn eat(&mut self, amount: f32) {
        self.energy = (self.energy + amount).clamp(0.0, self.max_energy());
    }

    /// Whether the entity is currently eligible to reproduce.
    pub fn can_reproduce(&self, policy: &ReproductionPolicy) -> bool {
        self.is_alive()
            && self.energy > self.max_energy() * policy.energy_threshold
            && self.age > policy.maturity_age
    }

    /// Attempts to reproduce.
    ///
    /// Ineligible entities never reproduce. Eligible ones succeed with
    /// probability `policy.chance`, paying the energy cost before the
    /// offspring is derived from them.
    pub fn reproduce(&mut self, policy: &ReproductionPolicy, rng: &mut impl Rng) -> Option<Entity> {
        if !self.can_reproduce(policy) {
            return None;
        }
        if rng.random::<f32>() >= policy.chance {
            return None;
        }

        self.energy *= policy.energy_retention;
        let child = self.offspring(policy, rng);
        self.children += 1;
        Some(child)
    }

    /// Derives an offspring from this entity without modifying it.
    pub fn offspring(&self, policy: &ReproductionPolicy, rng: &mut impl Rng) -> Entity {
        Entity {
            kind: self.kind,
            pos: self.pos.clone(),
            vel: initial_velocity(self.kind, rng),
            size: self.size * policy.offspring_size_ratio,
            name: format!("{}.{}", self.name, self.children + 1),
            energy: self.energy * policy.offspring_energy_ratio,
            age: 0,
            death: None,
            children: 0,
        }
    }

    /// Marks the entity dead if it starved or reached its maximum age.
    ///
    /// Death is final: once set, the cause never changes.
    pub fn check_vitality(&mut self) {
        if self.death.is_some() {
            return;
        }

        let cause = if self.energy <= 0.0 {
            DeathCause::Starvation
        } else if self.age >= self.max_age() {
            DeathCause::OldAge
        } else {
            return;
        };

        log::debug!("{} died of {} at age {}", self.name, cause, self.age);
        self.death = Some(cause);
    }

    /// Color to draw the entity with, tinted when energy runs low.
    pub fn display_color(&self, low_energy_threshold: f32) -> Rgba {
        let base = self.traits().color;
        let fraction = self.energy_fraction();
        if fraction < low_energy_threshold {
            base.starving(fraction)
        } else {
            base
        }
    }

    fn consume_energy(&mut self, amount: f32) {
        self.energy = (self.energy - amount).clamp(0.0, self.max_energy());
    }
}

fn initial_velocity(kind: Kind, rng: &mut impl Rng) -> Array1<f32> {
    if kind.is_mobile() {
        random_direction(rng)
    } else {
        Array1::zeros(2)
    }
}
