use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::food::DEFAULT_FOOD_ENERGY;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read.
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    #[error("invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Reproduction tuning shared by every kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReproductionPolicy {
    /// Probability that an eligible entity actually reproduces on a tick.
    pub chance: f32,
    /// Fraction of `max_energy` that must be exceeded to be eligible.
    pub energy_threshold: f32,
    /// Minimum age (exclusive) before reproduction is allowed.
    pub maturity_age: u32,
    /// Fraction of its energy the parent keeps after reproducing.
    pub energy_retention: f32,
    /// Offspring energy as a fraction of the parent's post-cost energy.
    pub offspring_energy_ratio: f32,
    /// Offspring size as a fraction of the parent's size.
    pub offspring_size_ratio: f32,
}

impl Default for ReproductionPolicy {
    fn default() -> Self {
        Self {
            chance: 0.3,
            energy_threshold: 0.8,
            maturity_age: 20,
            energy_retention: 0.6,
            offspring_energy_ratio: 0.7,
            offspring_size_ratio: 0.8,
        }
    }
}

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Simulation area width.
    pub world_width: f32,
    /// Simulation area height.
    pub world_height: f32,
    /// Maximum entity population (hard cap on every spawn path).
    pub max_entities: usize,
    /// Maximum food item count (hard cap).
    pub max_food: usize,
    /// Herbivores spawned by initialize and reset.
    pub initial_herbivores: usize,
    /// Carnivores spawned by initialize and reset.
    pub initial_carnivores: usize,
    /// Plants spawned by initialize and reset.
    pub initial_plants: usize,
    /// Food items spawned by initialize and reset.
    pub initial_food: usize,
    /// Energy value of spawned food items.
    pub food_energy: f32,
    /// Food items dropped by one add-food command.
    pub food_batch: usize,
    /// Reproduction tuning.
    pub reproduction: ReproductionPolicy,
    /// Per-tick probability that a mobile entity picks a new direction.
    pub direction_change_chance: f32,
    /// Movement speed multiplier.
    pub move_speed: f32,
    /// Energy cost per unit of velocity per second.
    pub move_energy_rate: f32,
    /// Energy credited to every plant each tick.
    pub photosynthesis_rate: f32,
    /// Per-tick probability of seeding a new plant.
    pub plant_growth_chance: f32,
    /// Ticks added to an entity's age per update with a positive delta.
    pub age_step: u32,
    /// Energy fraction below which entities are drawn tinted.
    pub low_energy_threshold: f32,
    /// Wrap positions around the world edges (toroidal topology).
    pub wrap_edges: bool,
    /// Simulated seconds between statistics reports.
    pub stats_interval: f32,
    /// Multiplicative step applied by speed-up and slow-down commands.
    pub speed_step: f32,
    /// Lower bound for the time scale.
    pub min_time_scale: f32,
    /// Upper bound for the time scale.
    pub max_time_scale: f32,
    /// Seed for the random source. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_width: 1200.0,
            world_height: 800.0,
            max_entities: 500,
            max_food: 100,
            initial_herbivores: 20,
            initial_carnivores: 5,
            initial_plants: 30,
            initial_food: 20,
            food_energy: DEFAULT_FOOD_ENERGY,
            food_batch: 10,
            reproduction: ReproductionPolicy::default(),
            direction_change_chance: 0.02,
            move_speed: 20.0,
            move_energy_rate: 0.1,
            photosynthesis_rate: 0.1,
            plant_growth_chance: 0.01,
            age_step: 1,
            low_energy_threshold: 0.3,
            wrap_edges: true,
            stats_interval: 2.0,
            speed_step: 1.5,
            min_time_scale: 0.1,
            max_time_scale: 64.0,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file and validates them.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        if self.max_entities == 0 {
            return Err(invalid("max_entities", "must be at least 1"));
        }
        if self.max_food == 0 {
            return Err(invalid("max_food", "must be at least 1"));
        }
        non_negative("food_energy", self.food_energy)?;
        non_negative("move_speed", self.move_speed)?;
        non_negative("move_energy_rate", self.move_energy_rate)?;
        non_negative("photosynthesis_rate", self.photosynthesis_rate)?;
        probability("direction_change_chance", self.direction_change_chance)?;
        probability("plant_growth_chance", self.plant_growth_chance)?;
        probability("low_energy_threshold", self.low_energy_threshold)?;

        let policy = &self.reproduction;
        probability("reproduction.chance", policy.chance)?;
        probability("reproduction.energy_threshold", policy.energy_threshold)?;
        probability("reproduction.energy_retention", policy.energy_retention)?;
        if policy.energy_retention >= 1.0 {
            return Err(invalid(
                "reproduction.energy_retention",
                "must be below 1 so reproducing costs energy",
            ));
        }
        probability(
            "reproduction.offspring_energy_ratio",
            policy.offspring_energy_ratio,
        )?;
        positive(
            "reproduction.offspring_size_ratio",
            policy.offspring_size_ratio,
        )?;

        positive("stats_interval", self.stats_interval)?;
        if !self.speed_step.is_finite() || self.speed_step <= 1.0 {
            return Err(invalid("speed_step", "must be greater than 1"));
        }
        positive("min_time_scale", self.min_time_scale)?;
        positive("max_time_scale", self.max_time_scale)?;
        if self.max_time_scale < self.min_time_scale {
            return Err(invalid("max_time_scale", "must not be below min_time_scale"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ParamsError {
    ParamsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must not be negative, got {value}")))
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("must lie in [0, 1], got {value}")))
    }
}
