//! Food items that entities can consume for energy.
//!
//! Food is inert: it never moves, decays or changes value. Consuming it takes
//! the whole item, there is no partial consumption.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::entity::Entity;
use super::geometric_utils::random_position;

/// Energy carried by a food item when none is specified.
pub const DEFAULT_FOOD_ENERGY: f32 = 25.0;

/// An energy deposit at a fixed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Energy handed to whoever eats this item.
    pub energy: f32,
}

impl Food {
    /// Creates a food item at `pos`.
    pub fn new(pos: Array1<f32>, energy: f32) -> Self {
        Self { pos, energy }
    }

    /// Creates a new food item at a random position inside the world.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source used for the position.
    /// * `width` - World width.
    /// * `height` - World height.
    /// * `energy` - The energy value for this food item.
    pub fn new_random(rng: &mut impl Rng, width: f32, height: f32, energy: f32) -> Self {
        Self::new(random_position(rng, width, height), energy)
    }

    /// Display color of food.
    pub fn color(&self) -> Rgba {
        Rgba::GREEN
    }

    /// Feeds this item to `entity`, destroying it.
    ///
    /// Returns the energy that was offered.
    pub fn consume_by(self, entity: &mut Entity) -> f32 {
        entity.eat(self.energy);
        self.energy
    }
}
