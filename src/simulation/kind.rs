//! The closed set of entity kinds and their constant tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Rgba;

/// The kind of an entity.
///
/// Behavior differences between kinds are data, looked up through [`Kind::traits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Wanders and drains energy slowly.
    Herbivore,
    /// Wanders and drains energy quickly.
    Carnivore,
    /// Never moves and gains energy over time.
    Plant,
}

/// Per-kind constants, fixed when an entity is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindTraits {
    /// Energy a freshly spawned entity starts with.
    pub initial_energy: f32,
    /// Upper bound for energy.
    pub max_energy: f32,
    /// Age (in ticks) at which the entity dies of old age.
    pub max_age: u32,
    /// Energy lost per simulated second. Negative means net gain.
    pub drain_rate: f32,
    /// Display size of a spawned (non-offspring) entity.
    pub size: f32,
    /// Base display color.
    pub color: Rgba,
}

const HERBIVORE: KindTraits = KindTraits {
    initial_energy: 80.0,
    max_energy: 150.0,
    max_age: 200,
    drain_rate: 1.5,
    size: 8.0,
    color: Rgba::BLUE,
};

const CARNIVORE: KindTraits = KindTraits {
    initial_energy: 100.0,
    max_energy: 200.0,
    max_age: 150,
    drain_rate: 2.0,
    size: 12.0,
    color: Rgba::RED,
};

const PLANT: KindTraits = KindTraits {
    initial_energy: 50.0,
    max_energy: 100.0,
    max_age: 300,
    drain_rate: -0.5,
    size: 6.0,
    color: Rgba::GREEN,
};

impl Kind {
    /// All kinds, in statistics order.
    pub const ALL: [Kind; 3] = [Kind::Herbivore, Kind::Carnivore, Kind::Plant];

    /// Returns the constant table for this kind.
    pub fn traits(self) -> &'static KindTraits {
        match self {
            Kind::Herbivore => &HERBIVORE,
            Kind::Carnivore => &CARNIVORE,
            Kind::Plant => &PLANT,
        }
    }

    /// Whether entities of this kind move.
    pub fn is_mobile(self) -> bool {
        !matches!(self, Kind::Plant)
    }

    /// Prefix used for spawned entity names.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Herbivore => "Herbivore",
            Kind::Carnivore => "Carnivore",
            Kind::Plant => "Plant",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
