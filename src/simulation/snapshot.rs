//! Read-only render view of the ecosystem.
//!
//! A snapshot is a plain copy of what a renderer needs. It holds no
//! references into the ecosystem, so it stays valid across ticks.

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::entity::Entity;
use super::food::Food;
use super::kind::Kind;

/// Render data for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    /// Kind of the entity.
    pub kind: Kind,
    /// Center position.
    pub pos: [f32; 2],
    /// Display size.
    pub size: f32,
    /// Display color, already tinted for low energy.
    pub color: Rgba,
    /// Energy as a fraction of the kind's maximum.
    pub energy_fraction: f32,
    /// Whether the entity is alive.
    pub is_alive: bool,
}

/// Render data for one food item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodView {
    /// Center position.
    pub pos: [f32; 2],
    /// Display color.
    pub color: Rgba,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// World width.
    pub width: f32,
    /// World height.
    pub height: f32,
    /// Entities in ecosystem order.
    pub entities: Vec<EntityView>,
    /// Food items in ecosystem order.
    pub food: Vec<FoodView>,
}

impl EntityView {
    pub(crate) fn of(entity: &Entity, low_energy_threshold: f32) -> Self {
        Self {
            kind: entity.kind,
            pos: [entity.pos[0], entity.pos[1]],
            size: entity.size,
            color: entity.display_color(low_energy_threshold),
            energy_fraction: entity.energy_fraction(),
            is_alive: entity.is_alive(),
        }
    }
}

impl FoodView {
    pub(crate) fn of(food: &Food) -> Self {
        Self {
            pos: [food.pos[0], food.pos[1]],
            color: food.color(),
        }
    }
}
