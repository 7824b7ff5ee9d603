//! # Ecosim - Ecosystem Population Simulation
//!
//! A bounded 2D world populated with herbivores, carnivores and plants that age,
//! burn energy, wander, reproduce and die, next to a regenerating food supply.
//!
//! ## Features
//!
//! - Per-kind constant tables (energy, lifespan, drain, size, color)
//! - Deterministic runs from a single seeded random source
//! - Two-phase reproduction under a hard population cap
//! - Capped food supply with batch drops
//! - Pause, reset and time scaling through a command interface
//! - Render snapshots and aggregate statistics for an external renderer
//!
//! ## Core Modules
//!
//! - [`simulation::entity`] - Entity state and lifecycle
//! - [`simulation::ecosystem`] - Main simulation logic
//! - [`simulation::controller`] - Run control and command handling
//! - [`simulation::food`] - Food items
//! - [`simulation::snapshot`] - Render views
//! - [`simulation::stats`] - Aggregate statistics

/// Core simulation logic and data structures.
pub mod simulation {
    /// RGBA colors handed to the renderer.
    pub mod color;
    /// Run control: pause, reset, food drops and time scaling.
    pub mod controller;
    /// Main ecosystem simulation.
    pub mod ecosystem;
    /// Entity state and lifecycle.
    pub mod entity;
    /// Recent-event log for the presentation layer.
    pub mod event_log;
    /// Food items that entities can consume.
    pub mod food;
    /// Vector helpers for positions and velocities.
    pub mod geometric_utils;
    /// Entity kinds and their constant tables.
    pub mod kind;
    /// Simulation parameters.
    pub mod params;
    /// The seedable random source.
    pub mod rng;
    /// Render snapshots.
    pub mod snapshot;
    /// Aggregate statistics.
    pub mod stats;
}
