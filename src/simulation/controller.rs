//! Run control around an [`Ecosystem`]: pause, reset, food drops and time scaling.

use serde::{Deserialize, Serialize};

use super::ecosystem::Ecosystem;
use super::params::Params;
use super::snapshot::Snapshot;
use super::stats::Statistics;

/// External commands accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pause or resume the simulation.
    TogglePause,
    /// Re-initialize the ecosystem with the configured population.
    Reset,
    /// Drop the given number of food items.
    AddFood(usize),
    /// Multiply the time scale by the speed step, up to the maximum.
    IncreaseSpeed,
    /// Divide the time scale by the speed step, down to the minimum.
    DecreaseSpeed,
    /// Stop the simulation.
    Quit,
}

/// Owns the ecosystem and the run state the driver loop manipulates.
#[derive(Debug, Clone)]
pub struct SimulationController {
    ecosystem: Ecosystem,
    paused: bool,
    running: bool,
    time_scale: f32,
    stats_timer: f32,
}

impl SimulationController {
    /// Creates a controller with a freshly initialized ecosystem.
    pub fn new(params: Params) -> Self {
        Self::with_ecosystem(Ecosystem::new(params))
    }

    /// Wraps an existing ecosystem, initializing it with the configured population.
    pub fn with_ecosystem(mut ecosystem: Ecosystem) -> Self {
        reset(&mut ecosystem);
        Self {
            ecosystem,
            paused: false,
            running: true,
            time_scale: 1.0,
            stats_timer: 0.0,
        }
    }

    /// Advances the simulation by `raw_dt` wall-clock seconds, scaled by the time scale.
    ///
    /// Does nothing while paused. Returns the statistics whenever a reporting
    /// interval of simulated time has elapsed.
    pub fn tick(&mut self, raw_dt: f32) -> Option<Statistics> {
        if self.paused || !self.running {
            return None;
        }

        let dt = raw_dt * self.time_scale;
        self.ecosystem.step(dt);

        self.stats_timer += dt;
        if self.stats_timer < self.ecosystem.params().stats_interval {
            return None;
        }
        self.stats_timer = 0.0;

        let stats = self.ecosystem.statistics();
        log::info!("{stats}");
        Some(stats)
    }

    /// Applies an external command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!(
                    "simulation {}",
                    if self.paused { "paused" } else { "resumed" }
                );
            }
            Command::Reset => {
                reset(&mut self.ecosystem);
                self.stats_timer = 0.0;
                log::info!("simulation reset");
            }
            Command::AddFood(count) => {
                let added = self.ecosystem.spawn_food(count);
                log::info!("added {added} food items");
            }
            Command::IncreaseSpeed => {
                let params = self.ecosystem.params();
                self.time_scale =
                    (self.time_scale * params.speed_step).min(params.max_time_scale);
                log::info!("speed: {:.2}x", self.time_scale);
            }
            Command::DecreaseSpeed => {
                let params = self.ecosystem.params();
                self.time_scale = (self.time_scale / params.speed_step).max(params.min_time_scale);
                log::info!("speed: {:.2}x", self.time_scale);
            }
            Command::Quit => {
                self.running = false;
                log::info!("simulation stopped");
            }
        }
    }

    /// Render view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.ecosystem.snapshot()
    }

    /// Current statistics. Read-only.
    pub fn statistics(&self) -> Statistics {
        self.ecosystem.statistics()
    }

    /// The controlled ecosystem.
    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    /// Whether the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the simulation is still running (no quit received).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current time multiplier.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

fn reset(ecosystem: &mut Ecosystem) {
    let params = ecosystem.params();
    let (herbivores, carnivores, plants) = (
        params.initial_herbivores,
        params.initial_carnivores,
        params.initial_plants,
    );
    ecosystem.initialize(herbivores, carnivores, plants);
}
