use ecosim::simulation::color::Rgba;
use ecosim::simulation::controller::SimulationController;
use ecosim::simulation::event_log::EventCategory;
use ecosim::simulation::kind::Kind;
use ecosim::simulation::snapshot::Snapshot;
use macroquad::prelude::*;

const HUD_EVENTS: usize = 8;

/// Maps world coordinates onto the current window.
struct Viewport {
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn fit(snapshot: &Snapshot) -> Self {
        Self {
            scale_x: screen_width() / snapshot.width,
            scale_y: screen_height() / snapshot.height,
        }
    }

    fn point(&self, pos: [f32; 2]) -> (f32, f32) {
        (pos[0] * self.scale_x, pos[1] * self.scale_y)
    }

    fn length(&self, len: f32) -> f32 {
        len * self.scale_x.min(self.scale_y)
    }
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

pub fn draw_food(snapshot: &Snapshot) {
    let view = Viewport::fit(snapshot);
    let size = view.length(6.0);
    for item in &snapshot.food {
        let (x, y) = view.point(item.pos);
        draw_rectangle(x - size / 2.0, y - size / 2.0, size, size, to_color(item.color));
    }
}

pub fn draw_entities(snapshot: &Snapshot) {
    let view = Viewport::fit(snapshot);
    for entity in snapshot.entities.iter().filter(|e| e.is_alive) {
        let (x, y) = view.point(entity.pos);
        let size = view.length(entity.size);
        let left = x - size / 2.0;
        let top = y - size / 2.0;

        draw_rectangle(left, top, size, size, to_color(entity.color));

        // energy bar
        if entity.kind != Kind::Plant {
            draw_rectangle(
                left,
                top - 3.0,
                size * entity.energy_fraction.clamp(0.0, 1.0),
                2.0,
                GREEN,
            );
        }
    }
}

pub fn draw_hud(controller: &SimulationController) {
    let stats = controller.statistics();
    let font_size = 20.0;
    let mut y = 24.0;

    let lines = [
        format!(
            "Herbivores: {}  Carnivores: {}  Plants: {}  Food: {}",
            stats.herbivores, stats.carnivores, stats.plants, stats.food
        ),
        format!(
            "Tick: {}  Births: {}  Deaths: {}  Speed: {:.2}x{}",
            stats.tick,
            stats.total_births,
            stats.total_deaths,
            controller.time_scale(),
            if controller.is_paused() { "  [PAUSED]" } else { "" }
        ),
    ];
    for line in &lines {
        draw_text(line, 10.0, y, font_size, WHITE);
        y += font_size;
    }

    y += 6.0;
    for event in controller.ecosystem().event_log().latest(HUD_EVENTS) {
        let color = match event.category {
            EventCategory::Birth => Color::from_rgba(100, 255, 100, 255),
            EventCategory::Death => Color::from_rgba(150, 150, 150, 255),
            EventCategory::Growth => Color::from_rgba(100, 200, 255, 255),
            EventCategory::Food => Color::from_rgba(255, 200, 100, 255),
        };
        draw_text(&event.to_string(), 10.0, y, 14.0, color);
        y += 14.0;
    }
}
