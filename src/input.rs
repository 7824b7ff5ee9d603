use ecosim::simulation::controller::Command;
use macroquad::prelude::*;

/// Translates this frame's key presses into controller commands.
///
/// Space pauses, R resets, F drops food, Up/Down change speed, Escape quits.
pub fn poll_commands(food_batch: usize) -> Vec<Command> {
    let bindings = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::R, Command::Reset),
        (KeyCode::F, Command::AddFood(food_batch)),
        (KeyCode::Up, Command::IncreaseSpeed),
        (KeyCode::Down, Command::DecreaseSpeed),
        (KeyCode::Escape, Command::Quit),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
}
