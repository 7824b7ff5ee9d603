use anyhow::Context;
use clap::Parser;
use ecosim::simulation::controller::SimulationController;
use ecosim::simulation::params::Params;
use macroquad::color::Color;
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, clear_background, next_frame};
use std::path::PathBuf;

mod graphics;
mod input;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ecosystem population simulator", long_about = None)]
struct Args {
    /// JSON parameter file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Seconds per tick in headless mode
    #[arg(long, default_value = "0.016")]
    dt: f32,

    /// Print the final statistics as JSON in headless mode
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => Params::load_from_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => Params::default(),
    };
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    params.validate().context("invalid parameters")?;

    if args.headless {
        return run_headless(params, &args);
    }

    let conf = Conf {
        window_title: "Ecosystem Simulator".to_string(),
        window_width: params.world_width as i32,
        window_height: params.world_height as i32,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run_windowed(SimulationController::new(params)));
    Ok(())
}

fn run_headless(params: Params, args: &Args) -> anyhow::Result<()> {
    let mut controller = SimulationController::new(params);
    log::info!("running {} headless ticks of {}s", args.ticks, args.dt);

    for _ in 0..args.ticks {
        controller.tick(args.dt);
    }

    let stats = controller.statistics();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

async fn run_windowed(mut controller: SimulationController) {
    log::info!("controls: space pause, R reset, F food, up/down speed, escape quit");
    let food_batch = controller.ecosystem().params().food_batch;

    while controller.is_running() {
        for command in input::poll_commands(food_batch) {
            controller.handle(command);
        }

        controller.tick(get_frame_time());

        clear_background(Color::from_rgba(20, 20, 30, 255));
        let snapshot = controller.snapshot();
        graphics::draw_food(&snapshot);
        graphics::draw_entities(&snapshot);
        graphics::draw_hud(&controller);

        next_frame().await;
    }
}
