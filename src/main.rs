mod app;
mod camera;
mod engine;
mod prompt;
mod renderer;
mod ui;

use std::io::{self, BufRead, Write};

use anyhow::{ensure, Context, Result};
use app::{run_headless, SimApp};
use bouncebox::config::{SimConfig, SpawnConfig};
use bouncebox::scene::{generate_bodies, rng_from_seed, spawn_bodies};
use bouncebox::systems::Recolor;
use camera::Camera;
use clap::Parser;
use engine::window::GameWindow;
use hecs::World;
use prompt::Prompter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::Renderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bouncebox", about = "Elastic sphere collisions in a 3D box")]
struct Args {
    /// Number of spheres
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Width and height of the square window, in pixels
    #[arg(long, default_value_t = 800)]
    window_size: u32,

    /// Edge length of the cubic box
    #[arg(long, default_value_t = 500.0)]
    box_size: f32,

    /// Simulated time advanced per frame
    #[arg(long, default_value_t = 0.016)]
    dt: f32,

    /// Coefficient of restitution, 0 (inelastic) to 1 (elastic)
    #[arg(long, default_value_t = 1.0)]
    restitution: f32,

    /// Maximum initial speed per axis
    #[arg(long, default_value_t = 100.0)]
    max_speed: f32,

    #[arg(long, default_value_t = 10.0)]
    radius_min: f32,

    #[arg(long, default_value_t = 30.0)]
    radius_max: f32,

    /// Focal length of the perspective projection, in pixels
    #[arg(long, default_value_t = 600.0)]
    focal_length: f32,

    /// Distance from the camera to the box center
    #[arg(long, default_value_t = 700.0)]
    camera_distance: f32,

    /// Seed for reproducible runs; defaults to the system clock
    #[arg(long)]
    seed: Option<u64>,

    /// Ask for the main parameters on the terminal before starting
    #[arg(long)]
    prompt: bool,

    /// Run this many steps without a window, logging the energy readout
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,
}

impl Args {
    fn prompt_values<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        self.count = p.ask("Number of balls", self.count, |_| true)?;
        self.window_size = p.ask("Window size (px)", self.window_size, |&v| v > 0)?;
        self.dt = p.ask("Timestep dt (e.g. 0.016)", self.dt, |&v| v > 0.0)?;
        self.restitution = p.ask("Restitution coefficient (0 to 1)", self.restitution, |v| {
            (0.0..=1.0).contains(v)
        })?;
        self.max_speed = p.ask("Maximum initial speed", self.max_speed, |&v| v >= 0.0)?;
        Ok(())
    }

    fn sim_config(&self) -> SimConfig {
        SimConfig {
            box_size: self.box_size,
            timestep: self.dt,
            restitution: self.restitution,
        }
    }

    fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            count: self.count,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            max_speed: self.max_speed,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = Args::parse();
    if args.prompt {
        let stdin = io::stdin();
        args.prompt_values(&mut Prompter::new(stdin.lock(), io::stdout()))
            .context("reading parameters from the terminal")?;
    }

    let sim = args.sim_config();
    sim.validate()?;
    let spawn = args.spawn_config();
    spawn.validate(&sim)?;
    ensure!(
        args.focal_length > 0.0 && args.camera_distance > sim.box_size * 0.5,
        "camera must sit outside the box with a positive focal length"
    );

    info!(count = spawn.count, ?sim, "starting simulation");

    let (mut rng, seed) = rng_from_seed(spawn.seed);
    let placement = generate_bodies(&spawn, &sim, &mut rng);
    if !placement.degraded.is_empty() {
        warn!(
            bodies = ?placement.degraded,
            "starting with overlapping bodies; collisions will separate them"
        );
    }

    let mut world = World::new();
    spawn_bodies(&mut world, &placement.bodies);
    let mut observer = Recolor::new(StdRng::seed_from_u64(seed.wrapping_add(1)));

    if let Some(frames) = args.headless {
        run_headless(&mut world, &sim, &mut observer, frames);
        return Ok(());
    }

    let sdl = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("initializing SDL2")?;
    let mut window = GameWindow::new(&sdl, "bouncebox", args.window_size, args.window_size)?;
    let camera = Camera::from_focal_length(
        args.focal_length,
        args.camera_distance,
        args.window_size as f32,
        sim.box_size,
    );
    let renderer = Renderer::init(sim.half_extents())?;

    let mut app = SimApp::new(world, sim, observer, camera, renderer);
    app.run(&sdl, &mut window)
}
