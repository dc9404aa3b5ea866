use std::time::Duration;

use anyhow::{Context, Result};
use bouncebox::config::SimConfig;
use bouncebox::systems::{kinetic_energy_system, physics_step, ContactObserver};
use hecs::World;
use sdl2::keyboard::Scancode;
use sdl2::Sdl;
use tracing::{debug, info, trace};

use crate::camera::Camera;
use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::Renderer;
use crate::ui::Hud;

/// Roughly 60 frames per second, one physics step per frame.
const FRAME_BUDGET: Duration = Duration::from_millis(16);
const ENERGY_LOG_INTERVAL: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Running,
    Paused,
}

pub struct SimApp<O> {
    world: World,
    config: SimConfig,
    observer: O,
    camera: Camera,
    renderer: Renderer,
    hud: Hud,
    state: SimState,
    frame: u64,
}

impl<O: ContactObserver> SimApp<O> {
    pub fn new(
        world: World,
        config: SimConfig,
        observer: O,
        camera: Camera,
        renderer: Renderer,
    ) -> Self {
        Self {
            world,
            config,
            observer,
            camera,
            renderer,
            hud: Hud::new(),
            state: SimState::Running,
            frame: 0,
        }
    }

    /// Frame loop: input, one physics step, readout, render.
    /// Quit requests are only honored between frames.
    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) -> Result<()> {
        let mut event_pump = sdl
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("acquiring event pump")?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new(FRAME_BUDGET);

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                info!(frames = self.frame, "quit requested");
                break;
            }

            if input.was_pressed(Scancode::Space) {
                self.state = match self.state {
                    SimState::Running => SimState::Paused,
                    SimState::Paused => SimState::Running,
                };
                debug!(state = ?self.state, "toggled pause");
            }

            if self.state == SimState::Running {
                let events = physics_step(&mut self.world, &self.config, &mut self.observer);
                self.frame += 1;
                trace!(frame = self.frame, contacts = events.len(), "physics step");
            }

            self.hud.update(timer.dt);
            let energy = kinetic_energy_system(&self.world);
            window.set_title(&self.hud.title(energy, self.state == SimState::Paused))?;

            let view = self.camera.view_matrix();
            let proj = self.camera.projection_matrix(window.aspect_ratio());
            self.renderer.draw_scene(&self.world, &view, &proj);

            window.swap();
            timer.throttle();
        }

        Ok(())
    }
}

/// Step the simulation `frames` times without a window, logging the energy
/// readout periodically. Returns the final total kinetic energy.
pub fn run_headless<O: ContactObserver + ?Sized>(
    world: &mut World,
    config: &SimConfig,
    observer: &mut O,
    frames: u64,
) -> f32 {
    let mut energy = kinetic_energy_system(world);
    info!(energy, "initial total kinetic energy");

    for frame in 1..=frames {
        let events = physics_step(world, config, observer);
        trace!(frame, contacts = events.len(), "physics step");

        if frame % ENERGY_LOG_INTERVAL == 0 || frame == frames {
            energy = kinetic_energy_system(world);
            info!(frame, energy, "total kinetic energy");
        }
    }

    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bouncebox::config::SpawnConfig;
    use bouncebox::scene::{generate_bodies, spawn_bodies};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn headless_run_conserves_energy_when_elastic() {
        let config = SimConfig::default();
        let spawn = SpawnConfig {
            count: 8,
            ..Default::default()
        };
        let placement = generate_bodies(&spawn, &config, &mut StdRng::seed_from_u64(21));
        let mut world = World::new();
        spawn_bodies(&mut world, &placement.bodies);

        let before = kinetic_energy_system(&world);
        let after = run_headless(&mut world, &config, &mut (), 300);
        assert_relative_eq!(after, before, max_relative = 1e-3);
    }

    #[test]
    fn headless_run_loses_energy_when_inelastic() {
        let config = SimConfig {
            restitution: 0.5,
            ..Default::default()
        };
        let spawn = SpawnConfig {
            count: 8,
            max_speed: 200.0,
            ..Default::default()
        };
        let placement = generate_bodies(&spawn, &config, &mut StdRng::seed_from_u64(4));
        let mut world = World::new();
        spawn_bodies(&mut world, &placement.bodies);

        let before = kinetic_energy_system(&world);
        let after = run_headless(&mut world, &config, &mut (), 600);
        assert!(after < before);
    }
}
