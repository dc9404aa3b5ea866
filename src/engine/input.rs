use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

/// Discrete input that happened during the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Scancode),
}

pub struct InputState {
    pub events: Vec<InputEvent>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            quit: false,
        }
    }

    /// Drain the SDL queue. Called once per frame, between simulation steps.
    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => self.events.push(InputEvent::KeyPressed(sc)),
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn was_pressed(&self, sc: Scancode) -> bool {
        self.events.contains(&InputEvent::KeyPressed(sc))
    }
}
