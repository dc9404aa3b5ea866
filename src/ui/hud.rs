const FPS_SAMPLES: usize = 60;

/// Live readout shown in the window title: total kinetic energy plus a
/// rolling frame-rate average.
pub struct Hud {
    fps_ring: [f32; FPS_SAMPLES],
    fps_index: usize,
    fps_count: usize,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            fps_ring: [0.0; FPS_SAMPLES],
            fps_index: 0,
            fps_count: 0,
        }
    }

    /// Push a frame delta into the rolling FPS buffer. Call every frame.
    pub fn update(&mut self, dt: f32) {
        self.fps_ring[self.fps_index] = dt;
        self.fps_index = (self.fps_index + 1) % FPS_SAMPLES;
        if self.fps_count < FPS_SAMPLES {
            self.fps_count += 1;
        }
    }

    pub fn fps(&self) -> f32 {
        let sum: f32 = self.fps_ring[..self.fps_count].iter().sum();
        if sum <= 0.0 {
            0.0
        } else {
            self.fps_count as f32 / sum
        }
    }

    pub fn title(&self, kinetic_energy: f32, paused: bool) -> String {
        let mut title = format!(
            "Total kinetic energy = {:.2} | {:.0} FPS",
            kinetic_energy,
            self.fps()
        );
        if paused {
            title.push_str(" | paused");
        }
        title
    }
}
