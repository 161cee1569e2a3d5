use bevy_ecs::prelude::*;
use web_time::Instant;

#[derive(Resource)]
pub struct FrameTime {
    pub delta: f32,
    last: Instant,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            delta: 0.0,
            last: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = (now - self.last).as_secs_f32();
        self.last = now;
    }

    // XR mode: the frame loop supplies the delta itself.
    pub fn set(&mut self, duration: std::time::Duration) {
        self.delta = duration.as_secs_f32();
        self.last = Instant::now();
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}
