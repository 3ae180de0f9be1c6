use std::time::{Duration, Instant};

/// Longest wall-clock step handed to the scene, in seconds
pub const MAX_DELTA: f32 = 0.25;
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Produces one `FrameInfo` per rendered frame.
///
/// With a fixed step every frame advances by exactly that amount, otherwise
/// by the measured wall-clock time capped at `MAX_DELTA`.
#[derive(Debug)]
pub struct FrameTimer {
    fixed_step: Option<f32>,
    number: u64,
    time: f32,
    last_tick: Instant,
}

impl FrameTimer {
    pub fn new(fixed_step: Option<f32>) -> Self {
        Self {
            fixed_step: fixed_step.filter(|step| *step > 0.0),
            number: 0,
            time: 0.0,
            last_tick: Instant::now(),
        }
    }

    pub fn fixed_step(&self) -> Option<f32> {
        self.fixed_step
    }

    pub fn frame_number(&self) -> u64 {
        self.number
    }

    /// Advance using the current time
    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Advance as if called at `now`
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed)
    }

    fn advance(&mut self, elapsed: Duration) -> FrameInfo {
        let delta = match self.fixed_step {
            Some(step) => step,
            None => elapsed.as_secs_f32().min(MAX_DELTA),
        };
        self.time += delta;
        let info = FrameInfo::new(self.number, self.time, delta);
        self.number += 1;
        info
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Frames-per-second averaged over `FPS_UPDATE_INTERVAL`
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame; returns the new average when the window closes
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
