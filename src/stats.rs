use std::time::Duration;

/// Rolling frame counter that reports an average rate once per window.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window: Duration,
    elapsed: Duration,
    frames: u32,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// Account for one frame that took `dt`; returns frames per second when
    /// the window has filled, then starts a new window.
    pub fn record(&mut self, dt: Duration) -> Option<f64> {
        self.elapsed += dt;
        self.frames += 1;
        if self.elapsed < self.window || self.elapsed.is_zero() {
            return None;
        }
        let fps = self.frames as f64 / self.elapsed.as_secs_f64();
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(fps)
    }

    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}
