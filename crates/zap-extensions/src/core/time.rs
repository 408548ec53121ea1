/// Per-frame clock with a time scale.
/// Gameplay reads the scaled `delta`; UI effects read `unscaled_delta` so they
/// keep running while the game is paused (`time_scale == 0`).
#[derive(Debug, Clone)]
pub struct FrameClock {
    time_scale: f32,
    /// Upper bound applied to each raw frame delta.
    max_delta: Option<f32>,
    delta: f32,
    unscaled_delta: f32,
    elapsed: f64,
    unscaled_elapsed: f64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            max_delta: None,
            delta: 0.0,
            unscaled_delta: 0.0,
            elapsed: 0.0,
            unscaled_elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Cap each frame's delta, e.g. after a long stall.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta.max(0.0));
        self
    }

    /// Record one frame of `frame_dt` seconds. Negative deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) {
        let mut dt = frame_dt.max(0.0);
        if let Some(max) = self.max_delta {
            dt = dt.min(max);
        }
        self.unscaled_delta = dt;
        self.delta = dt * self.time_scale;
        self.unscaled_elapsed += dt as f64;
        self.elapsed += self.delta as f64;
        self.frame_count += 1;
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Negative scales are clamped to zero. Takes effect on the next advance.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Scaled delta of the last frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn unscaled_delta(&self) -> f32 {
        self.unscaled_delta
    }

    /// Total scaled time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn unscaled_elapsed(&self) -> f64 {
        self.unscaled_elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_and_unscaled_delta() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(0.5);
        clock.advance(0.1);
        assert!((clock.delta() - 0.05).abs() < 1e-6);
        assert!((clock.unscaled_delta() - 0.1).abs() < 1e-6);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn paused_clock_still_has_unscaled_time() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(0.0);
        clock.advance(1.0 / 60.0);
        clock.advance(1.0 / 60.0);
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
        assert!((clock.unscaled_elapsed() - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn caps_and_clamps() {
        let mut clock = FrameClock::new().with_max_delta(0.25);
        clock.advance(1.0);
        assert_eq!(clock.unscaled_delta(), 0.25);
        clock.advance(-3.0);
        assert_eq!(clock.unscaled_delta(), 0.0);

        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
    }
}
