/// Fixed timestep accumulator.
/// Keeps orbital motion advancing at a consistent rate regardless of the
/// display refresh rate (60 Hz desktop, 72-90 Hz in a headset).
pub struct FixedTimestep {
    /// The fixed delta time per tick, seconds.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Maximum ticks drained per frame, to avoid a death spiral after a
    /// long pause (tab backgrounded, headset taken off).
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 8,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// steps to run this frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time, seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_after_long_stall() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        // Several seconds worth, capped at max_steps
        assert_eq!(ts.accumulate(5.0), 8);
    }

    #[test]
    fn custom_step_cap() {
        let mut ts = FixedTimestep::new(1.0 / 60.0).with_max_steps(3);
        assert_eq!(ts.accumulate(1.0), 3);
    }
}
