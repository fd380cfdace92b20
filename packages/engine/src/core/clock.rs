/// Frame clock fed by the host's monotonic elapsed time (ms since start).
///
/// Never reads wall-clock time itself, so system clock adjustments cannot
/// disturb cooldowns or integration.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    elapsed_ms: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new host timestamp and return the frame delta in ms.
    ///
    /// The first frame has a zero delta. A timestamp earlier than the previous
    /// one also yields zero and does not move the clock backwards.
    pub fn advance(&mut self, elapsed_ms: f64) -> f64 {
        let delta = if self.frames == 0 {
            0.0
        } else {
            (elapsed_ms - self.elapsed_ms).max(0.0)
        };
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms);
        self.frames += 1;
        delta
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
