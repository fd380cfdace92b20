use tracing::trace;

use crate::systems::physics_world::PhysicsWorld;

/// Physics steps per simulated second
pub const STEPS_PER_SECOND: f32 = 60.0;

/// Fixed step length in ms
pub const STEP_MS: f64 = 1000.0 / 60.0;

/// Upper bound on catch-up steps in one frame
pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed-timestep driver: accumulates frame time and steps the world in
/// whole `STEP_MS` increments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    accumulator_ms: f64,
    steps: u64,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `dt_ms` of frame time; returns the number of steps taken.
    ///
    /// Time beyond `MAX_STEPS_PER_FRAME` steps is discarded.
    pub fn advance<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, dt_ms: f64) -> u32 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.accumulator_ms += dt_ms;
        }

        let mut taken = 0;
        while self.accumulator_ms >= STEP_MS && taken < MAX_STEPS_PER_FRAME {
            world.step();
            self.accumulator_ms -= STEP_MS;
            taken += 1;
        }

        if self.accumulator_ms >= STEP_MS {
            trace!(dropped_ms = self.accumulator_ms, "physics runner fell behind");
            self.accumulator_ms = 0.0;
        }

        self.steps += taken as u64;
        taken
    }

    /// Total steps taken since creation
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
