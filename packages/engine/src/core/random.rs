//! Small deterministic RNG for scene population and initial velocities.

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Zero is a fixed point of xorshift, so it is remapped.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 12345 } else { seed } }
    }

    /// Uniform in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.range(-200.0, 200.0);
            assert!((-200.0..200.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        for _ in 0..16 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_f32(), rng.next_f32());
    }
}
