//! RNG module - seedable shape selection
//!
//! A small LCG keeps the core free of platform entropy so that a seed fully
//! determines the piece sequence (useful for tests and replays).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is reserved; map it to 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform index in `[0, len)`.
    ///
    /// Multiply-shift uses the high bits; the low bits of an LCG cycle quickly.
    pub fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_u32() as u64 * len as u64) >> 32) as usize
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 1);
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.pick(7) < 7);
        }
    }

    #[test]
    fn test_pick_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            counts[rng.pick(7)] += 1;
        }
        for c in counts {
            assert!((800..1200).contains(&c), "skewed bucket: {}", c);
        }
    }
}
