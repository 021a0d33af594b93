//! RNG module - uniform shape selection
//!
//! Each spawn draws a shape uniformly from the catalog. There is no bag or
//! history; repeats are allowed. A small LCG keeps runs reproducible from a
//! seed, which the tests rely on.

use crate::pieces::{Shape, SHAPES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a catalog shape uniformly at random
    pub fn pick_shape(&mut self) -> &'static Shape {
        &SHAPES[self.next_range(SHAPES.len() as u32) as usize]
    }
}
