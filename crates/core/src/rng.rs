//! RNG module - uniform shape dealing
//!
//! Shapes are drawn independently and uniformly from the library, with
//! replacement: every draw is `rng % library_len`. There is no bag and no
//! repeat avoidance.
//!
//! Uses a simple LCG so a seed fully determines a game, which keeps tests and
//! replays deterministic.

use std::num::NonZeroU16;

use crate::shapes::{Shape, SHAPE_LIBRARY};
use crate::types::MARKER_MAX;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG cycle with tiny periods; use the high half.
        self.state >> 16
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws shapes and placement markers from one seeded source.
#[derive(Debug, Clone)]
pub struct ShapeDealer {
    rng: SimpleRng,
    seed: u32,
}

impl ShapeDealer {
    /// Create a new dealer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw a copy of a uniformly chosen library shape
    pub fn draw(&mut self) -> Shape {
        let index = self.rng.next_range(SHAPE_LIBRARY.len() as u32) as usize;
        SHAPE_LIBRARY[index]
    }

    /// Draw a cosmetic occupancy marker in `1..=MARKER_MAX`
    pub fn next_marker(&mut self) -> NonZeroU16 {
        let value = 1 + self.rng.next_range(MARKER_MAX as u32) as u16;
        NonZeroU16::new(value).unwrap_or(NonZeroU16::MIN)
    }

    /// The seed this dealer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapeDealer {
    fn default() -> Self {
        Self::new(1)
    }
}
