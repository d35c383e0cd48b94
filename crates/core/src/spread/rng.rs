//! Seeded pseudo-random generator for the spread simulation.
//!
//! A small linear-congruential generator with value semantics: stepping
//! returns the drawn value together with the successor state, so the
//! determinism contract of the simulation is explicit and testable. The
//! output sequence depends only on the seed and the generator's own prior
//! state, never on wall-clock time.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// LCG parameters (Lehmer-style, small modulus; period 233280).
const MULTIPLIER: u32 = 9301;
const INCREMENT: u32 = 49_297;
const MODULUS: u32 = 233_280;

/// Explicit-state linear-congruential generator.
///
/// `Copy` on purpose: a state value can be freely duplicated to replay a
/// draw sequence, which is how the determinism tests work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Lcg {
            state: seed % MODULUS,
        }
    }

    /// Draw a uniform value in `[0, 1)`, returning the successor state.
    pub fn next(self) -> (f32, Lcg) {
        let state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        (state as f32 / MODULUS as f32, Lcg { state })
    }

    /// Draw a standard-normal value via the Box-Muller transform over two
    /// uniform draws, returning the successor state.
    pub fn next_gaussian(self) -> (f32, Lcg) {
        let (u1, rng) = self.next();
        let (u2, rng) = rng.next();
        // Guard the log against a zero draw (state 0 occurs once per period).
        let u1 = u1.max(f32::MIN_POSITIVE);
        let value = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        (value, rng)
    }

    /// Mutating convenience wrapper around [`Lcg::next`].
    pub fn sample(&mut self) -> f32 {
        let (value, next) = self.next();
        *self = next;
        value
    }

    /// Mutating convenience wrapper around [`Lcg::next_gaussian`].
    pub fn sample_gaussian(&mut self) -> f32 {
        let (value, next) = self.next_gaussian();
        *self = next;
        value
    }
}
