//! Probabilistic fire-spread simulation.
//!
//! A session-scoped, time-stepped particle system seeded from the resolved
//! fire point. Particles spawn near an expanding frontier, grow and fade
//! over a fixed decay window, and respect a hard population cap. For a
//! fixed seed, parameter set, origin, and delta sequence the produced
//! particle populations are bit-for-bit reproducible.

pub mod rng;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::core_types::Vec2;

pub use rng::Lcg;
pub use session::FireSpreadSession;

/// A transient visual unit of spreading fire.
///
/// Age is accumulated from step deltas, never from the wall clock; a
/// particle's radius grows toward `max_radius` while its opacity fades
/// linearly until it is dropped at the end of the decay window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireParticle {
    pub position: Vec2,
    pub radius: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Seconds since the particle spawned.
    pub age: f32,
    pub max_radius: f32,
}

/// Tunable simulation parameters.
///
/// The multipliers are empirically chosen for visual plausibility, not
/// calibrated against fire-dynamics data; they are named fields precisely
/// so callers can override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadParameters {
    /// Base per-candidate spawn probability before location weighting.
    pub spread_probability: f32,
    /// Particle lifetime in seconds.
    pub decay_seconds: f32,
    /// Particles spawned per frame at a nominal 60 fps.
    pub spawn_rate: f32,
    /// Hard cap on the live particle population.
    pub max_particles: usize,
    /// Seed for the session's generator.
    pub seed: u32,
    /// Spread probability multiplier inside hallway-typed rooms.
    pub hallway_multiplier: f32,
    /// Spread probability multiplier within `exit_damping_radius` of an exit.
    pub exit_multiplier: f32,
    /// Radius around exits where `exit_multiplier` applies, in layout units.
    pub exit_damping_radius: f32,
    /// Spread probability multiplier inside high-severity risk zones.
    pub high_risk_multiplier: f32,
    /// Gaussian jitter scale applied per axis when spawning, in layout units.
    pub jitter_scale: f32,
    /// Chance that a fresh particle's position joins the frontier.
    pub frontier_chance: f32,
    /// Smallest particle max radius, in layout units.
    pub min_particle_radius: f32,
    /// Largest particle max radius (exclusive), in layout units.
    pub max_particle_radius: f32,
}

impl Default for SpreadParameters {
    fn default() -> Self {
        SpreadParameters {
            spread_probability: 0.3,
            decay_seconds: 2.0,
            spawn_rate: 5.0,
            max_particles: 500,
            seed: 42,
            hallway_multiplier: 1.5,
            exit_multiplier: 0.3,
            exit_damping_radius: 10.0,
            high_risk_multiplier: 1.3,
            jitter_scale: 3.0,
            frontier_chance: 0.1,
            min_particle_radius: 1.5,
            max_particle_radius: 3.5,
        }
    }
}

impl SpreadParameters {
    /// Scale spawn aggressiveness by a single intensity knob, keeping the
    /// other constants untouched.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.spread_probability *= intensity;
        self.spawn_rate *= intensity;
        self
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
