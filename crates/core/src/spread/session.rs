//! Stateful fire-spread simulation session.
//!
//! Owns the complete mutable state of one simulation: particle population,
//! spawn frontier, generator state, and accumulated time. State is an
//! explicit caller-owned value rather than captured closures, so a host
//! can run one session per incident view without any sharing. Nothing
//! here reads the wall clock; time advances only through the deltas the
//! caller supplies, which is what makes runs replayable.

use tracing::{debug, info};

use crate::core_types::{distance, LayoutTemplate, RiskZone, Severity, Vec2};

use super::rng::Lcg;
use super::{FireParticle, SpreadParameters};

/// Nominal frame rate the spawn rate is expressed against.
const NOMINAL_FPS: f32 = 60.0;

/// A live, steppable fire-spread simulation.
pub struct FireSpreadSession {
    params: SpreadParameters,
    origin: Vec2,
    layout: LayoutTemplate,
    risk_zones: Vec<RiskZone>,
    particles: Vec<FireParticle>,
    /// Points new particles may spawn from; append-only between resets.
    frontier: Vec<Vec2>,
    rng: Lcg,
    elapsed: f32,
    running: bool,
}

impl FireSpreadSession {
    /// Start a new session from a resolved fire point.
    ///
    /// The frontier starts as exactly the origin point and the particle
    /// population starts empty. The session keeps its own copies of the
    /// layout and risk zones; they are read-only inputs shared with the
    /// assessment components.
    pub fn start(
        params: SpreadParameters,
        origin: Vec2,
        layout: LayoutTemplate,
        risk_zones: Vec<RiskZone>,
    ) -> Self {
        info!(
            seed = params.seed,
            origin_x = origin.x,
            origin_y = origin.y,
            "starting fire spread session"
        );
        let rng = Lcg::new(params.seed);
        FireSpreadSession {
            params,
            origin,
            layout,
            risk_zones,
            particles: Vec::new(),
            frontier: vec![origin],
            rng,
            elapsed: 0.0,
            running: true,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// `delta_seconds` is the elapsed time for this tick, already scaled
    /// by any caller-side speed multiplier. A paused session ignores the
    /// call entirely; pausing never mutates state.
    pub fn step(&mut self, delta_seconds: f32) {
        if !self.running || delta_seconds <= 0.0 {
            return;
        }
        self.elapsed += delta_seconds;

        self.age_particles(delta_seconds);
        self.spawn_particles(delta_seconds);

        debug!(
            elapsed = self.elapsed,
            particles = self.particles.len(),
            frontier = self.frontier.len(),
            "stepped fire spread session"
        );
    }

    /// Stop stepping without mutating simulation state.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume a paused session.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Whether [`FireSpreadSession::step`] currently advances the state.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reinitialize particles, frontier, generator state, and the clock to
    /// the session's initial values. The only operation permitted to
    /// shrink the frontier or particle set.
    pub fn reset(&mut self) {
        info!(seed = self.params.seed, "resetting fire spread session");
        self.particles.clear();
        self.frontier.clear();
        self.frontier.push(self.origin);
        self.rng = Lcg::new(self.params.seed);
        self.elapsed = 0.0;
    }

    /// Read-only snapshot of the current particle population.
    pub fn particles(&self) -> &[FireParticle] {
        &self.particles
    }

    /// Read-only view of the spawn frontier.
    pub fn frontier(&self) -> &[Vec2] {
        &self.frontier
    }

    /// Accumulated simulation time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Parameters this session was started with.
    pub fn params(&self) -> &SpreadParameters {
        &self.params
    }

    /// Age every particle, growing its radius toward its maximum and
    /// fading its opacity; particles past the decay window are dropped.
    fn age_particles(&mut self, delta_seconds: f32) {
        let decay = self.params.decay_seconds;
        self.particles.retain_mut(|particle| {
            particle.age += delta_seconds;
            let progress = (particle.age / decay).min(1.0);
            if progress < 1.0 {
                particle.radius = particle.max_radius * (0.2 + 0.8 * progress);
                particle.alpha = 1.0 - progress;
                true
            } else {
                false
            }
        });
    }

    /// Attempt to spawn this tick's budget of particles from the frontier.
    fn spawn_particles(&mut self, delta_seconds: f32) {
        if self.particles.len() >= self.params.max_particles {
            return;
        }
        let budget = (self.params.spawn_rate * delta_seconds * NOMINAL_FPS).floor() as usize;

        for _ in 0..budget {
            if self.particles.len() >= self.params.max_particles {
                break;
            }

            // Uniform frontier pick; the frontier is never empty.
            let pick = (self.rng.sample() * self.frontier.len() as f32).floor() as usize;
            let Some(&frontier_point) = self.frontier.get(pick) else {
                continue;
            };

            let jitter = Vec2::new(
                self.rng.sample_gaussian() * self.params.jitter_scale,
                self.rng.sample_gaussian() * self.params.jitter_scale,
            );
            let candidate = frontier_point + jitter;

            if !self.layout.coordinate_system.contains(candidate) {
                continue;
            }
            if !self.layout.point_in_any_room(candidate) {
                continue;
            }
            if self.rng.sample() > self.spread_probability_at(candidate) {
                continue;
            }

            let radius_span = self.params.max_particle_radius - self.params.min_particle_radius;
            let max_radius = self.params.min_particle_radius + self.rng.sample() * radius_span;
            self.particles.push(FireParticle {
                position: candidate,
                radius: max_radius * 0.2,
                alpha: 1.0,
                age: 0.0,
                max_radius,
            });

            // Frontier growth is probabilistic and monotonic.
            if self.rng.sample() < self.params.frontier_chance {
                self.frontier.push(candidate);
            }
        }
    }

    /// Location-weighted spread probability, clamped to 1.
    ///
    /// Hallways channel fire, exits damp it, high-severity zones feed it.
    fn spread_probability_at(&self, point: Vec2) -> f32 {
        let mut probability = self.params.spread_probability;

        if self.layout.point_in_hallway(point) {
            probability *= self.params.hallway_multiplier;
        }

        let near_exit = self
            .layout
            .exits
            .iter()
            .any(|exit| distance(exit.position, point) < self.params.exit_damping_radius);
        if near_exit {
            probability *= self.params.exit_multiplier;
        }

        let in_high_zone = self
            .risk_zones
            .iter()
            .any(|zone| zone.severity == Severity::High && zone.contains(point));
        if in_high_zone {
            probability *= self.params.high_risk_multiplier;
        }

        probability.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{
        CoordinateSystem, EnvironmentType, Exit, ExitKind, LayoutTemplate, Rect, Room, RoomKind,
    };

    fn open_layout() -> LayoutTemplate {
        LayoutTemplate {
            id: "open".to_string(),
            environment: EnvironmentType::Warehouse,
            name: "Open".to_string(),
            floors: 1,
            rooms: vec![Room::new(
                "floor",
                "Floor",
                RoomKind::Storage,
                Rect::new(0.0, 0.0, 100.0, 100.0),
            )],
            exits: vec![Exit::new(
                "door",
                "Door",
                Vec2::new(98.0, 50.0),
                ExitKind::Door,
            )],
            coordinate_system: CoordinateSystem::normalized(),
        }
    }

    fn session_with(params: SpreadParameters) -> FireSpreadSession {
        FireSpreadSession::start(params, Vec2::new(50.0, 50.0), open_layout(), vec![])
    }

    #[test]
    fn test_initial_state() {
        let session = session_with(SpreadParameters::default());
        assert!(session.particles().is_empty());
        assert_eq!(session.frontier(), &[Vec2::new(50.0, 50.0)]);
        assert_eq!(session.elapsed(), 0.0);
        assert!(session.is_running());
    }

    #[test]
    fn test_step_spawns_particles_in_rooms_only() {
        let mut session = session_with(SpreadParameters::default());
        for _ in 0..30 {
            session.step(1.0 / 60.0);
        }
        assert!(!session.particles().is_empty(), "no particles after 30 ticks");
        for particle in session.particles() {
            assert!(
                session.layout.point_in_any_room(particle.position),
                "particle escaped the rooms: {:?}",
                particle.position
            );
        }
    }

    #[test]
    fn test_particles_decay_and_drop() {
        let mut session = session_with(SpreadParameters::default());
        for _ in 0..10 {
            session.step(1.0 / 60.0);
        }
        assert!(!session.particles().is_empty());

        // Pause spawning by exhausting the decay window in one paused-spawn
        // configuration: step with a delta past the decay window and a zero
        // spawn rate so aged particles are dropped without replacements.
        session.params.spawn_rate = 0.0;
        session.step(session.params.decay_seconds + 0.1);
        assert!(session.particles().is_empty(), "aged particles must drop");
    }

    #[test]
    fn test_alpha_and_radius_follow_progress() {
        let mut session = session_with(SpreadParameters::default());
        for _ in 0..5 {
            session.step(1.0 / 60.0);
        }
        for particle in session.particles() {
            let progress = (particle.age / session.params.decay_seconds).min(1.0);
            let expected_radius = particle.max_radius * (0.2 + 0.8 * progress);
            let expected_alpha = 1.0 - progress;
            assert!((particle.radius - expected_radius).abs() < 1e-5);
            assert!((particle.alpha - expected_alpha).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cap_respected() {
        let params = SpreadParameters {
            max_particles: 20,
            spawn_rate: 50.0,
            spread_probability: 1.0,
            decay_seconds: 100.0,
            ..SpreadParameters::default()
        };
        let mut session = session_with(params);
        for _ in 0..120 {
            session.step(1.0 / 60.0);
            assert!(
                session.particles().len() <= 20,
                "cap exceeded: {}",
                session.particles().len()
            );
        }
        assert_eq!(session.particles().len(), 20);
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut session = session_with(SpreadParameters::default());
        for _ in 0..10 {
            session.step(1.0 / 60.0);
        }
        session.pause();
        let before = session.particles().to_vec();
        let elapsed = session.elapsed();
        session.step(1.0);
        assert_eq!(session.particles(), &before[..]);
        assert_eq!(session.elapsed(), elapsed);

        session.resume();
        session.step(1.0 / 60.0);
        assert!(session.elapsed() > elapsed);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = session_with(SpreadParameters::default());
        for _ in 0..30 {
            session.step(1.0 / 60.0);
        }
        session.reset();
        assert!(session.particles().is_empty());
        assert_eq!(session.frontier(), &[Vec2::new(50.0, 50.0)]);
        assert_eq!(session.elapsed(), 0.0);

        // A reset run replays identically to a fresh session.
        let mut fresh = session_with(SpreadParameters::default());
        for _ in 0..15 {
            session.step(1.0 / 60.0);
            fresh.step(1.0 / 60.0);
        }
        assert_eq!(session.particles(), fresh.particles());
    }

    #[test]
    fn test_frontier_monotone_within_session() {
        let mut session = session_with(SpreadParameters::default());
        let mut last_len = session.frontier().len();
        for _ in 0..60 {
            session.step(1.0 / 60.0);
            let len = session.frontier().len();
            assert!(len >= last_len, "frontier shrank between steps");
            last_len = len;
        }
    }

    #[test]
    fn test_no_valid_rooms_means_no_particles() {
        let mut layout = open_layout();
        layout.rooms.clear();
        let mut session = FireSpreadSession::start(
            SpreadParameters::default(),
            Vec2::new(50.0, 50.0),
            layout,
            vec![],
        );
        for _ in 0..30 {
            session.step(1.0 / 60.0);
        }
        assert!(session.particles().is_empty());
    }

    #[test]
    fn test_exit_damping_lowers_probability() {
        let session = session_with(SpreadParameters::default());
        let far = session.spread_probability_at(Vec2::new(20.0, 20.0));
        let near_exit = session.spread_probability_at(Vec2::new(95.0, 50.0));
        assert!(near_exit < far, "exit proximity must damp spread");
    }

    #[test]
    fn test_high_risk_zone_boosts_probability() {
        let zone = RiskZone {
            id: "risk-floor".to_string(),
            bounds: Rect::new(0.0, 0.0, 40.0, 40.0),
            severity: Severity::High,
            confidence: 95.0,
        };
        let session = FireSpreadSession::start(
            SpreadParameters::default(),
            Vec2::new(50.0, 50.0),
            open_layout(),
            vec![zone],
        );
        let inside = session.spread_probability_at(Vec2::new(20.0, 20.0));
        let outside = session.spread_probability_at(Vec2::new(60.0, 60.0));
        assert!(inside > outside, "high-risk zone must feed spread");
    }
}
