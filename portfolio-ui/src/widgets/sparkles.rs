//! Sparkle Field
//!
//! Short-lived decorative particles. One particle is spawned per tick and a
//! batch is front-loaded at mount with staggered creation times. Every
//! particle lives for a fixed lifetime regardless of its animation timing.
//!
//! Expiry is a sweep over a creation-ordered queue, run on the same tick
//! that spawns, so the number of timers never depends on the particle count.

use std::collections::VecDeque;

/// Spawn cadence
pub const SPAWN_INTERVAL_MS: u32 = 100;

/// How long a particle stays in the field
pub const LIFETIME_MS: i64 = 3_000;

/// Spacing between front-loaded particles
pub const PRIME_STAGGER_MS: i64 = 50;

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// A single particle with randomized placement and timing
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    /// Horizontal position, percent of the container width
    pub x: f64,
    /// Vertical position, percent of the container height
    pub y: f64,
    /// Animation delay in seconds, `[0, 2)`
    pub delay_s: f64,
    /// Animation duration in seconds, `[1, 3)`
    pub duration_s: f64,
    pub born_at: i64,
}

impl Sparkle {
    /// Draw position and timing from `rng`, which yields values in `[0, 1)`
    fn random(id: u64, born_at: i64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            id,
            x: rng() * 100.0,
            y: rng() * 100.0,
            delay_s: rng() * 2.0,
            duration_s: rng() * 2.0 + 1.0,
            born_at,
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.x, self.y, self.delay_s, self.duration_s
        )
    }
}

/// Managed collection of live particles
#[derive(Debug, Clone)]
pub struct SparkleField {
    /// Ordered by `born_at`
    particles: VecDeque<Sparkle>,
    next_id: u64,
    lifetime_ms: i64,
    clock: i64,
    stopped: bool,
}

impl Default for SparkleField {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkleField {
    pub fn new() -> Self {
        Self::with_lifetime(LIFETIME_MS)
    }

    /// Field with a custom particle lifetime (at least 1 ms)
    pub fn with_lifetime(lifetime_ms: i64) -> Self {
        Self {
            particles: VecDeque::new(),
            next_id: 0,
            lifetime_ms: lifetime_ms.max(1),
            clock: 0,
            stopped: false,
        }
    }

    #[cfg(test)]
    pub fn lifetime_ms(&self) -> i64 {
        self.lifetime_ms
    }

    /// Number of particles retained, including front-loaded ones not yet shown
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Front-load `count` particles created `PRIME_STAGGER_MS` apart from `now`
    pub fn prime(&mut self, now: i64, count: usize, rng: &mut impl FnMut() -> f64) {
        self.clock = now;
        let mut born_at = now;
        for _ in 0..count {
            self.insert(born_at, rng);
            born_at += PRIME_STAGGER_MS;
        }
    }

    /// Retire expired particles, then spawn one unless stopped
    pub fn tick(&mut self, now: i64, rng: &mut impl FnMut() -> f64) {
        self.clock = now;
        self.sweep(now);
        if !self.stopped {
            self.insert(now, rng);
        }
    }

    /// Remove every particle created at or before `now - lifetime`.
    /// Returns how many were removed.
    pub fn sweep(&mut self, now: i64) -> usize {
        let before = self.particles.len();
        while let Some(front) = self.particles.front() {
            if front.born_at + self.lifetime_ms > now {
                break;
            }
            self.particles.pop_front();
        }
        before - self.particles.len()
    }

    /// Stop spawning. Live particles still expire on later sweeps; there is
    /// no way to restart.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Particles inside their lifetime window at `now`
    pub fn live(&self, now: i64) -> impl Iterator<Item = &Sparkle> {
        let lifetime_ms = self.lifetime_ms;
        self.particles
            .iter()
            .filter(move |s| s.born_at <= now && now < s.born_at + lifetime_ms)
    }

    /// Particles live at the field's own clock
    pub fn visible(&self) -> impl Iterator<Item = &Sparkle> {
        self.live(self.clock)
    }

    fn insert(&mut self, born_at: i64, rng: &mut impl FnMut() -> f64) {
        let sparkle = Sparkle::random(self.next_id, born_at, rng);
        self.next_id += 1;

        let at = self.particles.partition_point(|s| s.born_at <= born_at);
        self.particles.insert(at, sparkle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for Math.random
    fn cycling_rng() -> impl FnMut() -> f64 {
        let values = [0.0, 0.25, 0.5, 0.75, 0.999];
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.prime(0, 100, &mut rng);

        for s in field.live(10_000).chain(field.particles.iter()) {
            assert!((0.0..100.0).contains(&s.x));
            assert!((0.0..100.0).contains(&s.y));
            assert!((0.0..2.0).contains(&s.delay_s));
            assert!((1.0..3.0).contains(&s.duration_s));
        }
    }

    #[test]
    fn test_prime_staggers_creation() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.prime(1_000, 4, &mut rng);

        let born: Vec<i64> = field.particles.iter().map(|s| s.born_at).collect();
        assert_eq!(born, vec![1_000, 1_050, 1_100, 1_150]);

        // Only the first is visible at mount
        assert_eq!(field.visible().count(), 1);
        assert_eq!(field.live(1_120).count(), 3);
    }

    #[test]
    fn test_particles_expire_after_lifetime() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.tick(0, &mut rng);

        assert_eq!(field.live(2_999).count(), 1);
        assert_eq!(field.live(3_000).count(), 0);

        assert_eq!(field.sweep(2_999), 0);
        assert_eq!(field.sweep(3_000), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_steady_state_is_bounded_by_lifetime() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.prime(0, DEFAULT_PARTICLE_COUNT, &mut rng);

        let mut now = 0;
        while now <= 20_000 {
            field.tick(now, &mut rng);
            for s in field.particles.iter().filter(|s| s.born_at <= now) {
                assert!(now - s.born_at < field.lifetime_ms());
            }
            now += i64::from(SPAWN_INTERVAL_MS);
        }

        // One spawn per tick over a 3s window
        assert_eq!(field.len(), 30);
        assert_eq!(field.visible().count(), 30);
    }

    #[test]
    fn test_queue_stays_ordered_when_spawns_interleave() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.prime(0, 10, &mut rng);
        field.tick(120, &mut rng);
        field.tick(220, &mut rng);

        let born: Vec<i64> = field.particles.iter().map(|s| s.born_at).collect();
        let mut sorted = born.clone();
        sorted.sort();
        assert_eq!(born, sorted);
    }

    #[test]
    fn test_stop_halts_spawning_but_not_expiry() {
        let mut rng = cycling_rng();
        let mut field = SparkleField::new();
        field.tick(0, &mut rng);
        field.tick(100, &mut rng);
        field.stop();

        field.tick(200, &mut rng);
        assert_eq!(field.len(), 2);
        assert!(field.is_stopped());

        field.tick(3_100, &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_lifetime_is_positive() {
        assert_eq!(SparkleField::with_lifetime(0).lifetime_ms(), 1);
        assert_eq!(SparkleField::with_lifetime(-5).lifetime_ms(), 1);
    }

    #[test]
    fn test_style() {
        let sparkle = Sparkle {
            id: 0,
            x: 12.5,
            y: 50.0,
            delay_s: 0.5,
            duration_s: 1.25,
            born_at: 0,
        };
        assert_eq!(
            sparkle.style(),
            "left: 12.50%; top: 50.00%; animation-delay: 0.50s; animation-duration: 1.25s"
        );
    }
}
