//! Particle records and the fixed-size store they live in.
//!
//! A [`ParticleStore`] is created once at startup for a configured count.
//! Every field except `phase` and the two pointer offsets is frozen at
//! creation; the swarm animator mutates those three each frame.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// One member of the swarm.
///
/// Motion is driven entirely by `phase`, which advances by `speed / 2` each
/// frame. The remaining creation-time fields shape the closed-form orbit:
/// `radial_factor` scales oscillation amplitude and the per-axis factors
/// offset the orbit center.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Monotonically increasing motion phase.
    pub phase: f32,
    /// Oscillation amplitude scale, fixed at creation.
    pub radial_factor: f32,
    /// Phase advance rate, fixed at creation.
    pub speed: f32,
    /// Per-axis orbit offsets, fixed at creation.
    pub x_factor: f32,
    pub y_factor: f32,
    pub z_factor: f32,
    /// Exponentially lagged copy of the pointer X coordinate.
    pub pointer_offset_x: f32,
    /// Exponentially lagged copy of the (sign-inverted) pointer Y coordinate.
    pub pointer_offset_y: f32,
}

impl Particle {
    fn random(rng: &mut SmallRng) -> Self {
        Self {
            phase: rng.gen_range(0.0..100.0),
            radial_factor: rng.gen_range(20.0..120.0),
            speed: rng.gen_range(0.01..0.015),
            x_factor: rng.gen_range(-20.0..20.0),
            y_factor: rng.gen_range(-20.0..20.0),
            z_factor: rng.gen_range(-20.0..20.0),
            pointer_offset_x: 0.0,
            pointer_offset_y: 0.0,
        }
    }
}

/// Fixed-size ordered sequence of particles.
///
/// No particle is added or removed after [`ParticleStore::spawn`]; the count
/// is the lifetime invariant the instance buffer is sized from.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Create `count` particles with randomized motion parameters.
    ///
    /// Seeded from the wall clock so each run differs. `count = 0` yields an
    /// empty store and a no-op animator.
    pub fn spawn(count: u32) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::spawn_seeded(count, seed)
    }

    /// Create `count` particles from an explicit seed.
    ///
    /// Deterministic: the same seed and count always produce the same store.
    pub fn spawn_seeded(count: u32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count).map(|_| Particle::random(&mut rng)).collect();
        Self { particles }
    }

    /// Number of particles in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only view of the particles, in store order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the particles, in store order.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_yields_exact_count() {
        for count in [0u32, 1, 7, 150] {
            let store = ParticleStore::spawn(count);
            assert_eq!(store.len(), count as usize);
        }
    }

    #[test]
    fn spawn_zero_is_empty() {
        let store = ParticleStore::spawn(0);
        assert!(store.is_empty());
        assert!(store.particles().is_empty());
    }

    #[test]
    fn spawned_fields_are_in_range() {
        let store = ParticleStore::spawn_seeded(500, 7);
        for p in store.particles() {
            assert!((0.0..100.0).contains(&p.phase));
            assert!((20.0..120.0).contains(&p.radial_factor));
            assert!((0.01..0.015).contains(&p.speed));
            assert!((-20.0..20.0).contains(&p.x_factor));
            assert!((-20.0..20.0).contains(&p.y_factor));
            assert!((-20.0..20.0).contains(&p.z_factor));
            assert_eq!(p.pointer_offset_x, 0.0);
            assert_eq!(p.pointer_offset_y, 0.0);
        }
    }

    #[test]
    fn same_seed_same_store() {
        let a = ParticleStore::spawn_seeded(64, 123);
        let b = ParticleStore::spawn_seeded(64, 123);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn different_seeds_differ() {
        let a = ParticleStore::spawn_seeded(64, 1);
        let b = ParticleStore::spawn_seeded(64, 2);
        assert_ne!(a.particles(), b.particles());
    }
}
