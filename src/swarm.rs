//! The per-frame swarm animator.
//!
//! [`Swarm::advance_frame`] runs once per displayed frame on the event-loop
//! thread. It advances every particle's phase, derives a position and scale
//! from closed-form trigonometric functions, lags the shared pointer
//! position into each particle, and overwrites the instance transform slots.
//! There is no integration step and no inter-particle interaction; the whole
//! motion model is a stateless function of `(phase, creation parameters,
//! lagged pointer)`.

use glam::Vec2;

use crate::instance::InstanceBuffer;
use crate::particle::ParticleStore;

/// Smoothing constant for the pointer lag. Each frame a particle moves 2%
/// of the remaining distance toward the pointer, which converges without
/// overshoot.
const POINTER_LAG: f32 = 0.02;

/// Owns the particle store and animates it toward the pointer.
#[derive(Debug, Clone)]
pub struct Swarm {
    store: ParticleStore,
}

impl Swarm {
    pub fn new(store: ParticleStore) -> Self {
        Self { store }
    }

    /// Number of animated particles, fixed for the swarm's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read-only view of the underlying store.
    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Advance every particle by one frame and overwrite the instance
    /// transforms.
    ///
    /// `pointer` is the viewport-center-relative cursor position, read once
    /// for the whole pass. The buffer is marked dirty after the last slot is
    /// written; an empty swarm writes nothing and leaves the flag alone.
    ///
    /// Deterministic: the same prior particle state and pointer always
    /// produce the same transforms.
    pub fn advance_frame(&mut self, pointer: Vec2, instances: &mut InstanceBuffer) {
        if self.store.is_empty() {
            return;
        }

        for (i, p) in self.store.particles_mut().iter_mut().enumerate() {
            p.phase += p.speed / 2.0;
            let t = p.phase;

            let a = t.cos() + t.sin() / 10.0;
            let b = t.sin() + (2.0 * t).cos() / 10.0;
            let scale = (t.cos() * 5.0).max(1.5);

            p.pointer_offset_x += (pointer.x - p.pointer_offset_x) * POINTER_LAG;
            // Screen-space Y grows downward, world-space Y grows upward.
            p.pointer_offset_y += (-pointer.y - p.pointer_offset_y) * POINTER_LAG;

            let radial = t / 10.0 * p.radial_factor;
            let x = (p.pointer_offset_x / 10.0) * a
                + p.x_factor
                + radial.cos()
                + t.sin() * p.radial_factor / 10.0;
            let y = (p.pointer_offset_y / 10.0) * b
                + p.y_factor
                + radial.sin()
                + (2.0 * t).cos() * p.radial_factor / 10.0;
            // z reads the same lagged pointer axis and oscillator as y.
            let z = (p.pointer_offset_y / 10.0) * b
                + p.z_factor
                + radial.cos()
                + (3.0 * t).sin() * p.radial_factor / 10.0;

            instances.set(i, [x, y, z], scale);
        }

        instances.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn fixed_particle() -> Particle {
        Particle {
            phase: 0.0,
            radial_factor: 20.0,
            speed: 0.02,
            x_factor: 0.0,
            y_factor: 0.0,
            z_factor: 0.0,
            pointer_offset_x: 0.0,
            pointer_offset_y: 0.0,
        }
    }

    fn swarm_of(particles: Vec<Particle>) -> Swarm {
        let mut store = ParticleStore::spawn_seeded(particles.len() as u32, 0);
        store.particles_mut().clone_from_slice(&particles);
        Swarm::new(store)
    }

    #[test]
    fn empty_swarm_is_a_no_op() {
        let mut swarm = Swarm::new(ParticleStore::spawn(0));
        let mut instances = InstanceBuffer::new(0);
        swarm.advance_frame(Vec2::new(5.0, 5.0), &mut instances);
        assert!(!instances.is_dirty());
    }

    #[test]
    fn advance_marks_buffer_dirty() {
        let mut swarm = Swarm::new(ParticleStore::spawn_seeded(3, 1));
        let mut instances = InstanceBuffer::new(3);
        swarm.advance_frame(Vec2::ZERO, &mut instances);
        assert!(instances.is_dirty());
    }

    #[test]
    fn advance_is_deterministic_for_fixed_state() {
        let store = ParticleStore::spawn_seeded(32, 99);
        let pointer = Vec2::new(120.0, -45.0);

        let mut a = Swarm::new(store.clone());
        let mut b = Swarm::new(store);
        let mut out_a = InstanceBuffer::new(32);
        let mut out_b = InstanceBuffer::new(32);

        a.advance_frame(pointer, &mut out_a);
        b.advance_frame(pointer, &mut out_b);

        assert_eq!(out_a.slots(), out_b.slots());
        assert_eq!(a.store().particles(), b.store().particles());
    }

    #[test]
    fn scale_never_drops_below_floor() {
        let mut swarm = Swarm::new(ParticleStore::spawn_seeded(100, 3));
        let mut instances = InstanceBuffer::new(100);

        for _ in 0..1000 {
            swarm.advance_frame(Vec2::new(30.0, -80.0), &mut instances);
            for slot in instances.slots() {
                assert!(slot.scale >= 1.5);
            }
        }
    }

    #[test]
    fn single_step_from_known_state() {
        let mut swarm = swarm_of(vec![fixed_particle()]);
        let mut instances = InstanceBuffer::new(1);

        swarm.advance_frame(Vec2::ZERO, &mut instances);

        let p = &swarm.store().particles()[0];
        assert!((p.phase - 0.01).abs() < 1e-6);
        assert_eq!(p.pointer_offset_x, 0.0);
        assert_eq!(p.pointer_offset_y, 0.0);

        let t = 0.01f32;
        let expected_x = (t / 10.0 * 20.0).cos() + t.sin() * 2.0;
        let expected_scale = t.cos() * 5.0;

        let slot = instances.slots()[0];
        assert!((slot.position[0] - expected_x).abs() < 1e-5);
        assert!((slot.scale - expected_scale).abs() < 1e-5);
        assert!(slot.scale > 4.99);
    }

    #[test]
    fn pointer_offsets_converge_without_overshoot() {
        let mut swarm = swarm_of(vec![fixed_particle()]);
        let mut instances = InstanceBuffer::new(1);
        let pointer = Vec2::new(100.0, -40.0);

        // Targets are (pointer.x, -pointer.y).
        let mut last_x = 0.0f32;
        let mut last_y = 0.0f32;
        for _ in 0..500 {
            swarm.advance_frame(pointer, &mut instances);
            let p = &swarm.store().particles()[0];
            assert!(p.pointer_offset_x >= last_x);
            assert!(p.pointer_offset_x <= pointer.x);
            assert!(p.pointer_offset_y >= last_y);
            assert!(p.pointer_offset_y <= -pointer.y);
            last_x = p.pointer_offset_x;
            last_y = p.pointer_offset_y;
        }

        let p = &swarm.store().particles()[0];
        assert!((p.pointer_offset_x - pointer.x).abs() < 0.01);
        assert!((p.pointer_offset_y - -pointer.y).abs() < 0.01);
    }

    #[test]
    fn successive_frames_advance_phase() {
        let mut swarm = Swarm::new(ParticleStore::spawn_seeded(10, 5));
        let before: Vec<f32> = swarm.store().particles().iter().map(|p| p.phase).collect();

        let mut instances = InstanceBuffer::new(10);
        swarm.advance_frame(Vec2::ZERO, &mut instances);
        let mid: Vec<f32> = swarm.store().particles().iter().map(|p| p.phase).collect();
        swarm.advance_frame(Vec2::ZERO, &mut instances);
        let after: Vec<f32> = swarm.store().particles().iter().map(|p| p.phase).collect();

        for i in 0..10 {
            assert!(mid[i] > before[i]);
            assert!(after[i] > mid[i]);
        }
    }

    #[test]
    fn y_and_z_share_pointer_axis() {
        // Known coupling: y and z both derive from the lagged Y offset and
        // the same `b` oscillator. With equal axis factors the components
        // differ only by their radial terms.
        let mut particle = fixed_particle();
        particle.y_factor = 3.0;
        particle.z_factor = 3.0;

        let mut swarm = swarm_of(vec![particle]);
        let mut instances = InstanceBuffer::new(1);
        swarm.advance_frame(Vec2::new(50.0, 75.0), &mut instances);

        let p = &swarm.store().particles()[0];
        let t = p.phase;
        let slot = instances.slots()[0];
        let radial = t / 10.0 * p.radial_factor;
        let y_radial = radial.sin() + (2.0 * t).cos() * p.radial_factor / 10.0;
        let z_radial = radial.cos() + (3.0 * t).sin() * p.radial_factor / 10.0;

        let shared_y = slot.position[1] - y_radial;
        let shared_z = slot.position[2] - z_radial;
        assert!((shared_y - shared_z).abs() < 1e-5);
    }
}
