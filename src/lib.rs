//! # murmur
//!
//! A cursor-following particle swarm, drawn as instanced spheres with wgpu.
//!
//! A fixed-size [`ParticleStore`] is created once at startup with randomized
//! motion parameters. Every frame the [`Swarm`] animator advances each
//! particle's phase, computes a closed-form trigonometric position and
//! scale, lags the pointer position into the motion, and overwrites the
//! per-instance transform buffer consumed by a single instanced draw call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use murmur::SwarmDemo;
//!
//! fn main() {
//!     env_logger::init();
//!     SwarmDemo::new()
//!         .with_particle_count(150)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! The animatable core ([`Swarm::advance_frame`]) is pure arithmetic over
//! fixed-shape data and is usable headless; the window, GPU setup, and
//! lighting live behind [`SwarmDemo`].

mod app;
mod camera;
mod error;
mod geometry;
mod gpu;
mod instance;
mod particle;
mod pointer;
mod shader;
mod swarm;
mod time;

pub use app::SwarmDemo;
pub use camera::Camera;
pub use error::{DemoError, GpuError};
pub use geometry::{SphereMesh, Vertex};
pub use glam::{Vec2, Vec3};
pub use instance::{InstanceBuffer, InstanceRaw};
pub use particle::{Particle, ParticleStore};
pub use pointer::PointerTracker;
pub use shader::SHADER_SOURCE;
pub use swarm::Swarm;
pub use time::FrameTimer;
