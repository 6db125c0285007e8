//! Decorative motion for the omniseq brochure page.
//!
//! Five independent effects (one-shot reveals, scroll-linked parallax,
//! pointer-linked parallax, a pointer follower, and a free-floating particle
//! field) coordinated by [`MotionScene`], which steps each on its own
//! trigger at most once per drawn frame. Everything here is headless and
//! works in virtual pixels; drawing belongs to the caller.

mod effects;
mod scene;

pub use effects::LayerOffsets;
pub use effects::follower::PointerFollower;
pub use effects::particles::{PARTICLE_COUNT, Particle, ParticleField};
pub use effects::pointer_parallax::PointerParallax;
pub use effects::reveal::{RevealSet, RevealState};
pub use effects::scroll_parallax::ScrollParallax;
pub use scene::MotionScene;
