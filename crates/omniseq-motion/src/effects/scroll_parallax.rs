//! Scroll-linked drift of the decorative hero layers.

use super::LayerOffsets;

/// Grid layer drifts at half the scroll speed.
const GRID_FACTOR: f32 = 0.5;
/// The two orb layers, one moving against the scroll.
const ORB_FACTORS: [f32; 2] = [0.3, -0.2];

/// Coalesces scroll bursts into at most one layer update per frame.
#[derive(Debug, Default)]
pub struct ScrollParallax {
    pending: Option<f32>,
    offsets: LayerOffsets,
}

impl ScrollParallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll position. Within one frame later positions replace
    /// earlier ones; nothing queues.
    pub fn scrolled(&mut self, scroll_y: f32) {
        self.pending = Some(scroll_y);
    }

    /// Apply the pending position, if any. Called once per frame; returns
    /// whether the layers moved.
    pub fn step(&mut self) -> bool {
        let Some(scroll_y) = self.pending.take() else {
            return false;
        };
        self.offsets.grid = (0.0, scroll_y * GRID_FACTOR);
        self.offsets.orbs = ORB_FACTORS.map(|factor| (scroll_y * factor, scroll_y * factor));
        true
    }

    pub fn offsets(&self) -> LayerOffsets {
        self.offsets
    }
}
