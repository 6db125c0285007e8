//! Pointer-linked drift of the decorative hero layers.

use omniseq_core::{Rect, Vec2};

use super::LayerOffsets;

/// Maximum drift at the region edge.
const RANGE_PX: f32 = 10.0;
const GRID_FACTOR: f32 = 1.0;
/// One orb exaggerates the pointer, the other moves against it.
const ORB_FACTORS: [f32; 2] = [1.5, -1.0];

/// Shifts the hero layers by the pointer's normalized offset from the
/// region center.
#[derive(Debug, Default)]
pub struct PointerParallax {
    offsets: LayerOffsets,
}

impl PointerParallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the layer offsets from a pointer position inside `region`.
    /// A degenerate region leaves the layers untouched.
    pub fn pointer_moved(&mut self, pointer: Vec2, region: Rect) {
        if region.w <= 0.0 || region.h <= 0.0 {
            return;
        }
        let nx = (pointer.x - region.x) / region.w - 0.5;
        let ny = (pointer.y - region.y) / region.h - 0.5;
        let base = (nx * 2.0 * RANGE_PX, ny * 2.0 * RANGE_PX);
        self.offsets.grid = (base.0 * GRID_FACTOR, base.1 * GRID_FACTOR);
        self.offsets.orbs = ORB_FACTORS.map(|factor| (base.0 * factor, base.1 * factor));
    }

    pub fn offsets(&self) -> LayerOffsets {
        self.offsets
    }
}
