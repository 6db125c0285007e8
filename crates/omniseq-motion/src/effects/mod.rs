//! The individual motion effects.

pub mod follower;
pub mod particles;
pub mod pointer_parallax;
pub mod reveal;
pub mod scroll_parallax;

/// Offsets for the decorative hero layers, in virtual pixels.
///
/// Both parallax effects produce these; the scene sums the two so neither
/// observer overwrites the other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerOffsets {
    pub grid: (f32, f32),
    pub orbs: [(f32, f32); 2],
}

impl LayerOffsets {
    /// Component-wise sum of two offset sets.
    pub fn combined(self, other: LayerOffsets) -> LayerOffsets {
        LayerOffsets {
            grid: (self.grid.0 + other.grid.0, self.grid.1 + other.grid.1),
            orbs: [
                (self.orbs[0].0 + other.orbs[0].0, self.orbs[0].1 + other.orbs[0].1),
                (self.orbs[1].0 + other.orbs[1].0, self.orbs[1].1 + other.orbs[1].1),
            ],
        }
    }
}
