//! Pointer follower with exponential smoothing.

use omniseq_core::Vec2;

/// Fraction of the remaining distance covered each frame.
const EASE: f32 = 0.1;

/// A marker that chases the last pointer position. The easing loop runs for
/// the page's lifetime; the marker is only visible while the pointer is over
/// its region.
#[derive(Debug, Default)]
pub struct PointerFollower {
    position: Vec2,
    target: Vec2,
    active: bool,
}

impl PointerFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the chase target; the pointer is inside the region.
    pub fn pointer_moved(&mut self, target: Vec2) {
        self.target = target;
        self.active = true;
    }

    /// The pointer left the region. The loop keeps easing invisibly.
    pub fn pointer_left(&mut self) {
        self.active = false;
    }

    /// One frame of easing, active or not.
    pub fn step(&mut self) {
        self.position.x += (self.target.x - self.position.x) * EASE;
        self.position.y += (self.target.y - self.position.y) * EASE;
    }

    /// Marker position, reported only while the pointer is over the region.
    pub fn visible_position(&self) -> Option<Vec2> {
        self.active.then_some(self.position)
    }
}
