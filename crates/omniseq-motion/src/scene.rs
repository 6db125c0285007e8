//! Coordination of the independent motion effects.

use std::time::{SystemTime, UNIX_EPOCH};

use omniseq_core::{Rect, Vec2};

use crate::effects::LayerOffsets;
use crate::effects::follower::PointerFollower;
use crate::effects::particles::ParticleField;
use crate::effects::pointer_parallax::PointerParallax;
use crate::effects::reveal::RevealSet;
use crate::effects::scroll_parallax::ScrollParallax;

/// Owns the page's motion effects and steps each on its own trigger, at most
/// once per drawn frame. The pointer-driven effects are disabled while no
/// hero region is present; reveals and scroll parallax are independent of it.
#[derive(Debug)]
pub struct MotionScene {
    reveals: RevealSet,
    scroll: ScrollParallax,
    pointer: PointerParallax,
    follower: PointerFollower,
    particles: Option<ParticleField>,
    hero: Option<Rect>,
    seed: u64,
    started: bool,
    now_ms: u64,
    last_ms: u64,
}

impl MotionScene {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Deterministic constructor.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            reveals: RevealSet::new(),
            scroll: ScrollParallax::new(),
            pointer: PointerParallax::new(),
            follower: PointerFollower::new(),
            particles: None,
            hero: None,
            seed,
            started: false,
            now_ms: 0,
            last_ms: 0,
        }
    }

    /// Start the per-frame loops. Calling again is a no-op; initialization
    /// code that runs twice must not double-start the animators.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Set or clear the hero region (page space). The particle field spawns
    /// on first sight of the region and is resized, not respawned, afterward.
    pub fn set_hero_region(&mut self, region: Option<Rect>) {
        self.hero = region;
        match (region, &mut self.particles) {
            (Some(rect), Some(field)) => field.resize(rect.w, rect.h),
            (Some(rect), None) => {
                self.particles = Some(ParticleField::new(rect.w, rect.h, self.seed));
            }
            (None, _) => {}
        }
    }

    /// Register a reveal target (page space).
    pub fn observe(&mut self, id: &str, rect: Rect) {
        self.reveals.observe(id, rect);
    }

    /// A scroll position change; coalesced to one update per frame.
    pub fn scrolled(&mut self, scroll_y: f32) {
        self.scroll.scrolled(scroll_y);
    }

    /// Pointer movement in page space. Outside the hero region this only
    /// deactivates the follower.
    pub fn pointer_moved(&mut self, point: Vec2) {
        let Some(hero) = self.hero else {
            return;
        };
        if hero.contains(point) {
            self.follower
                .pointer_moved(Vec2::new(point.x - hero.x, point.y - hero.y));
            self.pointer.pointer_moved(point, hero);
        } else {
            self.follower.pointer_left();
        }
    }

    pub fn pointer_left(&mut self) {
        self.follower.pointer_left();
    }

    /// Advance one frame: apply the pending scroll update, test reveals
    /// against the viewport, and step the unconditional loops.
    pub fn advance(&mut self, now_ms: u64, viewport: Rect) {
        if !self.started {
            return;
        }
        let delta_ms = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        self.now_ms = now_ms;

        self.scroll.step();
        self.reveals.check(viewport, now_ms);
        self.reveals.tick(now_ms);
        self.follower.step();
        if let Some(field) = &mut self.particles {
            field.step(delta_ms);
        }
    }

    /// Combined scroll and pointer offsets per decorative layer.
    pub fn layer_offsets(&self) -> LayerOffsets {
        self.scroll.offsets().combined(self.pointer.offsets())
    }

    /// Follower marker position, hero-local, while the pointer is active.
    pub fn follower_position(&self) -> Option<Vec2> {
        self.follower.visible_position()
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    /// Reveal opacity for a target at the last advanced frame.
    pub fn opacity(&self, id: &str) -> f32 {
        self.reveals.opacity(id, self.now_ms)
    }

    /// Remaining reveal rise for a target, in pixels.
    pub fn rise(&self, id: &str) -> f32 {
        self.reveals.rise(id, self.now_ms)
    }
}

impl Default for MotionScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 650.0)
    }

    #[test]
    fn test_advance_requires_start() {
        let mut scene = MotionScene::with_seed(1);
        scene.observe("card", Rect::new(0.0, 0.0, 100.0, 100.0));
        scene.advance(1_000, viewport());
        assert_eq!(scene.opacity("card"), 0.0);

        scene.start();
        scene.advance(1_000, viewport());
        scene.advance(2_000, viewport());
        assert_eq!(scene.opacity("card"), 1.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scene = MotionScene::with_seed(1);
        scene.set_hero_region(Some(Rect::new(0.0, 0.0, 640.0, 200.0)));
        scene.start();
        scene.advance(100, viewport());
        let positions: Vec<_> = scene
            .particles()
            .unwrap()
            .particles()
            .iter()
            .map(|p| p.position)
            .collect();
        // A second start must not respawn or rewind anything.
        scene.start();
        let after: Vec<_> = scene
            .particles()
            .unwrap()
            .particles()
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_pointer_ignored_without_hero_region() {
        let mut scene = MotionScene::with_seed(1);
        scene.start();
        scene.pointer_moved(Vec2::new(10.0, 10.0));
        scene.advance(16, viewport());
        assert!(scene.follower_position().is_none());
        assert_eq!(scene.layer_offsets(), LayerOffsets::default());
    }

    #[test]
    fn test_pointer_outside_hero_deactivates_follower() {
        let mut scene = MotionScene::with_seed(1);
        scene.set_hero_region(Some(Rect::new(0.0, 0.0, 640.0, 200.0)));
        scene.start();
        scene.pointer_moved(Vec2::new(100.0, 100.0));
        scene.advance(16, viewport());
        assert!(scene.follower_position().is_some());

        scene.pointer_moved(Vec2::new(100.0, 500.0));
        assert!(scene.follower_position().is_none());
    }

    #[test]
    fn test_scroll_and_pointer_offsets_compose() {
        let mut scene = MotionScene::with_seed(1);
        scene.set_hero_region(Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
        scene.start();
        scene.scrolled(100.0);
        scene.pointer_moved(Vec2::new(150.0, 75.0));
        scene.advance(16, viewport());

        let offsets = scene.layer_offsets();
        // grid: scroll (0, 50) + pointer (5, 5)
        assert_eq!(offsets.grid, (5.0, 55.0));
        // orb 0: scroll (30, 30) + pointer (7.5, 7.5)
        assert_eq!(offsets.orbs[0], (37.5, 37.5));
        // orb 1: scroll (-20, -20) + pointer (-5, -5)
        assert_eq!(offsets.orbs[1], (-25.0, -25.0));
    }

    #[test]
    fn test_resize_keeps_particle_field() {
        let mut scene = MotionScene::with_seed(5);
        scene.set_hero_region(Some(Rect::new(0.0, 0.0, 640.0, 200.0)));
        scene.start();
        scene.advance(16, viewport());
        let before: Vec<_> = scene
            .particles()
            .unwrap()
            .particles()
            .iter()
            .map(|p| p.opacity)
            .collect();
        scene.set_hero_region(Some(Rect::new(0.0, 0.0, 320.0, 100.0)));
        let after: Vec<_> = scene
            .particles()
            .unwrap()
            .particles()
            .iter()
            .map(|p| p.opacity)
            .collect();
        assert_eq!(before, after);
    }
}
