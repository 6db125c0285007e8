//! One-shot reveal of elements entering the viewport.

use omniseq_core::Rect;

/// Fraction of a target's area that must be inside the viewport to fire.
const VISIBILITY_THRESHOLD: f32 = 0.1;
/// The viewport is shrunk by this much at the bottom before testing.
const BOTTOM_MARGIN_PX: f32 = 50.0;
/// Per-index delay between targets firing in the same observation batch.
const STAGGER_MS: u64 = 50;
/// Duration of the opacity/rise transition once fired.
const TRANSITION_MS: u64 = 600;
/// Downward offset a hidden target starts from.
const RISE_PX: f32 = 20.0;

/// Lifecycle of one observed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Still observed, fully hidden.
    Hidden,
    /// Crossed the threshold; the transition starts at the stored time.
    Scheduled { start_ms: u64 },
    /// Transition finished. The target is unsubscribed and never re-hides.
    Revealed,
}

#[derive(Debug)]
struct RevealTarget {
    id: String,
    rect: Rect,
    state: RevealState,
}

/// Observes page-space rects against the scrolled viewport and fires each
/// target's reveal exactly once.
#[derive(Debug, Default)]
pub struct RevealSet {
    targets: Vec<RevealTarget>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target, or move it after a layout rebuild. A target that
    /// already fired keeps its state regardless of the new rect.
    pub fn observe(&mut self, id: &str, rect: Rect) {
        if let Some(existing) = self.targets.iter_mut().find(|t| t.id == id) {
            existing.rect = rect;
            return;
        }
        self.targets.push(RevealTarget {
            id: id.to_string(),
            rect,
            state: RevealState::Hidden,
        });
    }

    /// Test every still-hidden target against the viewport. Targets crossing
    /// the threshold in this batch are staggered by their batch index.
    pub fn check(&mut self, viewport: Rect, now_ms: u64) {
        let shrunk = Rect::new(
            viewport.x,
            viewport.y,
            viewport.w,
            (viewport.h - BOTTOM_MARGIN_PX).max(0.0),
        );
        let mut batch_index = 0u64;
        for target in &mut self.targets {
            if target.state != RevealState::Hidden {
                continue;
            }
            if target.rect.visible_fraction(&shrunk) >= VISIBILITY_THRESHOLD {
                target.state = RevealState::Scheduled {
                    start_ms: now_ms + batch_index * STAGGER_MS,
                };
                batch_index += 1;
            }
        }
    }

    /// Finish transitions whose time has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        for target in &mut self.targets {
            if let RevealState::Scheduled { start_ms } = target.state
                && now_ms >= start_ms + TRANSITION_MS
            {
                target.state = RevealState::Revealed;
            }
        }
    }

    /// Opacity of a target in `0.0..=1.0`. Unregistered ids are fully
    /// visible so a missing registration never blanks real content.
    pub fn opacity(&self, id: &str, now_ms: u64) -> f32 {
        match self.state_of(id) {
            Some(RevealState::Hidden) => 0.0,
            Some(RevealState::Scheduled { start_ms }) => progress(start_ms, now_ms),
            Some(RevealState::Revealed) | None => 1.0,
        }
    }

    /// Remaining upward travel of a target, in pixels.
    pub fn rise(&self, id: &str, now_ms: u64) -> f32 {
        match self.state_of(id) {
            Some(RevealState::Hidden) => RISE_PX,
            Some(RevealState::Scheduled { start_ms }) => RISE_PX * (1.0 - progress(start_ms, now_ms)),
            Some(RevealState::Revealed) | None => 0.0,
        }
    }

    pub fn state_of(&self, id: &str) -> Option<RevealState> {
        self.targets.iter().find(|t| t.id == id).map(|t| t.state)
    }
}

/// Ease-out progress of a transition started at `start_ms`; 0.0 before the
/// stagger delay is reached.
fn progress(start_ms: u64, now_ms: u64) -> f32 {
    if now_ms < start_ms {
        return 0.0;
    }
    let t = ((now_ms - start_ms) as f32 / TRANSITION_MS as f32).min(1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 650.0)
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut set = RevealSet::new();
        // 1000px tall; 99px inside the shrunk viewport is under 10%.
        set.observe("card", Rect::new(0.0, 501.0, 800.0, 1000.0));
        set.check(viewport(), 0);
        assert_eq!(set.state_of("card"), Some(RevealState::Hidden));
        assert_eq!(set.opacity("card", 0), 0.0);

        // Scroll it 100px further in: exactly 10% visible.
        set.observe("card", Rect::new(0.0, 500.0, 800.0, 1000.0));
        set.check(viewport(), 0);
        assert!(matches!(set.state_of("card"), Some(RevealState::Scheduled { .. })));
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        let mut set = RevealSet::new();
        // Fully inside the raw viewport but entirely within the 50px margin.
        set.observe("card", Rect::new(0.0, 610.0, 800.0, 30.0));
        set.check(viewport(), 0);
        assert_eq!(set.state_of("card"), Some(RevealState::Hidden));
    }

    #[test]
    fn test_fires_once_and_never_rehides() {
        let mut set = RevealSet::new();
        set.observe("card", Rect::new(0.0, 100.0, 100.0, 100.0));
        set.check(viewport(), 1_000);
        set.tick(1_000 + 600);
        assert_eq!(set.state_of("card"), Some(RevealState::Revealed));

        // Scrolled far away and checked again: still revealed.
        set.check(Rect::new(0.0, 10_000.0, 800.0, 650.0), 2_000);
        set.tick(2_000);
        assert_eq!(set.state_of("card"), Some(RevealState::Revealed));
        assert_eq!(set.opacity("card", 2_000), 1.0);
        assert_eq!(set.rise("card", 2_000), 0.0);
    }

    #[test]
    fn test_batch_is_staggered() {
        let mut set = RevealSet::new();
        set.observe("a", Rect::new(0.0, 0.0, 100.0, 100.0));
        set.observe("b", Rect::new(0.0, 100.0, 100.0, 100.0));
        set.observe("c", Rect::new(0.0, 200.0, 100.0, 100.0));
        set.check(viewport(), 500);
        assert_eq!(set.state_of("a"), Some(RevealState::Scheduled { start_ms: 500 }));
        assert_eq!(set.state_of("b"), Some(RevealState::Scheduled { start_ms: 550 }));
        assert_eq!(set.state_of("c"), Some(RevealState::Scheduled { start_ms: 600 }));
    }

    #[test]
    fn test_stagger_delays_opacity() {
        let mut set = RevealSet::new();
        set.observe("a", Rect::new(0.0, 0.0, 100.0, 100.0));
        set.observe("b", Rect::new(0.0, 100.0, 100.0, 100.0));
        set.check(viewport(), 0);
        assert!(set.opacity("a", 25) > 0.0);
        assert_eq!(set.opacity("b", 25), 0.0);
    }

    #[test]
    fn test_reobserve_preserves_fired_state() {
        let mut set = RevealSet::new();
        set.observe("card", Rect::new(0.0, 0.0, 100.0, 100.0));
        set.check(viewport(), 0);
        set.tick(600);
        // Layout rebuild moves the card somewhere invisible.
        set.observe("card", Rect::new(0.0, 50_000.0, 100.0, 100.0));
        assert_eq!(set.state_of("card"), Some(RevealState::Revealed));
    }

    #[test]
    fn test_unregistered_id_is_visible() {
        let set = RevealSet::new();
        assert_eq!(set.opacity("missing", 0), 1.0);
        assert_eq!(set.rise("missing", 0), 0.0);
    }

    #[test]
    fn test_transition_progress_monotonic() {
        let mut set = RevealSet::new();
        set.observe("card", Rect::new(0.0, 0.0, 100.0, 100.0));
        set.check(viewport(), 0);
        let early = set.opacity("card", 100);
        let late = set.opacity("card", 400);
        assert!(early > 0.0 && late > early && late < 1.0);
        assert!(set.rise("card", 100) > set.rise("card", 400));
    }
}
