use constants::timeline::SCRUB_SMOOTHING_SECONDS;

/// Remaining distance below which the playhead snaps onto its target.
const SETTLE_EPSILON: f32 = 1e-4;

/// Smoothed playhead following the raw scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollScrub {
    target: f32,
    current: f32,
    smoothing: f32,
}

impl Default for ScrollScrub {
    fn default() -> Self {
        Self::new(SCRUB_SMOOTHING_SECONDS)
    }
}

impl ScrollScrub {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            smoothing,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn set_target(&mut self, progress: f32) {
        if progress.is_finite() {
            self.target = progress.clamp(0.0, 1.0);
        }
    }

    pub fn nudge(&mut self, delta: f32) {
        self.set_target(self.target + delta);
    }

    /// Move the playhead towards the target by an exponential step.
    /// Returns whether the playhead moved.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if self.is_settled() {
            return false;
        }

        if self.smoothing <= 0.0 {
            self.current = self.target;
            return true;
        }

        let blend = 1.0 - (-delta_seconds.max(0.0) / self.smoothing).exp();
        self.current += (self.target - self.current) * blend;
        if (self.target - self.current).abs() < SETTLE_EPSILON {
            self.current = self.target;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(scrub: &mut ScrollScrub) -> usize {
        let mut frames = 0;
        while scrub.advance(FRAME) {
            frames += 1;
            assert!(frames < 1_000, "scrub never settled");
        }
        frames
    }

    #[test]
    fn test_converges_to_target() {
        let mut scrub = ScrollScrub::default();
        scrub.set_target(0.8);
        settle(&mut scrub);
        assert_eq!(scrub.current(), 0.8);
    }

    #[test]
    fn test_lags_behind_target_within_a_frame() {
        let mut scrub = ScrollScrub::default();
        scrub.set_target(1.0);
        scrub.advance(FRAME);
        assert!(scrub.current() > 0.0 && scrub.current() < 0.5);
    }

    #[test]
    fn test_settles_within_a_second() {
        let mut scrub = ScrollScrub::default();
        scrub.set_target(1.0);
        assert!(settle(&mut scrub) <= 60);
    }

    #[test]
    fn test_reversal_returns_exactly_to_zero() {
        let mut scrub = ScrollScrub::default();
        scrub.set_target(1.0);
        settle(&mut scrub);
        scrub.set_target(0.0);
        settle(&mut scrub);
        assert_eq!(scrub.current(), 0.0);
    }

    #[test]
    fn test_target_is_clamped() {
        let mut scrub = ScrollScrub::default();
        scrub.nudge(-0.5);
        assert_eq!(scrub.target(), 0.0);
        scrub.nudge(3.0);
        assert_eq!(scrub.target(), 1.0);
        scrub.set_target(f32::NAN);
        assert_eq!(scrub.target(), 1.0);
    }

    #[test]
    fn test_zero_smoothing_snaps() {
        let mut scrub = ScrollScrub::new(0.0);
        scrub.set_target(0.3);
        assert!(scrub.advance(FRAME));
        assert_eq!(scrub.current(), 0.3);
        assert!(!scrub.advance(FRAME));
    }
}
