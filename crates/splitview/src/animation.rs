//! Eased transition of the rendered fraction after a programmatic change.
//!
//! Only what is drawn eases. The split's constrained and full fractions jump
//! to the new value immediately.

/// Default transition duration in seconds.
pub const FRACTION_TRANSITION_DURATION: f32 = 0.2;

/// Ease-out cubic interpolation between two fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionTransition {
    from: f32,
    to: f32,
    current: f32,
    elapsed: f32,
    duration: f32,
}

impl FractionTransition {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            current: from,
            elapsed: 0.0,
            duration: FRACTION_TRANSITION_DURATION,
        }
    }

    /// Use a custom duration in seconds. Non-positive durations finish on the
    /// first update.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = self.progress();
        // Ease-out cubic: 1 - (1-t)^3
        let eased = 1.0 - (1.0 - t).powi(3);
        self.current = self.from + (self.to - self.from) * eased;
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_reaches_target() {
        let mut anim = FractionTransition::new(0.2, 0.6);
        assert_eq!(anim.current(), 0.2);

        let steps = (FRACTION_TRANSITION_DURATION * 60.0) as usize + 1;
        for _ in 0..steps {
            anim.update(1.0 / 60.0);
        }
        assert!(anim.is_done());
        assert!((anim.current() - 0.6).abs() < 0.001);
    }

    #[test]
    fn transition_is_monotonic() {
        let mut anim = FractionTransition::new(0.8, 0.4);
        let mut last = anim.current();
        for _ in 0..10 {
            anim.update(0.01);
            assert!(anim.current() <= last);
            last = anim.current();
        }
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut anim = FractionTransition::new(0.0, 1.0).with_duration(0.0);
        anim.update(0.0);
        assert!(anim.is_done());
        assert_eq!(anim.current(), 1.0);
    }
}
