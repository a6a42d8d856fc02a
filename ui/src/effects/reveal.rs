//! One-shot "reveal on scroll" state machine.
//!
//! A [`RevealMachine`] starts [`RevealPhase::Hidden`] and moves to
//! [`RevealPhase::Visible`] the first time its element is reported at least
//! [`REVEAL_THRESHOLD`] visible. At that moment it releases its observation;
//! nothing afterwards moves it back.

/// Fraction of the element that must be on screen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Browsers report the crossing ratio with a little rounding noise.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

impl RevealPhase {
    pub fn is_visible(self) -> bool {
        matches!(self, RevealPhase::Visible)
    }
}

/// One visibility report from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub const FULL: Visibility = Visibility {
        intersecting: true,
        ratio: 1.0,
    };

    pub const NONE: Visibility = Visibility {
        intersecting: false,
        ratio: 0.0,
    };

    fn crosses_threshold(self) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD
    }
}

/// The host-side resource watching the element.
pub trait Observation {
    fn release(&mut self);
}

/// For hosts without an intersection API.
#[derive(Debug, Default)]
pub struct Unobserved;

impl Observation for Unobserved {
    fn release(&mut self) {}
}

#[derive(Debug)]
pub struct RevealMachine<O: Observation> {
    phase: RevealPhase,
    observation: O,
    attached: bool,
}

impl<O: Observation> RevealMachine<O> {
    pub fn new(observation: O) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            observation,
            attached: true,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feed a visibility report. Returns `true` only for the report that
    /// performs the Hidden → Visible transition.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        if self.phase.is_visible() || !self.attached || !visibility.crosses_threshold() {
            return false;
        }
        self.phase = RevealPhase::Visible;
        self.detach();
        true
    }

    /// Release the observation. Idempotent; also used on unmount.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.observation.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counting(Rc<Cell<u32>>);

    impl Observation for Counting {
        fn release(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn seen(ratio: f64) -> Visibility {
        Visibility {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn starts_hidden_and_attached() {
        let machine = RevealMachine::new(Unobserved);
        assert_eq!(machine.phase(), RevealPhase::Hidden);
        assert!(machine.is_attached());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let releases = Counting::default();
        let mut machine = RevealMachine::new(releases.clone());
        assert!(!machine.observe(Visibility::NONE));
        assert!(!machine.observe(seen(0.05)));
        assert_eq!(machine.phase(), RevealPhase::Hidden);
        assert_eq!(releases.0.get(), 0);
    }

    #[test]
    fn crossing_reveals_once_and_releases() {
        let releases = Counting::default();
        let mut machine = RevealMachine::new(releases.clone());

        assert!(machine.observe(seen(0.1)));
        assert_eq!(machine.phase(), RevealPhase::Visible);
        assert!(!machine.is_attached());
        assert_eq!(releases.0.get(), 1);

        assert!(!machine.observe(seen(0.8)));
        assert_eq!(releases.0.get(), 1);
    }

    #[test]
    fn rounding_at_threshold_still_counts() {
        let mut machine = RevealMachine::new(Unobserved);
        assert!(machine.observe(seen(0.0999)));
    }

    #[test]
    fn scrolling_away_does_not_hide_again() {
        let mut machine = RevealMachine::new(Unobserved);
        machine.observe(Visibility::FULL);
        machine.observe(Visibility::NONE);
        machine.observe(seen(0.01));
        assert_eq!(machine.phase(), RevealPhase::Visible);
    }

    #[test]
    fn detach_is_idempotent() {
        let releases = Counting::default();
        let mut machine = RevealMachine::new(releases.clone());
        machine.detach();
        machine.detach();
        assert_eq!(releases.0.get(), 1);
    }

    #[test]
    fn unmount_before_trigger_ignores_late_reports() {
        let releases = Counting::default();
        let mut machine = RevealMachine::new(releases.clone());
        machine.detach();
        assert!(!machine.observe(Visibility::FULL));
        assert_eq!(machine.phase(), RevealPhase::Hidden);
        assert_eq!(releases.0.get(), 1);
    }
}
