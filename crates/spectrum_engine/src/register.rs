//! Mood state register: the current mood and how long each mood has lasted.

use spectrum_core::{MoodState, StateDurations};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct MoodRegister {
    current: MoodState,
    durations: StateDurations,
    /// Last instant elapsed time was folded into a bucket
    anchor: Instant,
}

impl MoodRegister {
    pub fn new(initial: MoodState, now: Instant) -> Self {
        Self {
            current: initial,
            durations: StateDurations::default(),
            anchor: now,
        }
    }

    pub fn current(&self) -> MoodState {
        self.current
    }

    pub fn durations(&self) -> StateDurations {
        self.durations
    }

    /// Switch to `new_state`, crediting time since the last update to the
    /// outgoing mood. Returns `false` (and touches nothing) on a self-switch.
    pub fn set_current(&mut self, new_state: MoodState, now: Instant) -> bool {
        if new_state == self.current {
            return false;
        }
        self.accumulate(now);
        self.current = new_state;
        true
    }

    /// Credit elapsed time to the current mood without switching.
    pub fn tick(&mut self, now: Instant) {
        self.accumulate(now);
    }

    /// Zero every bucket and restart measurement from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.durations = StateDurations::default();
        self.anchor = now;
    }

    fn accumulate(&mut self, now: Instant) {
        // An instant earlier than the anchor credits nothing.
        let elapsed = now.saturating_duration_since(self.anchor);
        self.durations.add(self.current, elapsed);
        if now > self.anchor {
            self.anchor = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_switch_credits_outgoing_state() {
        let t0 = Instant::now();
        let mut reg = MoodRegister::new(MoodState::Depressive, t0);

        assert!(reg.set_current(MoodState::Manic, t0 + Duration::from_secs(5)));
        assert_eq!(reg.current(), MoodState::Manic);
        assert_eq!(reg.durations().depressive, Duration::from_secs(5));
        assert_eq!(reg.durations().manic, Duration::ZERO);

        reg.tick(t0 + Duration::from_secs(8));
        assert_eq!(reg.durations().manic, Duration::from_secs(3));
    }

    #[test]
    fn test_self_switch_is_noop() {
        let t0 = Instant::now();
        let mut reg = MoodRegister::new(MoodState::Mixed, t0);

        assert!(!reg.set_current(MoodState::Mixed, t0 + Duration::from_secs(10)));
        assert_eq!(reg.durations(), StateDurations::default());

        // Anchor was not moved, so the next tick sees the full 12s
        reg.tick(t0 + Duration::from_secs(12));
        assert_eq!(reg.durations().mixed, Duration::from_secs(12));
    }

    #[test]
    fn test_earlier_instant_credits_nothing() {
        let t0 = Instant::now() + Duration::from_secs(100);
        let mut reg = MoodRegister::new(MoodState::Manic, t0);
        reg.tick(t0 - Duration::from_secs(50));
        assert_eq!(reg.durations().total(), Duration::ZERO);
        reg.tick(t0 + Duration::from_secs(1));
        assert_eq!(reg.durations().manic, Duration::from_secs(1));
    }

    #[test]
    fn test_reset() {
        let t0 = Instant::now();
        let mut reg = MoodRegister::new(MoodState::Manic, t0);
        reg.tick(t0 + Duration::from_secs(4));
        reg.reset(t0 + Duration::from_secs(6));
        assert_eq!(reg.durations().total(), Duration::ZERO);
        reg.tick(t0 + Duration::from_secs(7));
        assert_eq!(reg.durations().manic, Duration::from_secs(1));
    }
}
