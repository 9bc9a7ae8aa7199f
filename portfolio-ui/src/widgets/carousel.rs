//! Carousel State
//!
//! Index arithmetic for a fixed sequence shown one item at a time, plus the
//! guard that paces automatic advancing.

/// Auto-advance period
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// Ticks arriving this close before a period boundary count toward it
const TIMER_SLACK_MS: i64 = 50;

/// Position within a fixed, ordered sequence of `len` items.
///
/// The index always stays in `[0, len)`. An empty sequence has no index and
/// every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
}

impl CarouselState {
    /// Start at the first item
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, or `None` for an empty sequence
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Whether the controls should be rendered at all
    pub fn navigation_enabled(&self) -> bool {
        !self.is_empty()
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Select an item directly.
    ///
    /// Returns `false` and leaves the index untouched when `index` is out of
    /// range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index() == Some(index)
    }

    /// Item at the current index
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index().and_then(|i| items.get(i))
    }

    /// Horizontal translation of the slide track, in percent
    pub fn track_offset_percent(&self) -> usize {
        self.index().unwrap_or(0) * 100
    }
}

/// Paces the auto-advance timer.
///
/// Fires at most once per period measured from `start`, and never after
/// `stop`. Manual navigation does not reset the schedule.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period_ms: i64,
    started_at: Option<i64>,
    periods_fired: i64,
}

impl AutoAdvance {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: i64::from(period_ms.max(1)),
            started_at: None,
            periods_fired: 0,
        }
    }

    pub fn start(&mut self, now: i64) {
        self.started_at = Some(now);
        self.periods_fired = 0;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Called from the timer; returns whether the carousel should advance
    pub fn tick(&mut self, now: i64) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed_periods = (now - started_at + TIMER_SLACK_MS) / self.period_ms;
        if elapsed_periods > self.periods_fired {
            self.periods_fired = elapsed_periods;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_after_full_cycle() {
        for n in 1..=7 {
            let mut state = CarouselState::new(n);
            for _ in 0..n {
                state.next();
            }
            assert_eq!(state.index(), Some(0), "len {}", n);
        }
    }

    #[test]
    fn test_previous_undoes_next() {
        for n in 1..=5 {
            for start in 0..n {
                let mut state = CarouselState::new(n);
                assert!(state.jump_to(start));
                state.next();
                state.previous();
                assert_eq!(state.index(), Some(start));
            }
        }
    }

    #[test]
    fn test_four_testimonials_scenario() {
        let mut state = CarouselState::new(4);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.index(), Some(3));
        state.next();
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut state = CarouselState::new(4);
        state.previous();
        assert_eq!(state.index(), Some(3));
        assert_eq!(state.track_offset_percent(), 300);
    }

    #[test]
    fn test_jump_to_rejects_out_of_range() {
        let mut state = CarouselState::new(3);
        assert!(state.jump_to(2));
        assert!(!state.jump_to(3));
        assert_eq!(state.index(), Some(2));
        assert!(state.is_current(2));
    }

    #[test]
    fn test_empty_sequence() {
        let mut state = CarouselState::new(0);
        state.next();
        state.previous();
        assert!(!state.jump_to(0));
        assert_eq!(state.index(), None);
        assert!(!state.navigation_enabled());
        assert_eq!(state.current::<&str>(&[]), None);
        assert_eq!(state.track_offset_percent(), 0);
    }

    #[test]
    fn test_current_item() {
        let items = ["a", "b", "c"];
        let mut state = CarouselState::new(items.len());
        state.next();
        assert_eq!(state.current(&items), Some(&"b"));
    }

    #[test]
    fn test_auto_advance_once_per_period() {
        let mut auto = AutoAdvance::new(AUTO_ADVANCE_MS);
        auto.start(0);

        assert!(!auto.tick(1_000));
        assert!(auto.tick(5_000));
        // A second tick inside the same period does nothing
        assert!(!auto.tick(5_100));
        assert!(!auto.tick(9_000));
        assert!(auto.tick(10_020));
    }

    #[test]
    fn test_auto_advance_tolerates_early_timer() {
        let mut auto = AutoAdvance::new(AUTO_ADVANCE_MS);
        auto.start(0);
        assert!(auto.tick(4_990));
        assert!(!auto.tick(5_010));
    }

    #[test]
    fn test_auto_advance_coalesces_missed_periods() {
        let mut auto = AutoAdvance::new(AUTO_ADVANCE_MS);
        auto.start(0);
        assert!(auto.tick(23_000));
        assert!(!auto.tick(23_500));
        assert!(auto.tick(25_000));
    }

    #[test]
    fn test_auto_advance_never_fires_after_stop() {
        let mut auto = AutoAdvance::new(AUTO_ADVANCE_MS);
        assert!(!auto.tick(10_000));

        auto.start(0);
        auto.stop();
        assert!(!auto.is_running());
        assert!(!auto.tick(5_000));
        assert!(!auto.tick(60_000));
    }
}
