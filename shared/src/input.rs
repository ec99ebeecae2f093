use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 10;
pub const HISTORY_WINDOW_MS: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub point: Point,
    pub time: f64,
}

/// Recent pointer positions, oldest first, used to estimate which way a
/// stroke is heading.
#[derive(Default)]
pub struct InputTracker {
    history: VecDeque<PointerSample>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, x: f64, y: f64, now: f64) {
        if !x.is_finite() || !y.is_finite() || !now.is_finite() {
            return;
        }
        // A host clock stepping backwards must not reorder the history.
        let time = match self.history.back() {
            Some(last) => now.max(last.time),
            None => now,
        };
        self.history.push_back(PointerSample {
            point: Point { x, y },
            time,
        });
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history
            .retain(|sample| time - sample.time < HISTORY_WINDOW_MS);
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &PointerSample> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn first(&self) -> Option<PointerSample> {
        self.history.front().copied()
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.history.back().copied()
    }

    /// Net movement from the oldest to the newest retained sample.
    pub fn displacement(&self) -> Option<(f64, f64)> {
        if self.history.len() < 2 {
            return None;
        }
        let first = self.first()?;
        let last = self.last()?;
        Some((last.point.x - first.point.x, last.point.y - first.point.y))
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_history_at_limit() {
        let mut tracker = InputTracker::new();
        for i in 0..15 {
            tracker.record(i as f64, 0.0, 1000.0 + i as f64);
        }
        assert_eq!(tracker.len(), HISTORY_LIMIT);
        assert_eq!(tracker.first().map(|s| s.point.x), Some(5.0));
        assert_eq!(tracker.last().map(|s| s.point.x), Some(14.0));
    }

    #[test]
    fn test_drops_stale_samples() {
        let mut tracker = InputTracker::new();
        tracker.record(0.0, 0.0, 1000.0);
        tracker.record(5.0, 0.0, 1100.0);
        tracker.record(9.0, 0.0, 1150.0);
        // 1000 is exactly 150ms old and goes; 1100 stays.
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.first().map(|s| s.time), Some(1100.0));

        tracker.record(10.0, 0.0, 2000.0);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.displacement(), None);
    }

    #[test]
    fn test_history_stays_ordered_when_clock_steps_back() {
        let mut tracker = InputTracker::new();
        tracker.record(0.0, 0.0, 500.0);
        tracker.record(1.0, 0.0, 400.0);
        let times = tracker.history().map(|s| s.time).collect::<Vec<_>>();
        assert_eq!(times, vec![500.0, 500.0]);
    }

    #[test]
    fn test_displacement_uses_first_and_last() {
        let mut tracker = InputTracker::new();
        tracker.record(10.0, 10.0, 0.0);
        tracker.record(30.0, 12.0, 10.0);
        tracker.record(50.0, 11.0, 20.0);
        assert_eq!(tracker.displacement(), Some((40.0, 1.0)));
    }

    #[test]
    fn test_ignores_non_finite_positions() {
        let mut tracker = InputTracker::new();
        tracker.record(f64::NAN, 0.0, 0.0);
        assert!(tracker.is_empty());
    }
}
