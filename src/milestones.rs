//! Scroll-depth and time-on-page milestone tracking.
//!
//! The trackers here are pure: the browser glue in `pages::home` turns scroll
//! and timer callbacks into typed notifications, and the trackers answer with
//! the milestones that fired. Each milestone fires at most once per page load.

/// Scroll percentages that emit a `scroll_depth` event the first time the
/// reader passes them.
pub const SCROLL_MILESTONES: [u32; 4] = [25, 50, 75, 100];

/// Dwell durations (seconds) that emit a `time_on_page` event.
pub const DWELL_TARGETS: [u32; 3] = [30, 60, 180];

/// Cadence of the dwell timer, in seconds.
pub const DWELL_INTERVAL_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollNotification {
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub elapsed_seconds: u32,
}

/// How far down the page the viewport currently sits, rounded to whole
/// percent and clamped to 0..=100.
///
/// Returns `None` when the content fits inside the viewport (nothing to
/// scroll), so degenerate geometry can never leak a non-finite value into a
/// recorded event.
pub fn scroll_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> Option<u32> {
    let track = document_height - viewport_height;
    if track <= 0.0 {
        return None;
    }
    Some((scroll_y / track * 100.0).round().clamp(0.0, 100.0) as u32)
}

/// Remembers the deepest scroll position seen and which milestones already
/// fired.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    max_seen: u32,
    fired: Vec<u32>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll notification; returns the milestones newly crossed by
    /// it, in ascending order. Only a new maximum can fire anything, so
    /// scrolling back up and down again stays silent.
    pub fn observe(&mut self, note: ScrollNotification) -> Vec<u32> {
        if note.percent <= self.max_seen {
            return Vec::new();
        }
        self.max_seen = note.percent;
        let mut crossed = Vec::new();
        for milestone in SCROLL_MILESTONES {
            if note.percent >= milestone && !self.fired.contains(&milestone) {
                self.fired.push(milestone);
                crossed.push(milestone);
            }
        }
        crossed
    }
}

/// Accumulates time on page in fixed timer steps and reports dwell targets.
///
/// The check is strict equality against the accumulator, matching the page's
/// long-standing behavior: a skipped or drifted timer firing silently skips
/// the milestone instead of firing it late.
#[derive(Debug, Default)]
pub struct DwellTracker {
    elapsed: u32,
}

impl DwellTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the accumulator by one timer interval; returns the tick when
    /// the new total is exactly one of the dwell targets.
    pub fn advance(&mut self, interval_secs: u32) -> Option<TimerTick> {
        self.elapsed += interval_secs;
        if DWELL_TARGETS.contains(&self.elapsed) {
            Some(TimerTick {
                elapsed_seconds: self.elapsed,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut ScrollDepthTracker, percents: &[u32]) -> Vec<u32> {
        percents
            .iter()
            .flat_map(|&percent| tracker.observe(ScrollNotification { percent }))
            .collect()
    }

    #[test]
    fn milestones_fire_at_most_once() {
        let mut tracker = ScrollDepthTracker::new();
        // Drops back to 40 after 95, then jumps to the bottom: nothing
        // re-fires on the way back up, only the 100 milestone is new.
        let fired = feed(&mut tracker, &[10, 30, 60, 80, 95, 40, 100]);
        assert_eq!(fired, vec![25, 50, 75, 100]);
    }

    #[test]
    fn fast_jump_fires_all_crossed_milestones_ascending() {
        let mut tracker = ScrollDepthTracker::new();
        let fired = tracker.observe(ScrollNotification { percent: 100 });
        assert_eq!(fired, vec![25, 50, 75, 100]);
        // And nothing left to fire afterwards.
        assert!(tracker.observe(ScrollNotification { percent: 100 }).is_empty());
    }

    #[test]
    fn partial_jump_fires_only_crossed_milestones() {
        let mut tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.observe(ScrollNotification { percent: 80 }), vec![25, 50, 75]);
        assert_eq!(tracker.observe(ScrollNotification { percent: 99 }), Vec::<u32>::new());
        assert_eq!(tracker.observe(ScrollNotification { percent: 100 }), vec![100]);
    }

    #[test]
    fn replayed_scroll_sequence_stays_silent() {
        // The reader leaves the landing sections and comes back (SPA route
        // round-trip): the same page-lifetime tracker sees the same percents
        // again and must not re-fire anything.
        let mut tracker = ScrollDepthTracker::new();
        assert_eq!(feed(&mut tracker, &[10, 30, 60]), vec![25, 50]);
        assert_eq!(feed(&mut tracker, &[10, 30, 60]), Vec::<u32>::new());
    }

    #[test]
    fn non_increasing_percent_is_silent() {
        let mut tracker = ScrollDepthTracker::new();
        tracker.observe(ScrollNotification { percent: 60 });
        assert!(tracker.observe(ScrollNotification { percent: 60 }).is_empty());
        assert!(tracker.observe(ScrollNotification { percent: 10 }).is_empty());
    }

    #[test]
    fn scroll_percent_rounds_and_clamps() {
        assert_eq!(scroll_percent(0.0, 2000.0, 800.0), Some(0));
        assert_eq!(scroll_percent(600.0, 2000.0, 800.0), Some(50));
        assert_eq!(scroll_percent(1199.0, 2000.0, 800.0), Some(100));
        // Elastic overscroll past the bottom, or above the top.
        assert_eq!(scroll_percent(1500.0, 2000.0, 800.0), Some(100));
        assert_eq!(scroll_percent(-20.0, 2000.0, 800.0), Some(0));
    }

    #[test]
    fn short_page_yields_no_percentage() {
        assert_eq!(scroll_percent(0.0, 700.0, 800.0), None);
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
    }

    #[test]
    fn dwell_targets_fire_exactly_on_the_accumulator() {
        let mut tracker = DwellTracker::new();
        let mut fired = Vec::new();
        for _ in 0..18 {
            if let Some(tick) = tracker.advance(DWELL_INTERVAL_SECS) {
                fired.push(tick.elapsed_seconds);
            }
        }
        assert_eq!(fired, vec![30, 60, 180]);
    }

    #[test]
    fn drifted_dwell_interval_skips_the_target() {
        // The equality policy means a 25s cadence steps over every target:
        // the accumulator jumps from 25 straight to 50 and 30 never fires.
        let mut tracker = DwellTracker::new();
        for _ in 0..9 {
            assert_eq!(tracker.advance(25), None);
        }
    }
}
