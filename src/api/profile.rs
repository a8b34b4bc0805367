use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::core::DisplayProfile;

/// Maps a viewport width to a display profile: `width < breakpoint` is `Compact`.
///
/// Widths that are not finite or negative fall back to `Standard`.
#[must_use]
pub fn resolve_profile(viewport_width_px: f64, breakpoint_px: f64) -> DisplayProfile {
    if !viewport_width_px.is_finite() || viewport_width_px < 0.0 {
        warn!(
            viewport_width_px,
            "viewport width out of range, using standard profile"
        );
        return DisplayProfile::Standard;
    }
    if viewport_width_px < breakpoint_px {
        DisplayProfile::Compact
    } else {
        DisplayProfile::Standard
    }
}

/// Trailing-edge debouncer for viewport width reports.
///
/// Each report replaces the pending width and restarts the quiet period, so
/// a burst of resize events releases only its final width. Time is always
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportDebouncer {
    quiet_period: Duration,
    pending: Option<PendingWidth>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingWidth {
    width_px: f64,
    deadline: Instant,
}

impl ViewportDebouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn report(&mut self, width_px: f64, at: Instant) {
        let deadline = at + self.quiet_period;
        trace!(width_px, "viewport width reported");
        self.pending = Some(PendingWidth { width_px, deadline });
    }

    /// Releases the pending width once `now` reaches its deadline.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.width_px)
            }
            _ => None,
        }
    }

    /// Releases the pending width immediately, ignoring the quiet period.
    pub fn flush(&mut self) -> Option<f64> {
        self.pending.take().map(|pending| pending.width_px)
    }

    #[must_use]
    pub fn pending_width(&self) -> Option<f64> {
        self.pending.map(|pending| pending.width_px)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ViewportDebouncer, resolve_profile};
    use crate::core::DisplayProfile;

    #[test]
    fn breakpoint_is_exclusive_for_compact() {
        assert_eq!(resolve_profile(767.0, 768.0), DisplayProfile::Compact);
        assert_eq!(resolve_profile(768.0, 768.0), DisplayProfile::Standard);
        assert_eq!(resolve_profile(0.0, 768.0), DisplayProfile::Compact);
    }

    #[test]
    fn invalid_widths_fall_back_to_standard() {
        assert_eq!(resolve_profile(f64::NAN, 768.0), DisplayProfile::Standard);
        assert_eq!(resolve_profile(-10.0, 768.0), DisplayProfile::Standard);
        assert_eq!(resolve_profile(f64::INFINITY, 768.0), DisplayProfile::Standard);
    }

    #[test]
    fn burst_of_reports_releases_only_last_width_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = ViewportDebouncer::new(Duration::from_millis(200));

        debouncer.report(1024.0, start);
        debouncer.report(900.0, start + Duration::from_millis(50));
        debouncer.report(640.0, start + Duration::from_millis(120));

        assert_eq!(debouncer.poll(start + Duration::from_millis(250)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(320)),
            Some(640.0)
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn flush_ignores_quiet_period() {
        let mut debouncer = ViewportDebouncer::new(Duration::from_millis(200));
        debouncer.report(500.0, Instant::now());
        assert_eq!(debouncer.pending_width(), Some(500.0));
        assert_eq!(debouncer.flush(), Some(500.0));
        assert_eq!(debouncer.pending_width(), None);
    }
}
