use crate::metrics::ScrollMetrics;
use crate::threshold::ScrollThreshold;

/// Result of evaluating a scroll notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A load request is pending, the notification was not evaluated
    InFlight,
    /// The threshold was reached and more data should be requested
    LoadMore,
    Idle,
}

/// Tracks the threshold crossing and the in-flight guard of load requests.
///
/// At most one load request is pending at a time: once `LoadMore` is returned, further
/// notifications yield `InFlight` until the host reports a new data length.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    previous_data_length: usize,
    action_triggered: bool,
    show_loader: bool,
    last_scroll_top: f64,
}

impl ScrollTracker {
    pub fn new(data_length: usize) -> Self {
        Self {
            previous_data_length: data_length,
            action_triggered: false,
            show_loader: false,
            last_scroll_top: 0.0,
        }
    }

    pub fn on_scroll(
        &mut self,
        metrics: &ScrollMetrics,
        threshold: ScrollThreshold,
        has_more: bool,
    ) -> ScrollOutcome {
        if self.action_triggered {
            return ScrollOutcome::InFlight;
        }

        let outcome = if has_more && threshold.is_reached(metrics) {
            self.action_triggered = true;
            self.show_loader = true;
            ScrollOutcome::LoadMore
        } else {
            ScrollOutcome::Idle
        };
        self.last_scroll_top = metrics.scroll_top;
        outcome
    }

    /// Returns true if the data length changed, in which case a new load request may be made.
    pub fn on_data_length(&mut self, data_length: usize) -> bool {
        if data_length == self.previous_data_length {
            return false;
        }
        self.previous_data_length = data_length;
        self.action_triggered = false;
        self.show_loader = false;
        true
    }

    pub fn is_action_triggered(&self) -> bool {
        self.action_triggered
    }

    pub fn show_loader(&self) -> bool {
        self.show_loader
    }

    /// Whether the last recorded offset is the top of the container
    pub fn is_at_top(&self) -> bool {
        self.last_scroll_top <= 0.0
    }

    pub fn data_length(&self) -> usize {
        self.previous_data_length
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use crate::metrics::ScrollMetrics;
    use crate::scroll::{ScrollOutcome, ScrollTracker};
    use crate::threshold::ScrollThreshold;

    const BOTTOM: ScrollMetrics = ScrollMetrics { scroll_top: 940.0, visible_height: 60.0, scroll_height: 1000.0 };
    const TOP: ScrollMetrics = ScrollMetrics { scroll_top: 0.0, visible_height: 60.0, scroll_height: 1000.0 };

    #[test]
    fn test_scroll_tracker_new() {
        let tracker = ScrollTracker::new(3);
        assert_eq!(tracker.data_length(), 3);
        assert!(!tracker.is_action_triggered());
        assert!(!tracker.show_loader());
        assert!(tracker.is_at_top());
    }

    #[test]
    fn test_scroll_tracker_load_more_once() {
        let mut tracker = ScrollTracker::new(3);
        let threshold = ScrollThreshold::default();

        assert_eq!(tracker.on_scroll(&TOP, threshold, true), ScrollOutcome::Idle);
        assert!(!tracker.show_loader());

        assert_eq!(tracker.on_scroll(&BOTTOM, threshold, true), ScrollOutcome::LoadMore);
        assert!(tracker.is_action_triggered());
        assert!(tracker.show_loader());

        assert_eq!(tracker.on_scroll(&BOTTOM, threshold, true), ScrollOutcome::InFlight);
        let further = ScrollMetrics { scroll_top: 1000.0, ..BOTTOM };
        assert_eq!(tracker.on_scroll(&further, threshold, true), ScrollOutcome::InFlight);
    }

    #[test]
    fn test_scroll_tracker_no_more_data() {
        let mut tracker = ScrollTracker::new(3);
        for _ in 0..3 {
            assert_eq!(tracker.on_scroll(&BOTTOM, ScrollThreshold::Fraction(0.0), false), ScrollOutcome::Idle);
        }
        assert!(!tracker.is_action_triggered());
        assert!(!tracker.show_loader());
    }

    #[test]
    fn test_scroll_tracker_on_data_length() {
        let mut tracker = ScrollTracker::new(3);
        let threshold = ScrollThreshold::default();
        assert_eq!(tracker.on_scroll(&BOTTOM, threshold, true), ScrollOutcome::LoadMore);

        assert!(!tracker.on_data_length(3));
        assert!(tracker.is_action_triggered());
        assert!(tracker.show_loader());

        assert!(tracker.on_data_length(6));
        assert!(!tracker.is_action_triggered());
        assert!(!tracker.show_loader());
        assert_eq!(tracker.data_length(), 6);

        assert_eq!(tracker.on_scroll(&BOTTOM, threshold, true), ScrollOutcome::LoadMore);
    }

    #[test]
    fn test_scroll_tracker_last_scroll_top() {
        let mut tracker = ScrollTracker::new(0);
        let threshold = ScrollThreshold::default();
        let middle = ScrollMetrics { scroll_top: 120.0, ..TOP };

        tracker.on_scroll(&middle, threshold, true);
        assert!(approx_eq!(f64, tracker.last_scroll_top, 120.0, ulps = 2));
        assert!(!tracker.is_at_top());

        tracker.on_scroll(&BOTTOM, threshold, true);
        assert!(approx_eq!(f64, tracker.last_scroll_top, 940.0, ulps = 2));

        // offset is not recorded while a request is pending
        tracker.on_scroll(&TOP, threshold, true);
        assert!(approx_eq!(f64, tracker.last_scroll_top, 940.0, ulps = 2));

        tracker.on_data_length(10);
        tracker.on_scroll(&TOP, threshold, true);
        assert!(tracker.is_at_top());
    }
}
