use crate::config::WatcherConfig;
use crate::metrics::ScrollMetrics;
use crate::pull::{PullGesture, PullMove, PullRelease};
use crate::scroll::{ScrollOutcome, ScrollTracker};
use crate::style::GestureStyle;
use crate::threshold::ScrollThreshold;

/// Discrete inputs driving the widget, translated from DOM events by the component
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WatcherInput {
    ScrollTick {
        metrics: ScrollMetrics,
        has_more: bool,
    },
    GestureStart {
        page_y: f64,
    },
    GestureMove {
        page_y: f64,
    },
    GestureEnd,
    DataLengthChanged(usize),
}

/// Side effects requested by a transition, to be carried out by the component
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WatcherEffect {
    /// Forward the raw scroll notification to the host on the next event-loop turn
    ForwardScroll,
    /// Invoke the host's `next` callback
    RequestNext,
    /// Invoke the host's reload callback
    Reload,
    /// Apply a style to the scroll box immediately
    Restyle(GestureStyle),
    /// Restore the scroll box on the next animation frame
    ResetPosition,
}

/// Content appended after the children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footer {
    Loader,
    EndMessage,
    Empty,
}

impl Footer {
    /// # Returns which content follows the children
    ///
    /// The loader is shown while a load is pending, or right away when there are no children yet.
    ///
    /// ```
    /// use scroll_watcher_core::state::Footer;
    ///
    /// assert_eq!(Footer::select(true, true, true), Footer::Loader);
    /// assert_eq!(Footer::select(false, true, false), Footer::Loader);
    /// assert_eq!(Footer::select(false, true, true), Footer::Empty);
    /// assert_eq!(Footer::select(true, false, true), Footer::EndMessage);
    /// ```
    pub fn select(show_loader: bool, has_more: bool, has_children: bool) -> Self {
        match (has_more, show_loader || !has_children) {
            (true, true) => Footer::Loader,
            (true, false) => Footer::Empty,
            (false, _) => Footer::EndMessage,
        }
    }
}

/// State of a mounted widget, composed of the scroll tracker and the optional pull gesture
#[derive(Clone, Debug, PartialEq)]
pub struct WatcherState {
    scroll: ScrollTracker,
    pull: Option<PullGesture>,
    threshold: ScrollThreshold,
    mounted: bool,
}

impl WatcherState {
    pub fn new(config: &WatcherConfig) -> Self {
        Self {
            scroll: ScrollTracker::new(config.data_length()),
            pull: config.pull_down_to_reload().then(PullGesture::default),
            threshold: config.threshold(),
            mounted: true,
        }
    }

    pub fn handle(&mut self, input: WatcherInput) -> Vec<WatcherEffect> {
        if !self.mounted {
            return Vec::new();
        }
        match input {
            WatcherInput::ScrollTick { metrics, has_more } => self.on_scroll_tick(&metrics, has_more),
            WatcherInput::GestureStart { page_y } => self.on_gesture_start(page_y),
            WatcherInput::GestureMove { page_y } => self.on_gesture_move(page_y),
            WatcherInput::GestureEnd => self.on_gesture_end(),
            WatcherInput::DataLengthChanged(data_length) => {
                if self.scroll.on_data_length(data_length) {
                    log::debug!("Data length changed to {data_length}, load requests re-enabled.");
                }
                Vec::new()
            },
        }
    }

    fn on_scroll_tick(&mut self, metrics: &ScrollMetrics, has_more: bool) -> Vec<WatcherEffect> {
        let mut effects = vec![WatcherEffect::ForwardScroll];
        if self.scroll.on_scroll(metrics, self.threshold, has_more) == ScrollOutcome::LoadMore {
            log::debug!("Scroll threshold reached at offset {}, requesting more data.", metrics.scroll_top);
            effects.push(WatcherEffect::RequestNext);
        }
        effects
    }

    fn on_gesture_start(&mut self, page_y: f64) -> Vec<WatcherEffect> {
        let is_at_top = self.scroll.is_at_top();
        let has_begun = self.pull.as_mut().is_some_and(|pull| pull.begin(page_y, is_at_top));
        match has_begun {
            true => vec![WatcherEffect::Restyle(GestureStyle::Prepare)],
            false => Vec::new(),
        }
    }

    fn on_gesture_move(&mut self, page_y: f64) -> Vec<WatcherEffect> {
        match self.pull.as_mut().map(|pull| pull.move_to(page_y)) {
            Some(PullMove::Translate(distance)) => vec![WatcherEffect::Restyle(GestureStyle::Translate(distance))],
            _ => Vec::new(),
        }
    }

    fn on_gesture_end(&mut self) -> Vec<WatcherEffect> {
        let Some(pull) = &mut self.pull else {
            return Vec::new();
        };
        match pull.end() {
            PullRelease { was_dragging: false, .. } => Vec::new(),
            PullRelease { reload: true, .. } => {
                log::debug!("Pull to reload released past its threshold.");
                vec![WatcherEffect::Reload, WatcherEffect::ResetPosition]
            },
            PullRelease { reload: false, .. } => vec![WatcherEffect::ResetPosition],
        }
    }

    /// Stops reacting to inputs, deferred work must check `is_mounted` before acting.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_max_pull_distance(&mut self, max_pull_distance: f64) {
        if let Some(pull) = &mut self.pull {
            pull.set_max_pull_distance(max_pull_distance);
        }
    }

    /// Distance past which releasing the pull gesture reloads, 0 when pull to reload is disabled
    pub fn max_pull_distance(&self) -> f64 {
        self.pull.as_ref().map(PullGesture::max_pull_distance).unwrap_or_default()
    }

    /// Whether the pull gesture still needs its content height, always false when pull to reload is disabled
    pub fn needs_pull_measure(&self) -> bool {
        self.pull.as_ref().is_some_and(|pull| !pull.is_measured())
    }

    pub fn show_loader(&self) -> bool {
        self.scroll.show_loader()
    }

    pub fn is_pull_threshold_breached(&self) -> bool {
        self.pull.as_ref().is_some_and(PullGesture::is_threshold_breached)
    }

    pub fn is_dragging(&self) -> bool {
        self.pull.as_ref().is_some_and(PullGesture::is_dragging)
    }

    pub fn is_action_triggered(&self) -> bool {
        self.scroll.is_action_triggered()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WatcherConfig;
    use crate::metrics::ScrollMetrics;
    use crate::state::{WatcherEffect, WatcherInput, WatcherState};
    use crate::style::GestureStyle;

    fn pull_config() -> WatcherConfig {
        WatcherConfig::builder()
            .data_length(Some(3))
            .pull_down_to_reload(true)
            .has_reload_function(true)
            .build()
            .expect("Config should be valid")
    }

    #[test]
    fn test_watcher_state_new() {
        let state = WatcherState::new(&pull_config());
        assert!(state.is_mounted());
        assert!(state.pull.is_some());
        assert!(state.needs_pull_measure());
        assert!(!state.show_loader());
        assert!(!state.is_pull_threshold_breached());

        let config = WatcherConfig::builder().data_length(Some(3)).build().expect("Config should be valid");
        let state = WatcherState::new(&config);
        assert!(state.pull.is_none());
        assert!(!state.needs_pull_measure());
        assert_eq!(state.scroll.data_length(), 3);
        assert_eq!(state.max_pull_distance(), 0.0);
    }

    #[test]
    fn test_watcher_state_gesture_ignored_without_pull() {
        let config = WatcherConfig::builder().data_length(Some(3)).build().expect("Config should be valid");
        let mut state = WatcherState::new(&config);
        assert!(state.handle(WatcherInput::GestureStart { page_y: 0.0 }).is_empty());
        assert!(state.handle(WatcherInput::GestureMove { page_y: 400.0 }).is_empty());
        assert!(state.handle(WatcherInput::GestureEnd).is_empty());
        assert!(!state.is_pull_threshold_breached());
    }

    #[test]
    fn test_watcher_state_gesture_suppressed_when_scrolled() {
        let mut state = WatcherState::new(&pull_config());
        state.handle(WatcherInput::ScrollTick {
            metrics: ScrollMetrics::new(30.0, 60.0, 1000.0),
            has_more: true,
        });
        assert!(state.handle(WatcherInput::GestureStart { page_y: 0.0 }).is_empty());
        assert!(!state.is_dragging());
        assert!(state.handle(WatcherInput::GestureMove { page_y: 100.0 }).is_empty());
    }

    #[test]
    fn test_watcher_state_gesture_effects() {
        let mut state = WatcherState::new(&pull_config());
        state.set_max_pull_distance(20.0);
        assert!(!state.needs_pull_measure());

        assert_eq!(
            state.handle(WatcherInput::GestureStart { page_y: 10.0 }),
            vec![WatcherEffect::Restyle(GestureStyle::Prepare)]
        );
        assert_eq!(
            state.handle(WatcherInput::GestureMove { page_y: 25.0 }),
            vec![WatcherEffect::Restyle(GestureStyle::Translate(15.0))]
        );
        assert!(state.handle(WatcherInput::GestureMove { page_y: 0.0 }).is_empty());
        assert_eq!(
            state.handle(WatcherInput::GestureMove { page_y: 35.0 }),
            vec![WatcherEffect::Restyle(GestureStyle::Translate(25.0))]
        );
        assert!(state.is_pull_threshold_breached());
        assert_eq!(
            state.handle(WatcherInput::GestureEnd),
            vec![WatcherEffect::Reload, WatcherEffect::ResetPosition]
        );
        assert!(!state.is_pull_threshold_breached());
        // releasing without a drag leaves the box untouched
        assert!(state.handle(WatcherInput::GestureEnd).is_empty());

        state.handle(WatcherInput::GestureStart { page_y: 10.0 });
        assert_eq!(state.handle(WatcherInput::GestureEnd), vec![WatcherEffect::ResetPosition]);
    }

    #[test]
    fn test_watcher_state_unmount() {
        let mut state = WatcherState::new(&pull_config());
        state.unmount();
        let snapshot = state.clone();

        assert!(state.handle(WatcherInput::ScrollTick { metrics: ScrollMetrics::default(), has_more: true }).is_empty());
        assert!(state.handle(WatcherInput::GestureStart { page_y: 0.0 }).is_empty());
        assert!(state.handle(WatcherInput::DataLengthChanged(10)).is_empty());
        assert_eq!(state, snapshot);
    }
}
