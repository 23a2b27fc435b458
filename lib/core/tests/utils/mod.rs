#![allow(dead_code)]

use scroll_watcher_core::config::{ScrollContainer, WatcherConfig};
use scroll_watcher_core::metrics::ScrollMetrics;
use scroll_watcher_core::state::{WatcherEffect, WatcherInput, WatcherState};
use scroll_watcher_core::style::GestureStyle;
use scroll_watcher_core::threshold::ScrollThreshold;

pub const BOX_HEIGHT: f64 = 60.0;
pub const CONTENT_HEIGHT: f64 = 600.0;

/// Records the callbacks and styles a component would carry out for each effect
#[derive(Debug, Default)]
pub struct HostRecorder {
    pub next_count: usize,
    pub reload_count: usize,
    pub forwarded_scroll_count: usize,
    pub reset_count: usize,
    pub styles: Vec<GestureStyle>,
}

impl HostRecorder {
    pub fn apply(&mut self, effects: Vec<WatcherEffect>) {
        for effect in effects {
            match effect {
                WatcherEffect::ForwardScroll => self.forwarded_scroll_count += 1,
                WatcherEffect::RequestNext => self.next_count += 1,
                WatcherEffect::Reload => self.reload_count += 1,
                WatcherEffect::Restyle(style) => self.styles.push(style),
                WatcherEffect::ResetPosition => self.reset_count += 1,
            }
        }
    }
}

pub fn create_state(
    data_length: usize,
    threshold: ScrollThreshold,
    pull_down_to_reload: bool,
) -> WatcherState {
    let config = WatcherConfig::builder()
        .data_length(Some(data_length))
        .threshold(threshold)
        .container(ScrollContainer::OwnBox)
        .pull_down_to_reload(pull_down_to_reload)
        .has_reload_function(pull_down_to_reload)
        .build()
        .expect("Should build valid config");
    WatcherState::new(&config)
}

pub fn metrics_at(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics::new(scroll_top, BOX_HEIGHT, CONTENT_HEIGHT)
}

pub fn scroll(
    state: &mut WatcherState,
    host: &mut HostRecorder,
    scroll_top: f64,
    has_more: bool,
) {
    host.apply(state.handle(WatcherInput::ScrollTick { metrics: metrics_at(scroll_top), has_more }));
}

pub fn drag(
    state: &mut WatcherState,
    host: &mut HostRecorder,
    start_y: f64,
    path: &[f64],
) {
    host.apply(state.handle(WatcherInput::GestureStart { page_y: start_y }));
    for page_y in path {
        host.apply(state.handle(WatcherInput::GestureMove { page_y: *page_y }));
    }
    host.apply(state.handle(WatcherInput::GestureEnd));
}
