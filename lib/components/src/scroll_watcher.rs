use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_throttle_fn_with_arg_and_options, ThrottleOptions};
use web_sys::HtmlElement;

use scroll_watcher_core::config::{ScrollContainer, WatcherConfig};
use scroll_watcher_core::metrics::BoxHeight;
use scroll_watcher_core::pull::measured_pull_distance;
use scroll_watcher_core::state::{Footer, WatcherEffect, WatcherInput, WatcherState};
use scroll_watcher_core::style::{pull_indicator_style, scroll_box_class, scroll_box_style, GestureStyle};
use scroll_watcher_core::threshold::ScrollThreshold;
use scroll_watcher_utils::constants::{ON_SCROLL_FORWARD_DELAY, PULL_MEASURE_STYLE, SCROLL_THROTTLE_DELAY, WRAPPER_CLASS};
use scroll_watcher_utils::errors::ScrollWatcherError;

use crate::node_utils::{apply_gesture_style, element_height, mouse_page_y, touch_page_y, ScrollTarget};

/// Handles to the host callbacks and DOM nodes needed to carry out the effects of a transition
#[derive(Clone, Copy)]
struct EffectContext {
    state: RwSignal<WatcherState>,
    box_ref: NodeRef<html::Div>,
    release_measure_ref: NodeRef<html::Div>,
    pull_down_measure_ref: NodeRef<html::Div>,
    next: Callback<()>,
    on_scroll: Option<Callback<web_sys::Event>>,
    reload_function: Option<Callback<()>>,
}

impl EffectContext {
    fn is_mounted(&self) -> bool {
        self.state.try_with_untracked(WatcherState::is_mounted).unwrap_or(false)
    }

    /// Measures the hidden pull contents and stores the distance to pull, if one could be measured.
    fn measure_pull_distance(&self) {
        let release_height = self.release_measure_ref.get_untracked().map(|node| element_height(&node));
        let pull_down_height = self.pull_down_measure_ref.get_untracked().map(|node| element_height(&node));
        let distance = measured_pull_distance(release_height, pull_down_height);
        if distance > 0.0 {
            self.state.try_update(|state| state.set_max_pull_distance(distance));
        } else {
            log::debug!("Pull to reload content has no height yet, using the default pull distance.");
        }
    }

    /// Starts a pull gesture, measuring the pull contents first if they had no height at mount.
    fn start_gesture(&self, page_y: f64) {
        if self.state.try_with_untracked(WatcherState::needs_pull_measure).unwrap_or(false) {
            self.measure_pull_distance();
        }
        self.dispatch(WatcherInput::GestureStart { page_y }, None);
    }

    fn dispatch(&self, input: WatcherInput, event: Option<web_sys::Event>) {
        let effects = self.state.try_update(|state| state.handle(input)).unwrap_or_default();
        for effect in effects {
            self.run_effect(effect, event.clone());
        }
    }

    fn run_effect(&self, effect: WatcherEffect, event: Option<web_sys::Event>) {
        match effect {
            WatcherEffect::ForwardScroll => {
                if let (Some(on_scroll), Some(event)) = (self.on_scroll, event) {
                    let context = *self;
                    set_timeout(
                        move || if context.is_mounted() {
                            on_scroll.run(event)
                        },
                        ON_SCROLL_FORWARD_DELAY,
                    );
                }
            },
            WatcherEffect::RequestNext => self.next.run(()),
            WatcherEffect::Reload => if let Some(reload_function) = self.reload_function {
                reload_function.run(())
            },
            WatcherEffect::Restyle(gesture_style) => if let Some(scroll_box) = self.box_ref.get_untracked() {
                apply_gesture_style(&scroll_box, gesture_style);
            },
            WatcherEffect::ResetPosition => {
                let context = *self;
                request_animation_frame(move || {
                    if !context.is_mounted() {
                        return;
                    }
                    if let Some(scroll_box) = context.box_ref.get_untracked() {
                        apply_gesture_style(&scroll_box, GestureStyle::Rest);
                    }
                });
            },
        }
    }
}

/// Attaches the throttled scroll listener and, if enabled, the pull gesture listeners to `target`.
/// Listeners are removed when the owner of the widget is cleaned up.
fn attach_listeners(
    target: ScrollTarget,
    context: EffectContext,
    has_more: Signal<bool>,
    pull_down_to_reload: bool,
) {
    let event_target = target.event_target();
    let throttled_scroll = use_throttle_fn_with_arg_and_options(
        move |event: web_sys::Event| {
            let metrics = target.metrics();
            context.dispatch(WatcherInput::ScrollTick { metrics, has_more: has_more.get_untracked() }, Some(event));
        },
        SCROLL_THROTTLE_DELAY,
        ThrottleOptions::default().leading(true).trailing(false),
    );
    let _ = use_event_listener(event_target.clone(), ev::scroll, move |event| {
        throttled_scroll(event);
    });

    if !pull_down_to_reload {
        return;
    }

    let _ = use_event_listener(event_target.clone(), ev::mousedown, move |event| {
        context.start_gesture(mouse_page_y(&event));
    });
    let _ = use_event_listener(event_target.clone(), ev::touchstart, move |event| {
        if let Some(page_y) = touch_page_y(&event) {
            context.start_gesture(page_y);
        }
    });
    let _ = use_event_listener(event_target.clone(), ev::mousemove, move |event| {
        context.dispatch(WatcherInput::GestureMove { page_y: mouse_page_y(&event) }, None);
    });
    let _ = use_event_listener(event_target.clone(), ev::touchmove, move |event| {
        if let Some(page_y) = touch_page_y(&event) {
            context.dispatch(WatcherInput::GestureMove { page_y }, None);
        }
    });
    let _ = use_event_listener(event_target.clone(), ev::mouseup, move |_| {
        context.dispatch(WatcherInput::GestureEnd, None);
    });
    let _ = use_event_listener(event_target, ev::touchend, move |_| {
        context.dispatch(WatcherInput::GestureEnd, None);
    });
}

/// Scrollable container calling `next` when the user scrolls near the end of its content,
/// with an optional pull down gesture calling `reload_function`.
///
/// The container watched is the widget's own box when `height` is set, else the element with the id
/// `scrollable_target`, else the window. A missing `data_length`, or `pull_down_to_reload` without
/// `reload_function`, is reported as a [`ScrollWatcherError`] to the closest error boundary.
#[component]
pub fn ScrollWatcher(
    /// number of items currently rendered, a change signals that `next` may be called again
    #[prop(optional, into)]
    data_length: Option<Signal<usize>>,
    /// whether more items can be loaded
    #[prop(into)]
    has_more: Signal<bool>,
    /// content displayed while more items are being loaded
    #[prop(into)]
    loader: ViewFn,
    /// called once the scroll threshold is reached
    #[prop(into)]
    next: Callback<()>,
    #[prop(optional)]
    children: Option<Children>,
    /// fixed height making the widget's own box the scroll container
    #[prop(optional, into)]
    height: Option<BoxHeight>,
    /// receives every throttled scroll notification on the next event-loop turn
    #[prop(optional, into)]
    on_scroll: Option<Callback<web_sys::Event>>,
    #[prop(optional, into)]
    scroll_threshold: Option<ScrollThreshold>,
    #[prop(optional)]
    pull_down_to_reload: bool,
    /// content displayed above the items while pulling, its height is the distance to pull when
    /// `release_to_reload_content` has none
    #[prop(optional, into)]
    pull_down_to_reload_content: Option<ViewFn>,
    /// content displayed above the items once pulled far enough, its height is the distance to pull
    #[prop(optional, into)]
    release_to_reload_content: Option<ViewFn>,
    #[prop(optional, into)]
    reload_function: Option<Callback<()>>,
    /// id of the scrollable ancestor to watch when no height is given
    #[prop(optional, into)]
    scrollable_target: Option<String>,
    /// content displayed after the items once `has_more` is false
    #[prop(optional, into)]
    end_message: Option<ViewFn>,
    #[prop(optional)]
    initial_scroll_y: Option<f64>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let config = WatcherConfig::builder()
        .data_length(data_length.map(|data_length| data_length.get_untracked()))
        .threshold(scroll_threshold.unwrap_or_default())
        .container(ScrollContainer::resolve(height.is_some(), scrollable_target.as_deref()))
        .pull_down_to_reload(pull_down_to_reload)
        .has_reload_function(reload_function.is_some())
        .build();
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            log::error!("Cannot mount scroll watcher: {error}");
            return Err::<(), ScrollWatcherError>(error).into_any();
        }
    };

    let state = RwSignal::new(WatcherState::new(&config));
    let show_loader = Memo::new(move |_| state.with(WatcherState::show_loader));
    let is_pull_threshold_breached = Memo::new(move |_| state.with(WatcherState::is_pull_threshold_breached));
    let max_pull_distance = Memo::new(move |_| state.with(WatcherState::max_pull_distance));
    let box_ref = NodeRef::<html::Div>::new();
    let release_measure_ref = NodeRef::<html::Div>::new();
    let pull_down_measure_ref = NodeRef::<html::Div>::new();
    let context = EffectContext {
        state,
        box_ref,
        release_measure_ref,
        pull_down_measure_ref,
        next,
        on_scroll,
        reload_function,
    };

    let container = config.container().clone();
    let is_pull_enabled = config.pull_down_to_reload();
    Effect::new(move || if let Some(scroll_box) = box_ref.get() {
        let scroll_box: HtmlElement = scroll_box.into();
        let target = ScrollTarget::resolve(&container, &scroll_box);
        log::debug!("Scroll watcher mounted on {container}.");

        if is_pull_enabled {
            context.measure_pull_distance();
        }
        if let Some(offset) = initial_scroll_y {
            if target.metrics().can_scroll_to(offset) {
                target.scroll_to(offset);
            }
        }
        attach_listeners(target, context, has_more, is_pull_enabled);
    });

    if let Some(data_length) = data_length {
        Effect::new(move || {
            let data_length = data_length.get();
            context.dispatch(WatcherInput::DataLengthChanged(data_length), None);
        });
    }

    on_cleanup(move || {
        state.try_update(WatcherState::unmount);
    });

    let pull_measure = is_pull_enabled.then(|| view! {
        <div style=PULL_MEASURE_STYLE aria-hidden="true">
            <div node_ref=release_measure_ref>{release_to_reload_content.as_ref().map(ViewFn::run)}</div>
            <div node_ref=pull_down_measure_ref>{pull_down_to_reload_content.as_ref().map(ViewFn::run)}</div>
        </div>
    });
    let pull_indicator = is_pull_enabled.then(|| view! {
        <div style="position: relative">
            {pull_measure}
            <div style=move || pull_indicator_style(max_pull_distance.get())>
            {
                move || match is_pull_threshold_breached.get() {
                    true => release_to_reload_content.as_ref().map(ViewFn::run),
                    false => pull_down_to_reload_content.as_ref().map(ViewFn::run),
                }
            }
            </div>
        </div>
    });

    let has_children = children.is_some();
    let footer = move || match Footer::select(show_loader.get(), has_more.get(), has_children) {
        Footer::Loader => Some(loader.run()),
        Footer::EndMessage => end_message.as_ref().map(ViewFn::run),
        Footer::Empty => None,
    };

    view! {
        <div class=WRAPPER_CLASS>
            <div
                class=scroll_box_class(class)
                style=scroll_box_style(height.as_ref())
                node_ref=box_ref
            >
                {pull_indicator}
                {children.map(|children| children())}
                {footer}
            </div>
        </div>
    }.into_any()
}
