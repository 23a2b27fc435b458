use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use scroll_watcher_core::config::ScrollContainer;
use scroll_watcher_core::metrics::ScrollMetrics;
use scroll_watcher_core::style::GestureStyle;

/// Element whose scroll events and geometry drive the widget, resolved once mounted
#[derive(Clone, Debug)]
pub enum ScrollTarget {
    Element(HtmlElement),
    Window,
}

impl ScrollTarget {
    /// Resolves `container` against the DOM. An external target that cannot be found falls back to the window.
    pub fn resolve(container: &ScrollContainer, scroll_box: &HtmlElement) -> Self {
        match container {
            ScrollContainer::OwnBox => ScrollTarget::Element(scroll_box.clone()),
            ScrollContainer::Target(id) => match find_html_element(id) {
                Some(element) => ScrollTarget::Element(element),
                None => {
                    log::warn!("No element with id \"{id}\" to use as scrollable target, falling back to the window.");
                    ScrollTarget::Window
                }
            },
            ScrollContainer::Window => ScrollTarget::Window,
        }
    }

    pub fn event_target(&self) -> EventTarget {
        match self {
            ScrollTarget::Element(element) => element.clone().into(),
            ScrollTarget::Window => window().into(),
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        match self {
            ScrollTarget::Element(element) => element_metrics(element),
            ScrollTarget::Window => document_metrics(),
        }
    }

    pub fn scroll_to(&self, offset: f64) {
        match self {
            ScrollTarget::Element(element) => element.scroll_to_with_x_and_y(0.0, offset),
            ScrollTarget::Window => window().scroll_to_with_x_and_y(0.0, offset),
        }
    }
}

pub fn find_html_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn element_metrics(element: &Element) -> ScrollMetrics {
    ScrollMetrics::new(
        f64::from(element.scroll_top()),
        f64::from(element.client_height()),
        f64::from(element.scroll_height()),
    )
}

/// Metrics of the whole page. The visible height is the screen's available height rather than
/// the client height of the document element.
pub fn document_metrics() -> ScrollMetrics {
    let visible_height = window()
        .screen()
        .ok()
        .and_then(|screen| screen.avail_height().ok())
        .map(f64::from)
        .unwrap_or_default();

    match document().scrolling_element() {
        Some(element) => ScrollMetrics {
            visible_height,
            ..element_metrics(&element)
        },
        None => ScrollMetrics::new(0.0, visible_height, 0.0),
    }
}

/// Rendered height of `element`, 0 while it is empty or not laid out
pub fn element_height(element: &Element) -> f64 {
    element.get_bounding_client_rect().height()
}

pub fn mouse_page_y(event: &MouseEvent) -> f64 {
    f64::from(event.page_y())
}

pub fn touch_page_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.page_y()))
}

pub fn apply_gesture_style(element: &HtmlElement, gesture_style: GestureStyle) {
    let style = element.style();
    for (property, value) in gesture_style.declarations() {
        if style.set_property(property, &value).is_err() {
            log::debug!("Browser rejected style {property}: {value}");
        }
    }
}
