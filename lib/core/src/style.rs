use scroll_watcher_utils::constants::{AUTO_HEIGHT, PULL_TRANSITION, SCROLL_BOX_CLASS};

use crate::metrics::BoxHeight;

/// Inline style changes applied to the scroll box during a pull gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureStyle {
    /// Prepares the box for a transform when the gesture starts
    Prepare,
    /// Moves the box down by the given distance
    Translate(f64),
    /// Restores the box once the gesture ends
    Rest,
}

impl GestureStyle {
    /// # Returns the css properties to set on the scroll box
    ///
    /// ```
    /// use scroll_watcher_core::style::GestureStyle;
    ///
    /// assert_eq!(
    ///     GestureStyle::Translate(24.0).declarations(),
    ///     vec![("overflow", String::from("visible")), ("transform", String::from("translate3d(0px, 24px, 0px)"))]
    /// );
    /// ```
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match self {
            GestureStyle::Prepare => vec![
                ("will-change", String::from("transform")),
                ("transition", String::from(PULL_TRANSITION)),
            ],
            GestureStyle::Translate(distance) => vec![
                ("overflow", String::from("visible")),
                ("transform", format!("translate3d(0px, {distance}px, 0px)")),
            ],
            GestureStyle::Rest => vec![
                ("overflow", String::from("auto")),
                ("transform", String::from("none")),
                ("will-change", String::from("unset")),
            ],
        }
    }
}

pub fn scroll_box_style(height: Option<&BoxHeight>) -> String {
    let height = height.map(BoxHeight::to_css).unwrap_or_else(|| String::from(AUTO_HEIGHT));
    format!("height: {height}; overflow: auto; -webkit-overflow-scrolling: touch;")
}

/// # Returns the class of the scroll box with the host's additional classes
///
/// ```
/// use scroll_watcher_core::style::scroll_box_class;
///
/// assert_eq!(scroll_box_class(""), "auto-loading-scroll-component");
/// assert_eq!(scroll_box_class("feed"), "auto-loading-scroll-component feed");
/// ```
pub fn scroll_box_class(class: &str) -> String {
    match class.trim() {
        "" => String::from(SCROLL_BOX_CLASS),
        class => format!("{SCROLL_BOX_CLASS} {class}"),
    }
}

/// Style of the pull indicator, placed right above the scroll box content
pub fn pull_indicator_style(max_pull_distance: f64) -> String {
    format!("position: absolute; left: 0; right: 0; top: -{max_pull_distance}px;")
}
