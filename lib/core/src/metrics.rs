use serde::{Deserialize, Serialize};

use scroll_watcher_utils::constants::{AUTO_HEIGHT, PIXEL_SUFFIX};

/// Snapshot of the scroll geometry of the container being watched
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    /// Height of the visible region. For whole-page scrolling this is the screen's available height.
    pub visible_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, visible_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            visible_height,
            scroll_height,
        }
    }

    /// # Returns the offset of the lowest visible pixel
    ///
    /// ```
    /// use scroll_watcher_core::metrics::ScrollMetrics;
    ///
    /// assert_eq!(ScrollMetrics::new(40.0, 60.0, 300.0).visible_bottom(), 100.0);
    /// ```
    pub fn visible_bottom(&self) -> f64 {
        self.scroll_top + self.visible_height
    }

    /// # Returns whether the content is tall enough to scroll to `offset`
    ///
    /// ```
    /// use scroll_watcher_core::metrics::ScrollMetrics;
    ///
    /// let metrics = ScrollMetrics::new(0.0, 60.0, 300.0);
    /// assert!(metrics.can_scroll_to(120.0));
    /// assert!(!metrics.can_scroll_to(300.0));
    /// ```
    pub fn can_scroll_to(&self, offset: f64) -> bool {
        self.scroll_height > offset
    }
}

/// Height of the scroll box, either in pixels or as a raw css length
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoxHeight {
    Pixels(f64),
    Css(String),
}

impl BoxHeight {
    /// # Returns the css value of the height
    ///
    /// ```
    /// use scroll_watcher_core::metrics::BoxHeight;
    ///
    /// assert_eq!(BoxHeight::from(60).to_css(), "60px");
    /// assert_eq!(BoxHeight::from("50vh").to_css(), "50vh");
    /// assert_eq!(BoxHeight::from("").to_css(), "auto");
    /// ```
    pub fn to_css(&self) -> String {
        match self {
            BoxHeight::Pixels(pixels) => format!("{pixels}{PIXEL_SUFFIX}"),
            BoxHeight::Css(css) if css.trim().is_empty() => String::from(AUTO_HEIGHT),
            BoxHeight::Css(css) => css.trim().to_string(),
        }
    }
}

impl From<f64> for BoxHeight {
    fn from(pixels: f64) -> Self {
        BoxHeight::Pixels(pixels)
    }
}

impl From<i32> for BoxHeight {
    fn from(pixels: i32) -> Self {
        BoxHeight::Pixels(f64::from(pixels))
    }
}

impl From<u32> for BoxHeight {
    fn from(pixels: u32) -> Self {
        BoxHeight::Pixels(f64::from(pixels))
    }
}

impl From<&str> for BoxHeight {
    fn from(css: &str) -> Self {
        BoxHeight::Css(css.to_string())
    }
}

impl From<String> for BoxHeight {
    fn from(css: String) -> Self {
        BoxHeight::Css(css)
    }
}

#[cfg(test)]
mod tests {
    use crate::metrics::BoxHeight;

    #[test]
    fn test_box_height_to_css() {
        assert_eq!(BoxHeight::from(60).to_css(), "60px");
        assert_eq!(BoxHeight::from(12.5).to_css(), "12.5px");
        assert_eq!(BoxHeight::from(400u32).to_css(), "400px");
        assert_eq!(BoxHeight::from(" 80% ").to_css(), "80%");
        assert_eq!(BoxHeight::from(String::from("   ")).to_css(), "auto");
    }
}
