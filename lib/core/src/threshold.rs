use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scroll_watcher_utils::constants::{DEFAULT_SCROLL_THRESHOLD, PIXEL_SUFFIX};
use scroll_watcher_utils::errors::ScrollWatcherError;

use crate::metrics::ScrollMetrics;

/// Position near the end of the content at which more data is requested
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScrollThreshold {
    /// Fraction of the total scrollable height, between 0 and 1
    Fraction(f64),
    /// Distance in pixels from the end of the content
    Pixels(f64),
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        ScrollThreshold::Fraction(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollThreshold {
    /// # Returns the threshold if it is a finite, positive value and fractions do not exceed 1
    ///
    /// ```
    /// use scroll_watcher_core::threshold::ScrollThreshold;
    ///
    /// assert!(ScrollThreshold::Fraction(0.0).validate().is_ok());
    /// assert!(ScrollThreshold::Fraction(1.0).validate().is_ok());
    /// assert!(ScrollThreshold::Fraction(1.2).validate().is_err());
    /// assert!(ScrollThreshold::Pixels(250.0).validate().is_ok());
    /// assert!(ScrollThreshold::Pixels(-1.0).validate().is_err());
    /// assert!(ScrollThreshold::Pixels(f64::NAN).validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self, ScrollWatcherError> {
        match self {
            ScrollThreshold::Fraction(value) if !value.is_finite() || !(0.0..=1.0).contains(&value) => {
                Err(ScrollWatcherError::invalid_threshold(value))
            },
            ScrollThreshold::Pixels(value) if !value.is_finite() || value < 0.0 => {
                Err(ScrollWatcherError::invalid_threshold(format!("{value}{PIXEL_SUFFIX}")))
            },
            _ => Ok(self),
        }
    }

    /// # Returns whether the visible region has reached the threshold
    ///
    /// ```
    /// use scroll_watcher_core::metrics::ScrollMetrics;
    /// use scroll_watcher_core::threshold::ScrollThreshold;
    ///
    /// let metrics = ScrollMetrics::new(150.0, 60.0, 300.0);
    /// assert!(ScrollThreshold::Fraction(0.7).is_reached(&metrics));
    /// assert!(!ScrollThreshold::Fraction(0.8).is_reached(&metrics));
    /// assert!(ScrollThreshold::Pixels(90.0).is_reached(&metrics));
    /// assert!(!ScrollThreshold::Pixels(50.0).is_reached(&metrics));
    /// ```
    pub fn is_reached(&self, metrics: &ScrollMetrics) -> bool {
        match self {
            ScrollThreshold::Fraction(fraction) => metrics.visible_bottom() >= fraction * metrics.scroll_height,
            ScrollThreshold::Pixels(pixels) => metrics.visible_bottom() >= metrics.scroll_height - pixels,
        }
    }
}

impl From<f64> for ScrollThreshold {
    fn from(fraction: f64) -> Self {
        ScrollThreshold::Fraction(fraction)
    }
}

impl FromStr for ScrollThreshold {
    type Err = ScrollWatcherError;

    /// Parses `"0.8"` as a fraction and `"200px"` as a pixel distance.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let threshold = match input.strip_suffix(PIXEL_SUFFIX) {
            Some(pixels) => ScrollThreshold::Pixels(
                pixels.trim().parse::<f64>().map_err(|_| ScrollWatcherError::invalid_threshold(input))?
            ),
            None => ScrollThreshold::Fraction(
                input.parse::<f64>().map_err(|_| ScrollWatcherError::invalid_threshold(input))?
            ),
        };
        threshold.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use scroll_watcher_utils::errors::ScrollWatcherError;

    use crate::metrics::ScrollMetrics;
    use crate::threshold::ScrollThreshold;

    #[test]
    fn test_scroll_threshold_default() {
        assert_eq!(ScrollThreshold::default(), ScrollThreshold::Fraction(0.7));
    }

    #[test]
    fn test_scroll_threshold_is_reached_fraction() {
        let threshold = ScrollThreshold::default();
        // 0.7 * 1000 = 700
        assert!(!threshold.is_reached(&ScrollMetrics::new(0.0, 600.0, 1000.0)));
        assert!(!threshold.is_reached(&ScrollMetrics::new(99.0, 600.0, 1000.0)));
        assert!(threshold.is_reached(&ScrollMetrics::new(100.0, 600.0, 1000.0)));
        assert!(threshold.is_reached(&ScrollMetrics::new(400.0, 600.0, 1000.0)));

        let always = ScrollThreshold::Fraction(0.0);
        assert!(always.is_reached(&ScrollMetrics::new(0.0, 60.0, 60.0)));
        assert!(always.is_reached(&ScrollMetrics::default()));
    }

    #[test]
    fn test_scroll_threshold_is_reached_pixels() {
        let threshold = ScrollThreshold::Pixels(200.0);
        assert!(!threshold.is_reached(&ScrollMetrics::new(100.0, 600.0, 1000.0)));
        assert!(threshold.is_reached(&ScrollMetrics::new(200.0, 600.0, 1000.0)));
        assert!(threshold.is_reached(&ScrollMetrics::new(400.0, 600.0, 1000.0)));
    }

    #[test]
    fn test_scroll_threshold_from_str() {
        assert_eq!(ScrollThreshold::from_str("0.8"), Ok(ScrollThreshold::Fraction(0.8)));
        assert_eq!(ScrollThreshold::from_str(" 1 "), Ok(ScrollThreshold::Fraction(1.0)));
        assert_eq!(ScrollThreshold::from_str("200px"), Ok(ScrollThreshold::Pixels(200.0)));
        assert_eq!(ScrollThreshold::from_str("12.5 px"), Ok(ScrollThreshold::Pixels(12.5)));
        assert_eq!(ScrollThreshold::from_str("abc"), Err(ScrollWatcherError::invalid_threshold("abc")));
        assert_eq!(ScrollThreshold::from_str("px"), Err(ScrollWatcherError::invalid_threshold("px")));
        assert_eq!(ScrollThreshold::from_str("-3px"), Err(ScrollWatcherError::invalid_threshold("-3px")));
        assert_eq!(ScrollThreshold::from_str("1.5"), Err(ScrollWatcherError::invalid_threshold("1.5")));
    }
}
