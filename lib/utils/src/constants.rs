pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.7;
pub const SCROLL_THROTTLE_DELAY: f64 = 120.0;
pub const ON_SCROLL_FORWARD_DELAY: std::time::Duration = std::time::Duration::ZERO;


pub const DEFAULT_PULL_DISTANCE: f64 = 100.0;
pub const MAX_PULL_OVERSHOOT: f64 = 1.5;
pub const PULL_TRANSITION: &str = "transform 0.2s cubic-bezier(0,0,0.32,1)";
pub const PULL_MEASURE_STYLE: &str = "position: absolute; left: 0; right: 0; visibility: hidden; pointer-events: none;";


pub const WRAPPER_CLASS: &str = "auto-loading-scroll-component-wrapper";
pub const SCROLL_BOX_CLASS: &str = "auto-loading-scroll-component";
pub const AUTO_HEIGHT: &str = "auto";
pub const PIXEL_SUFFIX: &str = "px";
