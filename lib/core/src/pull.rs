use scroll_watcher_utils::constants::{DEFAULT_PULL_DISTANCE, MAX_PULL_OVERSHOOT};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        start_y: f64,
        current_y: f64,
    },
}

/// Visual consequence of a pointer move during a pull gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PullMove {
    /// No gesture is in progress
    Ignored,
    /// The pointer is above its starting point, the box is left untouched
    Reversed,
    /// The pointer went past the overshoot limit, the box keeps its last position
    Overshoot,
    /// The box should be translated down by this distance
    Translate(f64),
}

/// Outcome of the end of a pull gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PullRelease {
    pub was_dragging: bool,
    pub reload: bool,
}

/// # Returns the distance to pull before releasing reloads
///
/// The height of the release content wins, the pull down content is used when the release content has no height.
/// 0 means nothing could be measured yet.
///
/// ```
/// use scroll_watcher_core::pull::measured_pull_distance;
///
/// assert_eq!(measured_pull_distance(Some(48.0), Some(20.0)), 48.0);
/// assert_eq!(measured_pull_distance(Some(0.0), Some(20.0)), 20.0);
/// assert_eq!(measured_pull_distance(None, None), 0.0);
/// ```
pub fn measured_pull_distance(release_height: Option<f64>, pull_down_height: Option<f64>) -> f64 {
    [release_height, pull_down_height]
        .into_iter()
        .flatten()
        .find(|height| height.is_finite() && *height > 0.0)
        .unwrap_or_default()
}

/// State machine of the pull-down-to-reload gesture: `idle -> dragging -> (breached | idle) -> idle`
///
/// Until a positive content height is measured, the gesture uses [`DEFAULT_PULL_DISTANCE`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PullGesture {
    phase: DragPhase,
    threshold_breached: bool,
    measured_pull_distance: f64,
}

impl PullGesture {
    /// Stores the measured content height, values that are not positive leave the gesture unmeasured.
    pub fn set_max_pull_distance(&mut self, max_pull_distance: f64) {
        self.measured_pull_distance = match max_pull_distance.is_finite() && max_pull_distance > 0.0 {
            true => max_pull_distance,
            false => 0.0,
        };
    }

    pub fn is_measured(&self) -> bool {
        self.measured_pull_distance > 0.0
    }

    /// Starts a gesture at `page_y`, unless the container is scrolled away from its top.
    pub fn begin(&mut self, page_y: f64, is_at_top: bool) -> bool {
        if !is_at_top {
            return false;
        }
        self.phase = DragPhase::Dragging {
            start_y: page_y,
            current_y: page_y,
        };
        true
    }

    pub fn move_to(&mut self, page_y: f64) -> PullMove {
        let max_pull_distance = self.max_pull_distance();
        let DragPhase::Dragging { start_y, current_y } = &mut self.phase else {
            return PullMove::Ignored;
        };
        *current_y = page_y;
        let distance = *current_y - *start_y;

        if distance < 0.0 {
            return PullMove::Reversed;
        }
        if distance > max_pull_distance {
            self.threshold_breached = true;
        }
        if distance > max_pull_distance * MAX_PULL_OVERSHOOT {
            return PullMove::Overshoot;
        }
        PullMove::Translate(distance)
    }

    pub fn end(&mut self) -> PullRelease {
        let was_dragging = self.is_dragging();
        let reload = self.threshold_breached;
        self.phase = DragPhase::Idle;
        self.threshold_breached = false;
        PullRelease { was_dragging, reload }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_threshold_breached(&self) -> bool {
        self.threshold_breached
    }

    /// Distance past which releasing reloads
    pub fn max_pull_distance(&self) -> f64 {
        match self.is_measured() {
            true => self.measured_pull_distance,
            false => DEFAULT_PULL_DISTANCE,
        }
    }

    /// Current downward displacement of the pointer, 0 when idle
    pub fn distance(&self) -> f64 {
        match self.phase {
            DragPhase::Idle => 0.0,
            DragPhase::Dragging { start_y, current_y } => current_y - start_y,
        }
    }
}
