use strum_macros::Display;

use scroll_watcher_utils::errors::ScrollWatcherError;

use crate::threshold::ScrollThreshold;

/// Element whose scroll position is watched
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum ScrollContainer {
    /// The widget's own box, used when a height is given
    OwnBox,
    /// An external scrollable ancestor identified by its element id
    Target(String),
    Window,
}

impl ScrollContainer {
    /// # Returns the container to watch: own box if a height is set, else the external target, else the window
    ///
    /// ```
    /// use scroll_watcher_core::config::ScrollContainer;
    ///
    /// assert_eq!(ScrollContainer::resolve(true, Some("feed")), ScrollContainer::OwnBox);
    /// assert_eq!(ScrollContainer::resolve(false, Some("feed")), ScrollContainer::Target(String::from("feed")));
    /// assert_eq!(ScrollContainer::resolve(false, None), ScrollContainer::Window);
    /// ```
    pub fn resolve(has_height: bool, scrollable_target: Option<&str>) -> Self {
        match (has_height, scrollable_target) {
            (true, _) => ScrollContainer::OwnBox,
            (false, Some(id)) if !id.is_empty() => ScrollContainer::Target(id.to_string()),
            _ => ScrollContainer::Window,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WatcherConfig {
    data_length: usize,
    threshold: ScrollThreshold,
    container: ScrollContainer,
    pull_down_to_reload: bool,
}

impl WatcherConfig {
    pub fn builder() -> WatcherConfigBuilder {
        WatcherConfigBuilder::default()
    }

    pub fn data_length(&self) -> usize {
        self.data_length
    }

    pub fn threshold(&self) -> ScrollThreshold {
        self.threshold
    }

    pub fn container(&self) -> &ScrollContainer {
        &self.container
    }

    pub fn pull_down_to_reload(&self) -> bool {
        self.pull_down_to_reload
    }
}

/// Collects the widget's configuration, validated once when mounting
#[derive(Clone, Debug, Default)]
pub struct WatcherConfigBuilder {
    data_length: Option<usize>,
    threshold: Option<ScrollThreshold>,
    container: Option<ScrollContainer>,
    pull_down_to_reload: bool,
    has_reload_function: bool,
}

impl WatcherConfigBuilder {
    pub fn data_length(mut self, data_length: Option<usize>) -> Self {
        self.data_length = data_length;
        self
    }

    pub fn threshold(mut self, threshold: ScrollThreshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn container(mut self, container: ScrollContainer) -> Self {
        self.container = Some(container);
        self
    }

    pub fn pull_down_to_reload(mut self, pull_down_to_reload: bool) -> Self {
        self.pull_down_to_reload = pull_down_to_reload;
        self
    }

    pub fn has_reload_function(mut self, has_reload_function: bool) -> Self {
        self.has_reload_function = has_reload_function;
        self
    }

    /// # Validates the configuration
    ///
    /// ```
    /// use scroll_watcher_core::config::WatcherConfig;
    /// use scroll_watcher_utils::errors::ScrollWatcherError;
    ///
    /// assert_eq!(WatcherConfig::builder().build(), Err(ScrollWatcherError::MissingDataLength));
    /// assert_eq!(
    ///     WatcherConfig::builder().data_length(Some(3)).pull_down_to_reload(true).build(),
    ///     Err(ScrollWatcherError::MissingReloadFunction)
    /// );
    /// assert!(WatcherConfig::builder().data_length(Some(3)).build().is_ok());
    /// ```
    pub fn build(self) -> Result<WatcherConfig, ScrollWatcherError> {
        let data_length = self.data_length.ok_or(ScrollWatcherError::MissingDataLength)?;
        let threshold = self.threshold.unwrap_or_default().validate()?;
        if self.pull_down_to_reload && !self.has_reload_function {
            return Err(ScrollWatcherError::MissingReloadFunction);
        }
        Ok(WatcherConfig {
            data_length,
            threshold,
            container: self.container.unwrap_or(ScrollContainer::Window),
            pull_down_to_reload: self.pull_down_to_reload,
        })
    }
}
