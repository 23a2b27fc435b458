use leptos::prelude::*;
use leptos::{component, view, IntoView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::ConfigErrorIcon;

const MISSING_DATA_LENGTH_MESSAGE: &str = "Missing \"data_length\" prop: the number of rendered items is required.";
const MISSING_RELOAD_FUNCTION_MESSAGE: &str = "Missing \"reload_function\" prop: it is required when \"pull_down_to_reload\" is enabled.";
const INVALID_SCROLL_THRESHOLD_MESSAGE: &str = "Invalid \"scroll_threshold\" prop";
const CONFIGURATION_ERROR_TITLE: &str = "Scroll container misconfigured";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollWatcherError {
    #[error("{}", MISSING_DATA_LENGTH_MESSAGE)]
    MissingDataLength,
    #[error("{}", MISSING_RELOAD_FUNCTION_MESSAGE)]
    MissingReloadFunction,
    #[error("{}: {}", INVALID_SCROLL_THRESHOLD_MESSAGE, .0)]
    InvalidScrollThreshold(String),
}

impl ScrollWatcherError {
    pub fn user_message(&self) -> String {
        match self {
            ScrollWatcherError::MissingDataLength => String::from(MISSING_DATA_LENGTH_MESSAGE),
            ScrollWatcherError::MissingReloadFunction => String::from(MISSING_RELOAD_FUNCTION_MESSAGE),
            ScrollWatcherError::InvalidScrollThreshold(_) => format!("{INVALID_SCROLL_THRESHOLD_MESSAGE}."),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            ScrollWatcherError::InvalidScrollThreshold(value) => value.clone(),
            _ => self.user_message(),
        }
    }

    /// Constructs a new [`ScrollWatcherError::InvalidScrollThreshold`] from the offending input.
    pub fn invalid_threshold(value: impl ToString) -> Self {
        Self::InvalidScrollThreshold(value.to_string())
    }
}

/// Displays a configuration error caught by the host's error boundary
#[component]
pub fn ErrorDisplay(
    error: ScrollWatcherError
) -> impl IntoView {
    let user_message = error.user_message();
    let error_detail = error.error_detail();

    log::error!("Caught scroll watcher error: {error}");
    view! {
        <div class="w-full flex items-center gap-2 justify-center">
            <ConfigErrorIcon/>
            <div class="flex flex-col">
                <h2 class="text-2xl">{CONFIGURATION_ERROR_TITLE}</h2>
                <h3 class="text-xl">{user_message}</h3>
                <p class="text-sm">{error_detail}</p>
            </div>
        </div>
    }.into_any()
}
