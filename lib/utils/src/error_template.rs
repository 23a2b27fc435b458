use leptos::prelude::*;

use crate::errors::{ErrorDisplay, ScrollWatcherError};

/// Displays the scroll watcher errors caught by an error boundary
#[component]
pub fn ErrorTemplate(
    errors: ArcRwSignal<Errors>,
) -> impl IntoView {
    let errors = errors.get_untracked();

    log::debug!("Error template: got errors: {errors:?}");
    // errors thrown by other components of the host are not ours to display
    let errors: Vec<ScrollWatcherError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<ScrollWatcherError>().cloned())
        .collect();

    view! {
        <div class="w-full h-full flex flex-col items-center justify-center">
            <For
                each= move || {errors.clone().into_iter().enumerate()}
                key=|(index, _error)| *index
                children=move |(_, error)| {
                    view! { <ErrorDisplay error/> }
                }
            />
        </div>
    }
}
