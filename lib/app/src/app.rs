use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::StaticSegment;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use scroll_watcher_components::scroll_watcher::ScrollWatcher;
use scroll_watcher_core::threshold::ScrollThreshold;
use scroll_watcher_utils::error_template::ErrorTemplate;
use scroll_watcher_utils::icons::{ArrowDownIcon, LoadingIcon, RefreshIcon};

use crate::feed::{Feed, FeedItem};

pub const WINDOW_ROUTE: &str = "window";
pub const TARGET_ROUTE: &str = "target";
pub const MISCONFIGURED_ROUTE: &str = "misconfigured";
pub const SCROLLABLE_TARGET_ID: &str = "scrollable-feed";

/// Pages of the demo, listed in the navigation bar
#[derive(Clone, Copy, Debug, EnumIter, IntoStaticStr, PartialEq, Eq)]
pub enum DemoPage {
    #[strum(serialize = "Fixed height")]
    FixedHeight,
    #[strum(serialize = "Window")]
    Window,
    #[strum(serialize = "Scrollable target")]
    ScrollableTarget,
    #[strum(serialize = "Misconfigured")]
    Misconfigured,
}

impl DemoPage {
    pub fn path(self) -> String {
        match self {
            DemoPage::FixedHeight => String::from("/"),
            DemoPage::Window => format!("/{WINDOW_ROUTE}"),
            DemoPage::ScrollableTarget => format!("/{TARGET_ROUTE}"),
            DemoPage::Misconfigured => format!("/{MISCONFIGURED_ROUTE}"),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Scroll watcher"/>
        <Router>
            <main class="flex flex-col h-screen">
                <NavigationBar/>
                <ErrorBoundary fallback=|errors| { view! { <ErrorTemplate errors/> } }>
                    <Routes fallback=|| "Page not found.">
                        <Route path=StaticSegment("") view=FixedHeightFeed/>
                        <Route path=StaticSegment(WINDOW_ROUTE) view=WindowFeed/>
                        <Route path=StaticSegment(TARGET_ROUTE) view=TargetFeed/>
                        <Route path=StaticSegment(MISCONFIGURED_ROUTE) view=MisconfiguredFeed/>
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}

#[component]
fn NavigationBar() -> impl IntoView {
    view! {
        <nav class="flex gap-4 p-2">
        {
            DemoPage::iter().map(|page| {
                let label: &'static str = page.into();
                view! { <A href=page.path()>{label}</A> }
            }).collect_view()
        }
        </nav>
    }
}

#[component]
fn FeedItemList(feed: Feed) -> impl IntoView {
    view! {
        <For
            each=move || feed.items.get()
            key=|item| item.id
            children=move |item: FeedItem| view! {
                <div class="p-4 border-b">{item.title}</div>
            }
        />
    }
}

#[component]
fn EndOfFeed() -> impl IntoView {
    view! {
        <p class="text-center p-2">"You have seen it all."</p>
    }
}

/// Feed in a box of fixed height, with pull down to reload
#[component]
fn FixedHeightFeed() -> impl IntoView {
    let feed = Feed::new();

    view! {
        <p class="p-2">"Reloaded " {move || feed.reload_count.get()} " time(s)."</p>
        <ScrollWatcher
            data_length=feed.data_length
            has_more=feed.has_more
            loader=|| view! { <LoadingIcon/> }
            next=move |_| feed.fetch_more()
            height=400
            pull_down_to_reload=true
            pull_down_to_reload_content=|| view! { <ArrowDownIcon/> }
            release_to_reload_content=|| view! { <RefreshIcon/> }
            reload_function=move |_| feed.reload()
            end_message=|| view! { <EndOfFeed/> }
        >
            <FeedItemList feed/>
        </ScrollWatcher>
    }
}

/// Feed scrolling with the window, loading when 200px away from the end
#[component]
fn WindowFeed() -> impl IntoView {
    let feed = Feed::new();

    view! {
        <ScrollWatcher
            data_length=feed.data_length
            has_more=feed.has_more
            loader=|| view! { <LoadingIcon/> }
            next=move |_| feed.fetch_more()
            scroll_threshold=ScrollThreshold::Pixels(200.0)
            on_scroll=move |_| log::debug!("Window scrolled.")
            end_message=|| view! { <EndOfFeed/> }
        >
            <FeedItemList feed/>
        </ScrollWatcher>
    }
}

/// Feed placed in a scrollable ancestor designated by its id
#[component]
fn TargetFeed() -> impl IntoView {
    let feed = Feed::new();

    view! {
        <div id=SCROLLABLE_TARGET_ID class="h-96 overflow-auto border">
            <ScrollWatcher
                data_length=feed.data_length
                has_more=feed.has_more
                loader=|| view! { <LoadingIcon/> }
                next=move |_| feed.fetch_more()
                scrollable_target=SCROLLABLE_TARGET_ID
                scroll_threshold=0.9
                class="target-feed"
            >
                <FeedItemList feed/>
            </ScrollWatcher>
        </div>
    }
}

/// Feed without data length, rendering the configuration error
#[component]
fn MisconfiguredFeed() -> impl IntoView {
    let feed = Feed::new();

    view! {
        <ScrollWatcher
            has_more=feed.has_more
            loader=|| view! { <LoadingIcon/> }
            next=move |_| feed.fetch_more()
        >
            <FeedItemList feed/>
        </ScrollWatcher>
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::app::DemoPage;

    #[test]
    fn test_demo_page_path() {
        assert_eq!(DemoPage::FixedHeight.path(), "/");
        assert_eq!(DemoPage::Window.path(), "/window");
        assert_eq!(DemoPage::ScrollableTarget.path(), "/target");
        assert_eq!(DemoPage::Misconfigured.path(), "/misconfigured");
    }

    #[test]
    fn test_demo_page_label() {
        let labels: Vec<&'static str> = DemoPage::iter().map(<&'static str>::from).collect();
        assert_eq!(labels, vec!["Fixed height", "Window", "Scrollable target", "Misconfigured"]);
    }
}
