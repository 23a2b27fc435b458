use std::time::Duration;

use leptos::prelude::*;

pub const PAGE_SIZE: usize = 20;
pub const MAX_ITEMS: usize = 100;
pub const FETCH_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub id: usize,
    pub title: String,
}

/// # Returns up to `count` items starting at index `start`, never going past [`MAX_ITEMS`]
///
/// ```
/// use scroll_watcher_app::feed::{generate_items, MAX_ITEMS};
///
/// assert_eq!(generate_items(0, 3).len(), 3);
/// assert_eq!(generate_items(MAX_ITEMS - 1, 3).len(), 1);
/// assert!(generate_items(MAX_ITEMS, 3).is_empty());
/// ```
pub fn generate_items(start: usize, count: usize) -> Vec<FeedItem> {
    let end = start.saturating_add(count).min(MAX_ITEMS);
    (start..end)
        .map(|id| FeedItem {
            id,
            title: format!("Item #{}", id + 1),
        })
        .collect()
}

pub fn has_more_items(item_count: usize) -> bool {
    item_count < MAX_ITEMS
}

/// Locally generated list of items, filled page by page after a simulated latency
#[derive(Clone, Copy, Debug)]
pub struct Feed {
    pub items: RwSignal<Vec<FeedItem>>,
    pub data_length: Memo<usize>,
    pub has_more: Memo<bool>,
    pub reload_count: RwSignal<usize>,
}

impl Feed {
    pub fn new() -> Self {
        let items = RwSignal::new(generate_items(0, PAGE_SIZE));
        Self {
            items,
            data_length: Memo::new(move |_| items.with(Vec::len)),
            has_more: Memo::new(move |_| items.with(|items| has_more_items(items.len()))),
            reload_count: RwSignal::new(0),
        }
    }

    pub fn fetch_more(&self) {
        let items = self.items;
        log::info!("Fetching more items.");
        set_timeout(
            move || {
                items.try_update(|items| {
                    let next_page = generate_items(items.len(), PAGE_SIZE);
                    items.extend(next_page);
                });
            },
            FETCH_DELAY,
        );
    }

    pub fn reload(&self) {
        let items = self.items;
        let reload_count = self.reload_count;
        log::info!("Reloading items.");
        set_timeout(
            move || {
                items.try_set(generate_items(0, PAGE_SIZE));
                reload_count.try_update(|count| *count += 1);
            },
            FETCH_DELAY,
        );
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    use crate::feed::{generate_items, has_more_items, Feed, FeedItem, MAX_ITEMS, PAGE_SIZE};

    #[test]
    fn test_generate_items() {
        let items = generate_items(0, PAGE_SIZE);
        assert_eq!(items.len(), PAGE_SIZE);
        assert_eq!(items[0], FeedItem { id: 0, title: String::from("Item #1") });
        assert_eq!(items[PAGE_SIZE - 1].id, PAGE_SIZE - 1);

        let items = generate_items(PAGE_SIZE, PAGE_SIZE);
        assert_eq!(items[0].id, PAGE_SIZE);
        assert_eq!(items[0].title, format!("Item #{}", PAGE_SIZE + 1));
    }

    #[test]
    fn test_generate_items_capped() {
        assert_eq!(generate_items(MAX_ITEMS - 5, PAGE_SIZE).len(), 5);
        assert!(generate_items(MAX_ITEMS + 5, PAGE_SIZE).is_empty());
        assert_eq!(generate_items(usize::MAX, PAGE_SIZE), Vec::new());
    }

    #[test]
    fn test_has_more_items() {
        assert!(has_more_items(0));
        assert!(has_more_items(MAX_ITEMS - 1));
        assert!(!has_more_items(MAX_ITEMS));
    }

    #[test]
    fn test_feed_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let feed = Feed::new();
            assert_eq!(feed.data_length.get_untracked(), PAGE_SIZE);
            assert!(feed.has_more.get_untracked());
            assert_eq!(feed.reload_count.get_untracked(), 0);

            feed.items.set(generate_items(0, MAX_ITEMS));
            assert_eq!(feed.data_length.get_untracked(), MAX_ITEMS);
            assert!(!feed.has_more.get_untracked());
        });
    }
}
