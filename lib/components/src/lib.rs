pub mod node_utils;
pub mod scroll_watcher;
