pub mod app;
pub mod feed;
