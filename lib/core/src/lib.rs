pub mod config;
pub mod metrics;
pub mod pull;
pub mod scroll;
pub mod state;
pub mod style;
pub mod threshold;
