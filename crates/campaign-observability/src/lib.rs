//! # campaign-observability
//!
//! Subscriber setup and span definitions shared by the campaign crates.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
