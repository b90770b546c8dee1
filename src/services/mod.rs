//! Service Layer
//!
//! Integrations with the host environment. The managers in `state` only see the
//! traits defined here, so headless runs and tests swap in static sources.

mod system_theme;

pub use system_theme::*;
