//! Avagh Media Site Core
//!
//! Locale selection with translation lookup, theme preference management, and
//! the localized view models of the Avagh Media site.

pub mod app;
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
