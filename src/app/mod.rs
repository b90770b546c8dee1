//! Application Layer
//!
//! Site composition root, runtime configuration and the presentation context.

pub mod application;
pub mod config;
pub mod document;

pub use application::{RunOptions, Site, run_site};
pub use config::SiteConfig;
pub use document::{Document, DocumentSnapshot, Element, Target};
