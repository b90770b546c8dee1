//! Utilities

pub mod preference_store;

pub use preference_store::{FileStore, MemoryStore, PreferenceStore};
