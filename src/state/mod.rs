//! State - Preference Managers
//!
//! Each manager is the single writer of one preference and broadcasts every
//! change to its subscribers in registration order.

pub mod language_state;
pub mod theme_state;

pub use language_state::LanguageSelector;
pub use theme_state::ThemeManager;
