//! SiteEvent - Document Event Enum
//!
//! Events dispatched on the document for consumers that listen there instead of
//! subscribing to a manager directly.

use serde::Serialize;

use crate::domain::theme::ThemeConfig;
use crate::i18n::Locale;

/// Events dispatched on the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SiteEvent {
    /// An explicit theme change (`themechange`)
    ThemeChanged(ThemeConfig),

    /// The active locale changed
    LocaleChanged { locale: Locale },
}

impl SiteEvent {
    /// Event name as seen by document listeners
    pub fn name(&self) -> &'static str {
        match self {
            SiteEvent::ThemeChanged(_) => "themechange",
            SiteEvent::LocaleChanged { .. } => "localechange",
        }
    }
}
