//! Embedded assets for avagh-site
//!
//! Uses rust-embed to bundle the per-locale content resources at compile time.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::i18n::Locale;

/// Embedded locale resources from the locales directory
#[derive(RustEmbed)]
#[folder = "locales"]
pub struct LocaleAssets;

impl LocaleAssets {
    /// Resource file name for a locale
    pub fn file_name(locale: Locale) -> String {
        format!("{}.toml", locale.code())
    }

    /// Raw bytes of a locale resource, if bundled
    pub fn load(locale: Locale) -> Option<Cow<'static, [u8]>> {
        Self::get(&Self::file_name(locale)).map(|file| file.data)
    }

    /// Names of all bundled resources
    pub fn list() -> Vec<String> {
        Self::iter().map(|name| name.into_owned()).collect()
    }
}
