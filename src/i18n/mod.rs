//! i18n - Internationalization Module
//!
//! Supported locales plus the immutable key -> {locale -> string} translation table.
//! Lookups never fail: a missing key yields the key itself, a missing locale entry
//! falls back to the default locale first.

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Locale {
    /// Arabic (right-to-left)
    #[default]
    Ar,
    /// English
    En,
    /// French
    Fr,
}

/// Text direction derived from the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Number of supported locales
    pub const COUNT: usize = 3;

    /// All locales in header order
    pub const ALL: [Locale; Locale::COUNT] = [Locale::Ar, Locale::En, Locale::Fr];

    /// Language code (`ar`, `en`, `fr`)
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Label shown on the language switcher
    pub fn display_label(self) -> &'static str {
        match self {
            Locale::Ar => "عربي",
            Locale::En => "EN",
            Locale::Fr => "FR",
        }
    }

    /// True only for Arabic
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn direction(self) -> Direction {
        if self.is_right_to_left() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Slot of this locale in per-key records
    pub(crate) fn index(self) -> usize {
        match self {
            Locale::Ar => 0,
            Locale::En => 1,
            Locale::Fr => 2,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(Error::InvalidLocale {
                code: other.to_string(),
            }),
        }
    }
}

/// One string per supported locale; `None` marks a gap in the source data
type Record = [Option<String>; Locale::COUNT];

/// Translation resources, built once at startup and immutable afterwards
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: AHashMap<String, Record>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `key` in `locale`. Empty strings are stored as gaps.
    pub(crate) fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let record = self.entries.entry(key.into()).or_default();
        record[locale.index()] = (!value.is_empty()).then_some(value);
    }

    /// Exact entry for `locale`, without any fallback
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|record| record[locale.index()].as_deref())
    }

    /// Entry for `locale`, falling back to the default locale when the slot is empty
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let record = self.entries.get(key)?;
        record[locale.index()]
            .as_deref()
            .or_else(|| record[Locale::default().index()].as_deref())
    }

    /// Translate a key; unknown keys come back unchanged
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key).unwrap_or(key)
    }

    /// Check whether the key exists in any locale
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Keys lacking a string for some locale, sorted by key then locale
    pub fn gaps(&self) -> Vec<(&str, Locale)> {
        let mut gaps: Vec<(&str, Locale)> = self
            .entries
            .iter()
            .flat_map(|(key, record)| {
                Locale::ALL
                    .into_iter()
                    .filter(|locale| record[locale.index()].is_none())
                    .map(move |locale| (key.as_str(), locale))
            })
            .collect();
        gaps.sort_unstable();
        gaps
    }
}
