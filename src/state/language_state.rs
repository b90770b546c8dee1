//! LanguageSelector - Active Locale and Translation Lookup

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::eventing::{SubscriptionId, Subscribers};
use crate::i18n::{Direction, Locale, TranslationTable};

/// Holds the active locale and translates keys against the shared table.
///
/// The locale is session-only; it is never persisted.
#[derive(Debug)]
pub struct LanguageSelector {
    locale: Locale,
    table: Arc<TranslationTable>,
    subscribers: Subscribers<Locale>,
}

impl LanguageSelector {
    /// Start on the default locale
    pub fn new(table: Arc<TranslationTable>) -> Self {
        Self::with_locale(table, Locale::default())
    }

    pub fn with_locale(table: Arc<TranslationTable>, locale: Locale) -> Self {
        Self {
            locale,
            table,
            subscribers: Subscribers::new(),
        }
    }

    // ==================== Getters ====================

    pub fn current_locale(&self) -> Locale {
        self.locale
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_right_to_left()
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// The immutable translation table
    pub fn translations(&self) -> &TranslationTable {
        &self.table
    }

    /// Translate `key` for the active locale.
    ///
    /// Unknown keys come back unchanged. A key without a string for the active
    /// locale uses the default locale's string, or the key if that is missing too.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.translate(self.locale, key)
    }

    /// Translate `key` for an explicit locale
    pub fn translate_in<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.table.translate(locale, key)
    }

    // ==================== Mutations ====================

    /// Switch locale and notify every subscriber, even when unchanged
    pub fn set_locale(&mut self, locale: Locale) {
        let previous = self.locale;
        self.locale = locale;
        info!(from = %previous, to = %locale, "Locale changed");
        let notified = self.subscribers.notify(&locale);
        debug!(notified, "Locale subscribers notified");
    }

    /// Switch locale by code. Unsupported codes are ignored and return `false`.
    pub fn set_locale_code(&mut self, code: &str) -> bool {
        match code.parse::<Locale>() {
            Ok(locale) => {
                self.set_locale(locale);
                true
            }
            Err(e) => {
                warn!(code, error = %e, "Ignoring unsupported locale");
                false
            }
        }
    }

    // ==================== Subscriptions ====================

    pub fn subscribe(&mut self, handler: impl FnMut(&Locale) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn table() -> Arc<TranslationTable> {
        let mut table = TranslationTable::new();
        table.insert(Locale::Ar, "nav.about", "من نحن؟");
        table.insert(Locale::En, "nav.about", "About Us");
        table.insert(Locale::Fr, "nav.about", "Qui sommes-nous ?");
        table.insert(Locale::Ar, "nav.home", "الرئيسية");
        Arc::new(table)
    }

    #[test]
    fn starts_on_arabic_right_to_left() {
        let selector = LanguageSelector::new(table());
        assert_eq!(selector.current_locale(), Locale::Ar);
        assert!(selector.is_rtl());
        assert_eq!(selector.direction(), Direction::Rtl);
    }

    #[test]
    fn set_locale_then_read_back() {
        let mut selector = LanguageSelector::new(table());
        for locale in Locale::ALL {
            selector.set_locale(locale);
            assert_eq!(selector.current_locale(), locale);
        }
    }

    #[test]
    fn invalid_code_leaves_locale_unchanged() {
        let mut selector = LanguageSelector::new(table());
        assert!(selector.set_locale_code("fr"));
        assert!(!selector.set_locale_code("de"));
        assert!(!selector.set_locale_code(""));
        assert_eq!(selector.current_locale(), Locale::Fr);
    }

    #[test]
    fn translate_follows_locale_switch() {
        let mut selector = LanguageSelector::new(table());
        selector.set_locale(Locale::En);
        assert_eq!(selector.translate("nav.about"), "About Us");
        selector.set_locale(Locale::Fr);
        assert_eq!(selector.translate("nav.about"), "Qui sommes-nous ?");
        assert_eq!(selector.translate_in(Locale::Ar, "nav.about"), "من نحن؟");
        assert_eq!(selector.translations().get(Locale::En, "nav.about"), Some("About Us"));
    }

    #[test]
    fn unknown_key_returns_key_for_every_locale() {
        let mut selector = LanguageSelector::new(table());
        for locale in Locale::ALL {
            selector.set_locale(locale);
            assert_eq!(selector.translate("no.such.key"), "no.such.key");
        }
    }

    #[test]
    fn missing_locale_entry_uses_arabic() {
        let mut selector = LanguageSelector::new(table());
        selector.set_locale(Locale::En);
        assert_eq!(selector.translate("nav.home"), "الرئيسية");
    }

    #[test]
    fn subscribers_notified_in_order_and_independently_removed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut selector = LanguageSelector::new(table());
        let first = {
            let log = Rc::clone(&log);
            selector.subscribe(move |locale| log.borrow_mut().push(format!("first:{locale}")))
        };
        {
            let log = Rc::clone(&log);
            selector.subscribe(move |locale| log.borrow_mut().push(format!("second:{locale}")));
        }

        selector.set_locale(Locale::En);
        assert!(selector.unsubscribe(first));
        selector.set_locale(Locale::Fr);
        // rejected codes notify nobody
        selector.set_locale_code("xx");

        assert_eq!(
            *log.borrow(),
            vec!["first:en", "second:en", "second:fr"]
        );
        assert_eq!(selector.subscriber_count(), 1);
    }
}
