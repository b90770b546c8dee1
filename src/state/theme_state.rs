//! ThemeManager - Light/Dark/Auto Theme Preference
//!
//! Owns the tri-state preference, tracks the OS color-scheme signal, persists
//! explicit choices and writes the effective theme onto the document.
//!
//! The effective "is dark" value is never stored: every read derives it from
//! the mode and the last OS signal, so the two cannot drift apart.
//!
//! Handlers receive immutable snapshots while the manager is exclusively
//! borrowed, so a handler cannot call back into `set_theme` mid-notification.

use std::time::Duration;

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::app::document::{Document, Target};
use crate::constants::{
    ATTR_THEME, ATTR_THEME_MODE, CLASS_THEME_DARK, CLASS_THEME_LIGHT, CLASS_TRANSITIONS_ENABLED,
    META_COLOR_SCHEME, THEME_STORAGE_KEY,
};
use crate::domain::theme::{self, PersistedTheme, ThemeConfig, ThemeMode, ThemeOption};
use crate::eventing::{SiteEvent, SubscriptionId, Subscribers};
use crate::services::ColorSchemeSource;
use crate::utils::PreferenceStore;

/// Theme preference manager
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    color_scheme: Box<dyn ColorSchemeSource>,
    document: Document,
    mode: ThemeMode,
    system_prefers_dark: bool,
    initialized: bool,
    system_rx: Option<Receiver<bool>>,
    config_subscribers: Subscribers<ThemeConfig>,
    mode_subscribers: Subscribers<ThemeMode>,
    system_subscribers: Subscribers<bool>,
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("mode", &self.mode)
            .field("system_prefers_dark", &self.system_prefers_dark)
            .field("initialized", &self.initialized)
            .field("watching", &self.system_rx.is_some())
            .finish()
    }
}

impl ThemeManager {
    /// Create an uninitialized manager in `auto` mode
    pub fn new(
        store: impl PreferenceStore + 'static,
        color_scheme: impl ColorSchemeSource + 'static,
        document: Document,
    ) -> Self {
        Self {
            store: Box::new(store),
            color_scheme: Box::new(color_scheme),
            document,
            mode: ThemeMode::default(),
            system_prefers_dark: false,
            initialized: false,
            system_rx: None,
            config_subscribers: Subscribers::new(),
            mode_subscribers: Subscribers::new(),
            system_subscribers: Subscribers::new(),
        }
    }

    // ==================== Lifecycle ====================

    /// Read the OS signal and the saved preference, then apply. A second call is a no-op.
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("Theme manager already initialized");
            return;
        }

        self.system_prefers_dark = self.color_scheme.prefers_dark();
        if self.system_rx.is_none() {
            self.system_rx = self.color_scheme.watch();
        }

        self.mode = self.load_saved_theme().unwrap_or_default();
        self.apply();
        self.mode_subscribers.notify(&self.mode);
        self.initialized = true;

        info!(
            mode = %self.mode,
            is_dark = self.is_dark(),
            system_prefers_dark = self.system_prefers_dark,
            "Theme initialized"
        );
    }

    /// Initialize, then enable smooth transitions once `delay` has passed
    pub async fn initialize_with_transitions(&mut self, delay: Duration) {
        self.initialize();
        tokio::time::sleep(delay).await;
        self.enable_transitions();
    }

    /// Mark root and body as ready for animated theme transitions
    pub fn enable_transitions(&self) {
        self.document.add_class(Target::Root, CLASS_TRANSITIONS_ENABLED);
        self.document.add_class(Target::Body, CLASS_TRANSITIONS_ENABLED);
        debug!("Theme transitions enabled");
    }

    /// Detach from the OS signal. Safe to call at any time, including twice.
    ///
    /// A later `initialize` starts over from the saved preference.
    pub fn teardown(&mut self) {
        if self.system_rx.take().is_some() {
            self.color_scheme.unwatch();
            info!("Stopped watching system color scheme");
        }
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ==================== Getters ====================

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.resolve(self.system_prefers_dark)
    }

    pub fn system_prefers_dark(&self) -> bool {
        self.system_prefers_dark
    }

    /// Snapshot of mode, effective value and OS signal
    pub fn config(&self) -> ThemeConfig {
        ThemeConfig::new(self.mode, self.system_prefers_dark)
    }

    pub fn available_themes(&self) -> [ThemeOption; 3] {
        theme::available_themes()
    }

    /// Label of `mode`, or of the current mode when `None`
    pub fn theme_display_name(&self, mode: Option<ThemeMode>) -> &'static str {
        mode.unwrap_or(self.mode).label()
    }

    /// Whether the host reports a color-scheme preference at all
    pub fn supports_dark_mode(&self) -> bool {
        self.color_scheme.supports_color_scheme()
    }

    // ==================== Mutations ====================

    /// Switch mode, optionally persisting it. Ignored with a warning before `initialize`.
    pub fn set_theme(&mut self, mode: ThemeMode, persist: bool) {
        if !self.initialized {
            warn!(mode = %mode, "Theme manager not initialized; ignoring set_theme");
            return;
        }

        self.mode = mode;
        if persist {
            self.save_theme(mode);
        }
        self.apply();
        self.mode_subscribers.notify(&mode);
        self.document.dispatch(SiteEvent::ThemeChanged(self.config()));

        info!(mode = %mode, is_dark = self.is_dark(), persist, "Theme changed");
    }

    /// Parse and apply a mode name; unknown names are ignored and return `false`
    pub fn set_theme_str(&mut self, mode: &str, persist: bool) -> bool {
        match mode.parse::<ThemeMode>() {
            Ok(mode) => {
                self.set_theme(mode, persist);
                true
            }
            Err(e) => {
                warn!(mode, error = %e, "Ignoring unsupported theme mode");
                false
            }
        }
    }

    /// Pin the opposite of the current effective theme.
    ///
    /// From `auto` this leaves OS tracking: the result is always `light` or `dark`.
    pub fn toggle_theme(&mut self) {
        let next = if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_theme(next, true);
    }

    /// Advance `light -> dark -> auto -> light`
    pub fn cycle_theme(&mut self) {
        self.set_theme(self.mode.next(), true);
    }

    /// Record a new OS signal. Presentation changes only in `auto` mode.
    pub fn handle_system_change(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
        self.system_subscribers.notify(&prefers_dark);
        debug!(prefers_dark, mode = %self.mode, "System color scheme changed");

        if self.initialized && self.mode == ThemeMode::Auto {
            self.apply();
        }
    }

    /// Drain pending OS signal changes; returns how many were handled
    pub fn poll_system_changes(&mut self) -> usize {
        let Some(rx) = self.system_rx.clone() else {
            return 0;
        };
        let mut handled = 0;
        for prefers_dark in rx.try_iter() {
            self.handle_system_change(prefers_dark);
            handled += 1;
        }
        handled
    }

    /// Forget the saved preference. The active mode is left as is.
    pub fn clear_saved_theme(&mut self) {
        match self.store.remove(THEME_STORAGE_KEY) {
            Ok(()) => info!("Saved theme preference cleared"),
            Err(e) => warn!(error = %e, "Failed to clear theme preference"),
        }
    }

    // ==================== Subscriptions ====================

    /// Called with the full config after every apply
    pub fn subscribe(&mut self, handler: impl FnMut(&ThemeConfig) + 'static) -> SubscriptionId {
        self.config_subscribers.subscribe(handler)
    }

    /// Called when the mode is loaded or set
    pub fn subscribe_mode(&mut self, handler: impl FnMut(&ThemeMode) + 'static) -> SubscriptionId {
        self.mode_subscribers.subscribe(handler)
    }

    /// Called on every OS signal change
    pub fn subscribe_system(&mut self, handler: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.system_subscribers.subscribe(handler)
    }

    /// Remove a handler from whichever channel holds it
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.config_subscribers.unsubscribe(id)
            || self.mode_subscribers.unsubscribe(id)
            || self.system_subscribers.unsubscribe(id)
    }

    // ==================== Internals ====================

    fn apply(&mut self) {
        let is_dark = self.is_dark();
        let (add, remove) = if is_dark {
            (CLASS_THEME_DARK, CLASS_THEME_LIGHT)
        } else {
            (CLASS_THEME_LIGHT, CLASS_THEME_DARK)
        };

        for target in [Target::Root, Target::Body] {
            self.document.update(target, |element| {
                element.remove_class(remove);
                element.add_class(add);
            });
        }
        self.document
            .set_attribute(Target::Root, ATTR_THEME, if is_dark { "dark" } else { "light" });
        self.document
            .set_attribute(Target::Root, ATTR_THEME_MODE, self.mode.as_str());
        self.document.set_meta(
            META_COLOR_SCHEME,
            if is_dark { "dark light" } else { "light dark" },
        );

        let config = self.config();
        let notified = self.config_subscribers.notify(&config);
        debug!(mode = %config.mode, is_dark, notified, "Theme applied");
    }

    fn load_saved_theme(&self) -> Option<ThemeMode> {
        let raw = match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                return None;
            }
        };

        match PersistedTheme::decode(&raw) {
            Ok(saved) => Some(saved.mode),
            Err(e) => {
                warn!(error = %e, "Discarding corrupt theme preference");
                if let Err(e) = self.store.remove(THEME_STORAGE_KEY) {
                    warn!(error = %e, "Failed to clear corrupt theme preference");
                }
                None
            }
        }
    }

    fn save_theme(&self, mode: ThemeMode) {
        let result = PersistedTheme::now(mode)
            .encode()
            .and_then(|blob| self.store.set(THEME_STORAGE_KEY, &blob));
        if let Err(e) = result {
            warn!(mode = %mode, error = %e, "Failed to save theme preference");
        }
    }
}

impl Drop for ThemeManager {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::services::StaticColorScheme;
    use crate::utils::{FileStore, MemoryStore};

    struct Fixture {
        manager: ThemeManager,
        store: MemoryStore,
        os: StaticColorScheme,
        document: Document,
    }

    fn fixture_with(store: MemoryStore, prefers_dark: bool) -> Fixture {
        let os = StaticColorScheme::new(prefers_dark);
        let document = Document::new();
        let manager = ThemeManager::new(store.clone(), os.clone(), document.clone());
        Fixture {
            manager,
            store,
            os,
            document,
        }
    }

    fn fixture(prefers_dark: bool) -> Fixture {
        fixture_with(MemoryStore::new(), prefers_dark)
    }

    fn saved_mode(store: &MemoryStore) -> Option<ThemeMode> {
        store
            .get(THEME_STORAGE_KEY)
            .expect("memory store never fails")
            .map(|raw| PersistedTheme::decode(&raw).expect("valid blob").mode)
    }

    #[test]
    fn initialize_defaults_to_auto_and_applies() {
        let mut f = fixture(true);
        f.manager.initialize();

        let config = f.manager.config();
        assert_eq!(config.mode, ThemeMode::Auto);
        assert!(config.is_dark);
        assert!(f.document.has_class(Target::Root, CLASS_THEME_DARK));
        assert!(f.document.has_class(Target::Body, CLASS_THEME_DARK));
        assert_eq!(f.document.attribute(Target::Root, ATTR_THEME).as_deref(), Some("dark"));
        assert_eq!(
            f.document.attribute(Target::Root, ATTR_THEME_MODE).as_deref(),
            Some("auto")
        );
        assert_eq!(f.document.meta(META_COLOR_SCHEME).as_deref(), Some("dark light"));
        assert!(f.os.is_watching());
    }

    #[test]
    fn initialize_twice_is_a_no_op() {
        let mut f = fixture(false);
        let applied = Rc::new(RefCell::new(0));
        {
            let applied = Rc::clone(&applied);
            f.manager.subscribe(move |_| *applied.borrow_mut() += 1);
        }
        f.manager.initialize();
        f.manager.initialize();
        assert_eq!(*applied.borrow(), 1);
        assert_eq!(f.os.watch_calls(), 1);
    }

    #[test]
    fn set_theme_before_initialize_is_ignored() {
        let mut f = fixture(false);
        f.manager.set_theme(ThemeMode::Dark, true);
        assert_eq!(f.manager.mode(), ThemeMode::Auto);
        assert!(f.store.is_empty());
        assert!(f.document.class_name(Target::Root).is_empty());
    }

    #[test]
    fn cycle_returns_to_light_after_three_steps() {
        let mut f = fixture(false);
        f.manager.initialize();
        f.manager.set_theme(ThemeMode::Light, true);

        let mut seen = Vec::new();
        for _ in 0..3 {
            f.manager.cycle_theme();
            seen.push(f.manager.mode());
        }
        assert_eq!(seen, vec![ThemeMode::Dark, ThemeMode::Auto, ThemeMode::Light]);
    }

    #[test]
    fn auto_mode_follows_system_changes() {
        let mut f = fixture(true);
        f.manager.initialize();
        assert!(f.manager.config().is_dark);

        f.os.set_prefers_dark(false);
        assert_eq!(f.manager.poll_system_changes(), 1);

        let config = f.manager.config();
        assert_eq!(config.mode, ThemeMode::Auto);
        assert!(!config.is_dark);
        assert!(!config.system_prefers_dark);
        assert!(f.document.has_class(Target::Root, CLASS_THEME_LIGHT));
        assert!(!f.document.has_class(Target::Root, CLASS_THEME_DARK));
    }

    #[test]
    fn explicit_mode_ignores_system_changes() {
        let mut f = fixture(false);
        f.manager.initialize();
        f.manager.set_theme(ThemeMode::Dark, true);

        f.manager.handle_system_change(true);
        f.manager.handle_system_change(false);

        assert!(f.manager.config().is_dark);
        assert!(!f.manager.system_prefers_dark());
        assert_eq!(f.document.attribute(Target::Root, ATTR_THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn system_change_before_initialize_is_recorded_only() {
        let mut f = fixture(false);
        f.manager.handle_system_change(true);
        assert!(f.manager.system_prefers_dark());
        assert!(f.document.attribute(Target::Root, ATTR_THEME).is_none());
    }

    #[test]
    fn saved_theme_survives_teardown_and_reinitialize() {
        let mut f = fixture(false);
        f.manager.initialize();
        f.manager.set_theme(ThemeMode::Dark, true);
        f.manager.teardown();
        assert!(!f.os.is_watching());

        f.manager.initialize();
        assert_eq!(f.manager.config().mode, ThemeMode::Dark);

        // a fresh manager over the same store sees it too
        let mut other = fixture_with(f.store.clone(), false);
        other.manager.initialize();
        assert_eq!(other.manager.mode(), ThemeMode::Dark);
    }

    #[test]
    fn corrupt_blob_falls_back_to_auto_and_is_cleared() {
        for raw in [r#"{"mode":"purple"}"#, r#"{"theme":"purple","timestamp":1}"#, "{oops"] {
            let store = MemoryStore::with_entry(THEME_STORAGE_KEY, raw);
            let mut f = fixture_with(store, false);
            f.manager.initialize();
            assert_eq!(f.manager.mode(), ThemeMode::Auto, "{raw}");
            assert!(f.store.get(THEME_STORAGE_KEY).expect("get").is_none());
        }
    }

    #[test]
    fn unreadable_preferences_file_does_not_block_saving() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"avagh-theme-v2": {"theme":"dark"}}"#).expect("write");

        let mut first =
            ThemeManager::new(FileStore::new(&path), StaticColorScheme::new(false), Document::new());
        first.initialize();
        assert_eq!(first.mode(), ThemeMode::Auto);
        first.set_theme(ThemeMode::Dark, true);
        first.teardown();

        let mut second =
            ThemeManager::new(FileStore::new(&path), StaticColorScheme::new(false), Document::new());
        second.initialize();
        assert_eq!(second.mode(), ThemeMode::Dark);
        assert!(second.is_dark());
    }

    #[test]
    fn legacy_theme_field_is_accepted() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, r#"{"theme":"light","timestamp":5}"#);
        let mut f = fixture_with(store, true);
        f.manager.initialize();
        assert_eq!(f.manager.mode(), ThemeMode::Light);
        assert!(!f.manager.is_dark());
    }

    #[test]
    fn set_theme_without_persist_leaves_store_untouched() {
        let mut f = fixture(false);
        f.manager.initialize();
        f.manager.set_theme(ThemeMode::Dark, false);
        assert!(f.manager.is_dark());
        assert_eq!(saved_mode(&f.store), None);
    }

    #[test]
    fn toggle_from_auto_pins_opposite_of_effective() {
        let mut f = fixture(true);
        f.manager.initialize();
        f.manager.toggle_theme();
        assert_eq!(f.manager.mode(), ThemeMode::Light);

        // no longer tracks the OS
        f.manager.handle_system_change(false);
        f.manager.handle_system_change(true);
        assert!(!f.manager.is_dark());
    }

    #[test]
    fn set_theme_dispatches_themechange_event() {
        let mut f = fixture(false);
        f.manager.initialize();
        assert!(f.document.events().is_empty());

        f.manager.set_theme(ThemeMode::Dark, true);
        let events = f.document.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "themechange");
        assert_eq!(
            events[0],
            SiteEvent::ThemeChanged(ThemeConfig::new(ThemeMode::Dark, false))
        );
    }

    #[test]
    fn subscriber_channels_fire_independently() {
        let mut f = fixture(false);
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let log = Rc::clone(&log);
            f.manager
                .subscribe(move |config| log.borrow_mut().push(format!("config:{}", config.is_dark)));
        }
        {
            let log = Rc::clone(&log);
            f.manager
                .subscribe_mode(move |mode| log.borrow_mut().push(format!("mode:{mode}")));
        }
        let system = {
            let log = Rc::clone(&log);
            f.manager
                .subscribe_system(move |dark| log.borrow_mut().push(format!("system:{dark}")))
        };

        f.manager.initialize();
        f.manager.handle_system_change(true);
        assert!(f.manager.unsubscribe(system));
        f.manager.set_theme(ThemeMode::Light, false);

        assert_eq!(
            *log.borrow(),
            vec![
                "config:false",
                "mode:auto",
                "system:true",
                "config:true",
                "config:false",
                "mode:light",
            ]
        );
    }

    #[test]
    fn clear_saved_theme_keeps_active_mode() {
        let mut f = fixture(false);
        f.manager.initialize();
        f.manager.set_theme(ThemeMode::Dark, true);
        f.manager.clear_saved_theme();
        assert_eq!(saved_mode(&f.store), None);
        assert_eq!(f.manager.mode(), ThemeMode::Dark);
    }

    #[test]
    fn display_names_and_support() {
        let mut f = fixture(false);
        f.manager.initialize();
        assert_eq!(f.manager.theme_display_name(None), "System");
        assert_eq!(f.manager.theme_display_name(Some(ThemeMode::Dark)), "Dark");
        assert!(f.manager.supports_dark_mode());
        assert_eq!(f.manager.available_themes().len(), 3);

        let unsupported =
            ThemeManager::new(MemoryStore::new(), StaticColorScheme::unsupported(), Document::new());
        assert!(!unsupported.supports_dark_mode());
    }

    #[test]
    fn teardown_without_initialize_is_safe() {
        let mut f = fixture(false);
        f.manager.teardown();
        f.manager.teardown();
        assert_eq!(f.os.unwatch_calls(), 0);
    }

    #[test]
    fn end_to_end_preference_flow() {
        let mut f = fixture(false);
        f.manager.initialize();
        assert_eq!(f.manager.mode(), ThemeMode::Auto);
        assert!(!f.manager.is_dark());

        f.manager.set_theme(ThemeMode::Dark, true);
        assert_eq!(f.manager.mode(), ThemeMode::Dark);
        assert!(f.manager.is_dark());
        let raw = f
            .store
            .get(THEME_STORAGE_KEY)
            .expect("memory store never fails")
            .expect("blob saved");
        let blob: serde_json::Value = serde_json::from_str(&raw).expect("blob is json");
        assert_eq!(blob["mode"], "dark");
        assert!(blob["timestamp"].as_i64().is_some_and(|ts| ts > 0));

        f.manager.toggle_theme();
        assert_eq!(f.manager.mode(), ThemeMode::Light);
        assert!(!f.manager.is_dark());
        assert_eq!(saved_mode(&f.store), Some(ThemeMode::Light));
    }

    #[tokio::test]
    async fn transitions_enabled_after_delay() {
        let mut f = fixture(false);
        f.manager
            .initialize_with_transitions(Duration::from_millis(1))
            .await;
        assert!(f.manager.is_initialized());
        assert!(f.document.has_class(Target::Root, CLASS_TRANSITIONS_ENABLED));
        assert!(f.document.has_class(Target::Body, CLASS_TRANSITIONS_ENABLED));
    }
}
