//! Site - Composition Root and Entry Point
//!
//! Owns the catalog, the language selector, the theme manager and the document,
//! and keeps the document's language attributes and body classes in step with
//! both managers.

use std::cell::RefCell;
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::app::config::SiteConfig;
use crate::app::document::{Document, Target};
use crate::constants::{ATTR_DIR, ATTR_LANG, ATTR_LANGUAGE, CLASS_TRANSITIONS_ENABLED};
use crate::domain::theme::{ThemeConfig, ThemeMode};
use crate::error::{Error, Result};
use crate::eventing::{SiteEvent, SubscriptionId};
use crate::features::contact::ContactController;
use crate::features::newsletter::NewsletterForm;
use crate::i18n::Locale;
use crate::i18n::catalog::Catalog;
use crate::services::{ColorSchemeSource, SystemColorScheme};
use crate::state::{LanguageSelector, ThemeManager};
use crate::utils::{FileStore, PreferenceStore};
use crate::views::{PageView, SectionId, SectionView, ViewContext, render_page, render_section};

/// What the body class list is derived from
#[derive(Debug, Clone, Copy)]
struct ShellState {
    locale: Locale,
    mode: ThemeMode,
    is_dark: bool,
    loaded: bool,
}

impl ShellState {
    /// `<locale> <mode> theme-(dark|light) (rtl|ltr) (loading|loaded)`
    fn body_classes(&self) -> [&'static str; 5] {
        [
            self.locale.code(),
            self.mode.as_str(),
            if self.is_dark { "theme-dark" } else { "theme-light" },
            self.locale.direction().as_str(),
            if self.loaded { "loaded" } else { "loading" },
        ]
    }
}

fn sync_document(document: &Document, state: &ShellState) {
    let code = state.locale.code();
    document.set_attribute(Target::Root, ATTR_LANG, code);
    document.set_attribute(Target::Root, ATTR_DIR, state.locale.direction().as_str());
    document.set_attribute(Target::Root, ATTR_LANGUAGE, code);

    let class_name = state.body_classes().join(" ");
    document.update(Target::Body, |body| {
        let transitions = body.has_class(CLASS_TRANSITIONS_ENABLED);
        body.set_class_name(&class_name);
        if transitions {
            body.add_class(CLASS_TRANSITIONS_ENABLED);
        }
    });
}

/// The assembled site
#[derive(Debug)]
pub struct Site {
    catalog: Catalog,
    language: LanguageSelector,
    theme: ThemeManager,
    document: Document,
    contact: ContactController,
    newsletter: NewsletterForm,
    shell: Rc<RefCell<ShellState>>,
}

impl Site {
    /// Wire the managers to a fresh document. The theme is applied by `initialize`.
    pub fn new(
        catalog: Catalog,
        locale: Locale,
        store: impl PreferenceStore + 'static,
        color_scheme: impl ColorSchemeSource + 'static,
    ) -> Self {
        let document = Document::new();
        let mut language = LanguageSelector::with_locale(catalog.table(), locale);
        let mut theme = ThemeManager::new(store, color_scheme, document.clone());

        let shell = Rc::new(RefCell::new(ShellState {
            locale,
            mode: theme.mode(),
            is_dark: theme.is_dark(),
            loaded: false,
        }));
        sync_document(&document, &shell.borrow());

        {
            let shell = Rc::clone(&shell);
            let document = document.clone();
            language.subscribe(move |locale: &Locale| {
                shell.borrow_mut().locale = *locale;
                sync_document(&document, &shell.borrow());
                document.dispatch(SiteEvent::LocaleChanged { locale: *locale });
            });
        }
        {
            let shell = Rc::clone(&shell);
            let document = document.clone();
            theme.subscribe(move |config: &ThemeConfig| {
                {
                    let mut state = shell.borrow_mut();
                    state.mode = config.mode;
                    state.is_dark = config.is_dark;
                }
                sync_document(&document, &shell.borrow());
            });
        }

        Self {
            catalog,
            language,
            theme,
            document,
            contact: ContactController::new(),
            newsletter: NewsletterForm::new(),
            shell,
        }
    }

    /// Embedded catalog, file-backed preferences and the native color scheme
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let catalog = Catalog::load_embedded()?;
        let storage_path = config.storage_path()?;
        info!(path = ?storage_path, "Using preference store");

        let mut color_scheme = SystemColorScheme::new(config.system_poll_interval());
        if !config.watch_system_theme {
            color_scheme = color_scheme.without_watch();
        }

        Ok(Self::new(
            catalog,
            config.locale(),
            FileStore::new(storage_path),
            color_scheme,
        ))
    }

    // ==================== Lifecycle ====================

    /// Apply the saved theme before anything renders
    pub fn initialize(&mut self) {
        self.theme.initialize();
    }

    /// Initialize, enable transitions after `transition_delay`, then mark the page loaded
    pub async fn start(&mut self, transition_delay: Duration) {
        self.theme.initialize_with_transitions(transition_delay).await;
        self.finish_loading();
    }

    /// Flip the body from `loading` to `loaded`
    pub fn finish_loading(&mut self) {
        self.shell.borrow_mut().loaded = true;
        sync_document(&self.document, &self.shell.borrow());
        info!(locale = %self.language.current_locale(), "Site loaded");
    }

    pub fn is_loaded(&self) -> bool {
        self.shell.borrow().loaded
    }

    /// Apply pending OS color-scheme reports
    pub fn pump_system_changes(&mut self) -> usize {
        self.theme.poll_system_changes()
    }

    pub fn shutdown(&mut self) {
        self.theme.teardown();
        debug!("Site shut down");
    }

    // ==================== Getters ====================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn language(&self) -> &LanguageSelector {
        &self.language
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn contact(&self) -> &ContactController {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactController {
        &mut self.contact
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn newsletter_mut(&mut self) -> &mut NewsletterForm {
        &mut self.newsletter
    }

    /// Current body class list
    pub fn app_classes(&self) -> String {
        self.shell.borrow().body_classes().join(" ")
    }

    // ==================== Actions ====================

    /// Header language button. Unsupported codes are ignored.
    pub fn switch_language(&mut self, code: &str) -> bool {
        self.language.set_locale_code(code)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.language.set_locale(locale);
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme.set_theme(mode, true);
    }

    /// Set the theme from a mode name; unknown names are ignored
    pub fn set_theme_str(&mut self, mode: &str) -> bool {
        self.theme.set_theme_str(mode, true)
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
    }

    pub fn cycle_theme(&mut self) {
        self.theme.cycle_theme();
    }

    pub fn clear_saved_theme(&mut self) {
        self.theme.clear_saved_theme();
    }

    // ==================== Subscriptions ====================

    pub fn subscribe_locale(&mut self, handler: impl FnMut(&Locale) + 'static) -> SubscriptionId {
        self.language.subscribe(handler)
    }

    pub fn subscribe_theme(
        &mut self,
        handler: impl FnMut(&ThemeConfig) + 'static,
    ) -> SubscriptionId {
        self.theme.subscribe(handler)
    }

    // ==================== Views ====================

    pub fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            catalog: &self.catalog,
            language: &self.language,
            theme: &self.theme,
            contact: &self.contact,
            newsletter: &self.newsletter,
        }
    }

    pub fn section(&self, section: SectionId) -> SectionView {
        render_section(&self.view_context(), section)
    }

    pub fn page(&self) -> PageView {
        render_page(&self.view_context())
    }
}

// ==================== Command Line ====================

/// Command-line options of the `avagh-site` binary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub help: bool,
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
    pub theme: Option<String>,
    pub toggle: bool,
    pub cycle: bool,
    pub clear_theme: bool,
    pub watch: bool,
    pub section: Option<SectionId>,
}

pub const USAGE: &str = "\
avagh-site - render the Avagh Media site for a locale and theme

USAGE:
  avagh-site [OPTIONS]

OPTIONS:
  --config <path>     Config file (default: platform config dir)
  --lang <ar|en|fr>   Switch language after startup
  --theme <mode>      Set theme: light, dark or auto
  --toggle            Toggle between light and dark
  --cycle             Advance light -> dark -> auto
  --clear-theme       Forget the saved theme preference
  --section <name>    Print one section instead of the whole page
  --watch             Keep running and follow OS color-scheme changes
  -h, --help          Print this help
";

impl RunOptions {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_args(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let invalid = |e: pico_args::Error| Error::Invalid {
            message: e.to_string(),
        };

        let options = Self {
            help: args.contains(["-h", "--help"]),
            config: args.opt_value_from_str("--config").map_err(invalid)?,
            lang: args.opt_value_from_str("--lang").map_err(invalid)?,
            theme: args.opt_value_from_str("--theme").map_err(invalid)?,
            toggle: args.contains("--toggle"),
            cycle: args.contains("--cycle"),
            clear_theme: args.contains("--clear-theme"),
            watch: args.contains("--watch"),
            section: args.opt_value_from_str("--section").map_err(invalid)?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::Invalid {
                message: format!("unexpected arguments: {rest:?}"),
            });
        }
        Ok(options)
    }
}

/// Start the site, apply command-line actions and print the result as JSON
pub async fn run_site(options: RunOptions) -> Result<()> {
    if options.help {
        print!("{USAGE}");
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load(),
    };
    let mut site = Site::from_config(&config)?;
    site.start(config.transition_delay()).await;

    if options.clear_theme {
        site.clear_saved_theme();
    }
    if let Some(code) = &options.lang {
        site.switch_language(code);
    }
    if let Some(mode) = &options.theme {
        site.set_theme_str(mode);
    }
    if options.toggle {
        site.toggle_theme();
    }
    if options.cycle {
        site.cycle_theme();
    }

    let output = match options.section {
        Some(section) => serde_json::to_string_pretty(&site.section(section))?,
        None => serde_json::to_string_pretty(&site.page())?,
    };
    println!("{output}");

    if options.watch {
        watch_system_theme(&mut site, config.system_poll_interval()).await;
    }

    site.shutdown();
    Ok(())
}

async fn watch_system_theme(site: &mut Site, interval: Duration) {
    info!(classes = %site.app_classes(), "Following system color scheme, Ctrl+C to stop");
    let mut ticker = tokio::time::interval(interval);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if site.pump_system_changes() > 0 {
                    println!("{}", site.app_classes());
                }
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for Ctrl+C");
                }
                break;
            }
        }
    }
}
