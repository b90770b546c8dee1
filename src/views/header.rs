//! Header - Navigation, Language Switcher and Theme Toggle

use serde::Serialize;

use super::{SectionId, ViewContext};
use crate::domain::theme::{ThemeMode, ThemeOption};
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: SectionId,
    pub label: String,
    pub href: String,
}

/// One button of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageButton {
    pub locale: Locale,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeChoice {
    #[serde(flatten)]
    pub option: ThemeOption,
    pub active: bool,
}

/// Light/dark toggle plus the full picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeToggleView {
    pub mode: ThemeMode,
    pub is_dark: bool,
    /// Icon of the mode the toggle switches to
    pub icon: &'static str,
    /// Accessible label describing the toggle action
    pub label: String,
    pub choices: Vec<ThemeChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub brand: String,
    pub home_label: String,
    pub nav: Vec<NavEntry>,
    pub language_label: String,
    pub languages: Vec<LanguageButton>,
    pub theme: ThemeToggleView,
}

impl HeaderView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let current = ctx.locale();
        let nav = SectionId::NAV
            .into_iter()
            .map(|section| NavEntry {
                section,
                label: ctx.text(&format!("nav.{section}")),
                href: section.anchor(),
            })
            .collect();
        let languages = Locale::ALL
            .into_iter()
            .map(|locale| LanguageButton {
                locale,
                label: locale.display_label(),
                active: locale == current,
            })
            .collect();

        Self {
            brand: ctx.text("brand.name"),
            home_label: ctx.text("brand.home"),
            nav,
            language_label: ctx.text("lang.choose"),
            languages,
            theme: theme_toggle(ctx),
        }
    }
}

fn theme_toggle(ctx: &ViewContext<'_>) -> ThemeToggleView {
    let config = ctx.theme.config();
    let (target, label_key) = if config.is_dark {
        (ThemeMode::Light, "theme.switch_to_light")
    } else {
        (ThemeMode::Dark, "theme.switch_to_dark")
    };
    let choices = ctx
        .theme
        .available_themes()
        .into_iter()
        .map(|option| ThemeChoice {
            active: option.value == config.mode,
            option,
        })
        .collect();

    ThemeToggleView {
        mode: config.mode,
        is_dark: config.is_dark,
        icon: target.icon(),
        label: ctx.text(label_key),
        choices,
    }
}
