//! Catalog - Locale Resource Loading
//!
//! Builds the translation table and structured content from one TOML resource
//! per locale. Nested tables flatten to dotted keys:
//!
//! ```toml
//! [hero]
//! title = "..."        # -> "hero.title"
//!
//! [[service_cards]]   # structured content, not a translation key
//! id = 1
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Locale, TranslationTable};
use crate::assets::LocaleAssets;
use crate::domain::content::LocaleContent;
use crate::error::{Error, Result};

/// Immutable site content: translation table plus per-locale structured lists
#[derive(Debug, Clone)]
pub struct Catalog {
    table: Arc<TranslationTable>,
    content: [LocaleContent; Locale::COUNT],
}

impl Catalog {
    /// Load the resources bundled into the binary
    pub fn load_embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Locale::COUNT);
        for locale in Locale::ALL {
            let resource = LocaleAssets::file_name(locale);
            let bytes = LocaleAssets::load(locale).ok_or_else(|| Error::Catalog {
                resource: resource.clone(),
                message: "resource not bundled".to_string(),
            })?;
            let text = String::from_utf8(bytes.into_owned()).map_err(|e| Error::Catalog {
                resource: resource.clone(),
                message: e.to_string(),
            })?;
            sources.push((locale, text));
        }
        Self::from_sources(sources.iter().map(|(locale, text)| (*locale, text.as_str())))
    }

    /// Build from `(locale, toml source)` pairs. Locales without a source stay empty.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Result<Self> {
        let mut table = TranslationTable::new();
        let mut content: [LocaleContent; Locale::COUNT] = Default::default();

        for (locale, source) in sources {
            let resource = LocaleAssets::file_name(locale);
            let parsed: toml::Table = toml::from_str(source).map_err(|e| Error::Catalog {
                resource: resource.clone(),
                message: e.to_string(),
            })?;

            let before = table.len();
            flatten_into(&mut table, locale, "", &parsed);
            debug!(locale = %locale, new_keys = table.len() - before, "Flattened locale strings");

            content[locale.index()] = toml::from_str(source).map_err(|e| Error::Catalog {
                resource,
                message: e.to_string(),
            })?;
        }

        for (key, locale) in table.gaps() {
            warn!(key, locale = %locale, "Translation missing; lookups fall back");
        }
        info!(keys = table.len(), "Catalog loaded");

        Ok(Self {
            table: Arc::new(table),
            content,
        })
    }

    /// Shared handle to the translation table
    pub fn table(&self) -> Arc<TranslationTable> {
        Arc::clone(&self.table)
    }

    /// Structured content of exactly this locale
    pub fn content(&self, locale: Locale) -> &LocaleContent {
        &self.content[locale.index()]
    }

    /// A content list for `locale`, or the default locale's list when empty
    pub fn list<T>(&self, locale: Locale, pick: impl Fn(&LocaleContent) -> &Vec<T>) -> &[T] {
        let own = pick(self.content(locale));
        if own.is_empty() {
            pick(self.content(Locale::default()))
        } else {
            own
        }
    }
}

fn flatten_into(table: &mut TranslationTable, locale: Locale, prefix: &str, node: &toml::Table) {
    for (name, value) in node {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(text) => table.insert(locale, key, text.as_str()),
            toml::Value::Table(child) => flatten_into(table, locale, &key, child),
            // arrays are structured content; numbers/bools are not translatable
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AR: &str = r#"
[nav]
about = "من نحن؟"

[hero]
title = "عنوان"
cta = { primary = "اكتشف خدماتنا" }

[[service_cards]]
id = 1
title = "الإعلام"
description = "وصف"
"#;

    const EN: &str = r#"
[nav]
about = "About Us"

[hero]
title = "Title"
cta = { primary = "Discover our services" }
"#;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let catalog = Catalog::from_sources([(Locale::Ar, AR), (Locale::En, EN)])
            .expect("sources parse");
        let table = catalog.table();
        assert_eq!(table.translate(Locale::En, "hero.cta.primary"), "Discover our services");
        assert_eq!(table.translate(Locale::Ar, "nav.about"), "من نحن؟");
        assert!(!table.contains_key("service_cards"));
    }

    #[test]
    fn missing_locale_resource_falls_back_to_default() {
        let catalog = Catalog::from_sources([(Locale::Ar, AR), (Locale::En, EN)])
            .expect("sources parse");
        assert_eq!(catalog.table().translate(Locale::Fr, "nav.about"), "من نحن؟");
    }

    #[test]
    fn content_lists_fall_back_to_default_locale() {
        let catalog = Catalog::from_sources([(Locale::Ar, AR), (Locale::En, EN)])
            .expect("sources parse");
        assert!(catalog.content(Locale::En).service_cards.is_empty());
        let services = catalog.list(Locale::En, |c| &c.service_cards);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "الإعلام");
    }

    #[test]
    fn malformed_resource_is_an_error() {
        let result = Catalog::from_sources([(Locale::En, "[nav\nabout = ")]);
        assert!(matches!(result, Err(Error::Catalog { .. })));
    }

    #[test]
    fn embedded_resources_cover_every_locale() {
        let catalog = Catalog::load_embedded().expect("bundled locales load");
        let table = catalog.table();
        assert!(table.gaps().is_empty(), "gaps: {:?}", table.gaps());
        for locale in Locale::ALL {
            assert!(!catalog.content(locale).service_cards.is_empty());
            assert!(!catalog.content(locale).team_members.is_empty());
        }
        assert_eq!(table.translate(Locale::En, "nav.about"), "About Us");
        assert_eq!(table.translate(Locale::Fr, "nav.about"), "Qui sommes-nous ?");

        let mut bundled = LocaleAssets::list();
        bundled.sort();
        assert_eq!(bundled, ["ar.toml", "en.toml", "fr.toml"]);
    }
}
