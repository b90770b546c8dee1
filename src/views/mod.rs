//! View Models
//!
//! Localized, render-ready data for each page section. Every builder reads the
//! catalog for the active locale; empty structured lists fall back to the
//! default locale's content.
//!
//! ## Page Structure
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Header   nav · language buttons · theme  │
//! ├──────────────────────────────────────────┤
//! │ Hero                                     │
//! │ About                                    │
//! │ Services                                 │
//! │ News                                     │
//! │ Partners                                 │
//! │ Voices                                   │
//! │ Team                                     │
//! │ Contact  info · form                     │
//! ├──────────────────────────────────────────┤
//! │ Footer   links · newsletter · social     │
//! └──────────────────────────────────────────┘
//! ```

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod news;
mod partners;
mod services;
mod team;
mod voices;

pub use about::*;
pub use contact::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use news::*;
pub use partners::*;
pub use services::*;
pub use team::*;
pub use voices::*;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::content::LocaleContent;
use crate::domain::theme::ThemeConfig;
use crate::error::Error;
use crate::features::contact::ContactController;
use crate::features::newsletter::NewsletterForm;
use crate::i18n::Locale;
use crate::i18n::catalog::Catalog;
use crate::state::{LanguageSelector, ThemeManager};

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Hero,
    About,
    Services,
    News,
    Partners,
    Voices,
    Team,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Header,
        SectionId::Hero,
        SectionId::About,
        SectionId::Services,
        SectionId::News,
        SectionId::Partners,
        SectionId::Voices,
        SectionId::Team,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections linked from the header navigation
    pub const NAV: [SectionId; 7] = [
        SectionId::About,
        SectionId::Services,
        SectionId::News,
        SectionId::Partners,
        SectionId::Voices,
        SectionId::Team,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::News => "news",
            SectionId::Partners => "partners",
            SectionId::Voices => "voices",
            SectionId::Team => "team",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// In-page link target, e.g. `#services`
    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown section: {s}"),
            })
    }
}

/// A labelled in-page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: String,
    pub href: String,
}

/// Closing call-to-action block of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub actions: Vec<Action>,
}

/// Everything a section builder reads
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub language: &'a LanguageSelector,
    pub theme: &'a ThemeManager,
    pub contact: &'a ContactController,
    pub newsletter: &'a NewsletterForm,
}

impl<'a> ViewContext<'a> {
    pub fn locale(&self) -> Locale {
        self.language.current_locale()
    }

    /// Translated string for the active locale
    pub fn text(&self, key: &str) -> String {
        self.language.translate(key).to_string()
    }

    /// Owned copy of a content list, with default-locale fallback
    pub fn list<T: Clone>(&self, pick: impl Fn(&LocaleContent) -> &Vec<T>) -> Vec<T> {
        self.catalog.list(self.locale(), pick).to_vec()
    }

    pub(crate) fn action(&self, key: &str, target: SectionId) -> Action {
        Action {
            label: self.text(key),
            href: target.anchor(),
        }
    }

    /// `<prefix>.cta.title` / `<prefix>.cta.description` plus the given buttons
    pub(crate) fn call_to_action(&self, prefix: &str, actions: Vec<Action>) -> CallToAction {
        CallToAction {
            title: self.text(&format!("{prefix}.cta.title")),
            description: self.text(&format!("{prefix}.cta.description")),
            actions,
        }
    }
}

/// One rendered section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionView {
    Header(HeaderView),
    Hero(HeroView),
    About(AboutView),
    Services(ServicesView),
    News(NewsView),
    Partners(PartnersView),
    Voices(VoicesView),
    Team(TeamView),
    Contact(ContactView),
    Footer(FooterView),
}

impl SectionView {
    pub fn id(&self) -> SectionId {
        match self {
            SectionView::Header(_) => SectionId::Header,
            SectionView::Hero(_) => SectionId::Hero,
            SectionView::About(_) => SectionId::About,
            SectionView::Services(_) => SectionId::Services,
            SectionView::News(_) => SectionId::News,
            SectionView::Partners(_) => SectionId::Partners,
            SectionView::Voices(_) => SectionId::Voices,
            SectionView::Team(_) => SectionId::Team,
            SectionView::Contact(_) => SectionId::Contact,
            SectionView::Footer(_) => SectionId::Footer,
        }
    }
}

/// Build a single section for the active locale
pub fn render_section(ctx: &ViewContext<'_>, section: SectionId) -> SectionView {
    match section {
        SectionId::Header => SectionView::Header(HeaderView::build(ctx)),
        SectionId::Hero => SectionView::Hero(HeroView::build(ctx)),
        SectionId::About => SectionView::About(AboutView::build(ctx)),
        SectionId::Services => SectionView::Services(ServicesView::build(ctx)),
        SectionId::News => SectionView::News(NewsView::build(ctx)),
        SectionId::Partners => SectionView::Partners(PartnersView::build(ctx)),
        SectionId::Voices => SectionView::Voices(VoicesView::build(ctx)),
        SectionId::Team => SectionView::Team(TeamView::build(ctx)),
        SectionId::Contact => SectionView::Contact(ContactView::build(ctx)),
        SectionId::Footer => SectionView::Footer(FooterView::build(ctx)),
    }
}

/// The whole page plus the document-level state it was rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub locale: Locale,
    pub dir: &'static str,
    pub theme: ThemeConfig,
    pub sections: Vec<SectionView>,
}

pub fn render_page(ctx: &ViewContext<'_>) -> PageView {
    PageView {
        locale: ctx.locale(),
        dir: ctx.language.direction().as_str(),
        theme: ctx.theme.config(),
        sections: SectionId::ALL
            .into_iter()
            .map(|section| render_section(ctx, section))
            .collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Fixture;
    use super::*;

    #[test]
    fn section_ids_parse_with_or_without_hash() {
        assert_eq!("team".parse::<SectionId>().ok(), Some(SectionId::Team));
        assert_eq!("#contact".parse::<SectionId>().ok(), Some(SectionId::Contact));
        assert!(matches!("blog".parse::<SectionId>(), Err(Error::Invalid { .. })));
        assert_eq!(SectionId::Services.anchor(), "#services");
    }

    #[test]
    fn page_lists_every_section_in_order() {
        let fixture = Fixture::new(Locale::En);
        let page = render_page(&fixture.ctx());
        let ids: Vec<SectionId> = page.sections.iter().map(SectionView::id).collect();
        assert_eq!(ids, SectionId::ALL);
        assert_eq!(page.dir, "ltr");
        assert_eq!(page.locale, Locale::En);
    }

    #[test]
    fn arabic_page_is_right_to_left() {
        let fixture = Fixture::new(Locale::Ar);
        assert_eq!(render_page(&fixture.ctx()).dir, "rtl");
    }

    #[test]
    fn section_view_serializes_with_tag() {
        let fixture = Fixture::new(Locale::Fr);
        let view = render_section(&fixture.ctx(), SectionId::Partners);
        let json = serde_json::to_value(&view).expect("serializes");
        assert_eq!(json["section"], "partners");
        assert_eq!(json["title"], "Nos partenaires");
    }
}
