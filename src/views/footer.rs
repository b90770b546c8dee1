//! Footer - link columns, newsletter signup, social links and legal line

use chrono::{Datelike, Local};
use serde::Serialize;

use super::{SectionId, ViewContext};
use crate::domain::content::FooterColumn;

/// `(platform, profile url)` in display order
const SOCIAL_PROFILES: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com/avaghmedia"),
    ("Instagram", "https://instagram.com/avaghmedia"),
    ("LinkedIn", "https://linkedin.com/company/avaghmedia"),
    ("YouTube", "https://youtube.com/@avaghmedia"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    /// "Follow us on <platform>"
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterView {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub subscribe: String,
    pub privacy: String,
    pub email: String,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub brand: String,
    pub tagline: String,
    pub description: String,
    pub columns: Vec<FooterColumn>,
    pub newsletter: NewsletterView,
    pub follow_us: String,
    pub social: Vec<SocialLink>,
    pub copyright: String,
    pub legal_links: Vec<String>,
    pub back_to_top: String,
    pub back_to_top_href: String,
}

impl FooterView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self::build_for_year(ctx, Local::now().year())
    }

    pub fn build_for_year(ctx: &ViewContext<'_>, year: i32) -> Self {
        let follow_on = ctx.text("footer.follow_on");
        let social = SOCIAL_PROFILES
            .into_iter()
            .map(|(platform, url)| SocialLink {
                platform,
                url,
                label: follow_on.replace("{platform}", platform),
            })
            .collect();
        let brand = ctx.text("brand.name");
        let copyright = format!("© {year} {brand}. {}", ctx.text("footer.copyright"));

        Self {
            tagline: ctx.text("footer.tagline"),
            description: ctx.text("footer.description"),
            columns: ctx.list(|c| &c.footer_columns),
            newsletter: NewsletterView {
                title: ctx.text("footer.newsletter.title"),
                description: ctx.text("footer.newsletter.description"),
                placeholder: ctx.text("footer.newsletter.placeholder"),
                subscribe: ctx.text("footer.newsletter.subscribe"),
                privacy: ctx.text("footer.newsletter.privacy"),
                email: ctx.newsletter.email().to_string(),
                loading: ctx.newsletter.is_loading(),
            },
            follow_us: ctx.text("footer.follow_us"),
            social,
            copyright,
            legal_links: ctx.list(|c| &c.legal_links),
            back_to_top: ctx.text("footer.back_to_top"),
            back_to_top_href: SectionId::Header.anchor(),
            brand,
        }
    }
}
