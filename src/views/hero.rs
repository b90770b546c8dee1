//! Hero banner

use serde::Serialize;

use super::{Action, SectionId, ViewContext};
use crate::domain::content::Stat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub primary: Action,
    pub secondary: Action,
    pub card: HeroCard,
    /// Trust indicators under the call-to-action buttons
    pub indicators: Vec<Stat>,
    pub features: Vec<String>,
}

impl HeroView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self {
            title: ctx.text("hero.title"),
            subtitle: ctx.text("hero.subtitle"),
            primary: ctx.action("hero.cta.primary", SectionId::Services),
            secondary: ctx.action("hero.cta.secondary", SectionId::Contact),
            card: HeroCard {
                title: ctx.text("hero.card.title"),
                description: ctx.text("hero.card.description"),
            },
            indicators: ctx.list(|c| &c.hero_indicators),
            features: ctx
                .list(|c| &c.hero_features)
                .into_iter()
                .map(|feature| feature.label)
                .collect(),
        }
    }
}
