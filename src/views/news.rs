//! News & press

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::NewsItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsView {
    pub title: String,
    pub subtitle: String,
    pub read_more: String,
    /// Featured items first, otherwise in resource order
    pub items: Vec<NewsItem>,
    pub cta: CallToAction,
}

impl NewsView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let mut items = ctx.list(|c| &c.news_items);
        // stable: keeps resource order within each group
        items.sort_by_key(|item| !item.featured);

        Self {
            title: ctx.text("news.title"),
            subtitle: ctx.text("news.subtitle"),
            read_more: ctx.text("news.read_more"),
            items,
            cta: ctx.call_to_action("news", vec![ctx.action("news.cta.button", SectionId::News)]),
        }
    }

    pub fn featured(&self) -> Option<&NewsItem> {
        self.items.first().filter(|item| item.featured)
    }
}
