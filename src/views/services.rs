//! Services grid

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::{ServiceCard, TitledText};

/// Service areas summarized under the section title
const SERVICE_AREAS: [&str; 3] = ["media", "advertising", "pr"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesView {
    pub title: String,
    pub subtitle: String,
    pub areas: Vec<TitledText>,
    pub cards: Vec<ServiceCard>,
    pub learn_more: String,
    pub cta: CallToAction,
}

impl ServicesView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let areas = SERVICE_AREAS
            .into_iter()
            .map(|area| TitledText {
                title: ctx.text(&format!("services.{area}.title")),
                description: ctx.text(&format!("services.{area}.desc")),
            })
            .collect();

        Self {
            title: ctx.text("services.title"),
            subtitle: ctx.text("services.subtitle"),
            areas,
            cards: ctx.list(|c| &c.service_cards),
            learn_more: ctx.text("services.learn_more"),
            cta: ctx.call_to_action(
                "services",
                vec![ctx.action("services.cta.button", SectionId::Contact)],
            ),
        }
    }
}
