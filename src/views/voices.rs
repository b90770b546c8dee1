//! Client voices - testimonials and satisfaction stats

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::{Stat, Voice};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoicesView {
    pub title: String,
    pub subtitle: String,
    pub project_label: String,
    /// Featured testimonials first; ratings clamped to 1..=5
    pub testimonials: Vec<Voice>,
    pub stats_title: String,
    pub stats: Vec<Stat>,
    pub cta: CallToAction,
}

impl VoicesView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let mut testimonials = ctx.list(|c| &c.voice_list);
        for voice in &mut testimonials {
            voice.rating = voice.rating.clamp(MIN_RATING, MAX_RATING);
        }
        testimonials.sort_by_key(|voice| !voice.featured);

        Self {
            title: ctx.text("voices.title"),
            subtitle: ctx.text("voices.subtitle"),
            project_label: ctx.text("voices.project_label"),
            testimonials,
            stats_title: ctx.text("voices.stats_title"),
            stats: ctx.list(|c| &c.voice_stats),
            cta: ctx.call_to_action(
                "voices",
                vec![ctx.action("voices.cta.button", SectionId::Contact)],
            ),
        }
    }
}

/// Filled and empty star counts for a rating
pub fn star_split(rating: u8) -> (u8, u8) {
    let filled = rating.clamp(MIN_RATING, MAX_RATING);
    (filled, MAX_RATING - filled)
}
