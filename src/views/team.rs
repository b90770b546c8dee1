//! Team roster

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::{Stat, TeamMember};

/// Headings of the per-member detail lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamLabels {
    pub specialties: String,
    pub skills: String,
    pub achievements: String,
    pub learn_more: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub title: String,
    pub subtitle: String,
    pub labels: TeamLabels,
    pub members: Vec<TeamMember>,
    pub stats: Vec<Stat>,
    pub cta: CallToAction,
}

impl TeamView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let mut members = ctx.list(|c| &c.team_members);
        members.sort_by_key(|member| !member.featured);

        Self {
            title: ctx.text("team.title"),
            subtitle: ctx.text("team.subtitle"),
            labels: TeamLabels {
                specialties: ctx.text("team.specialties"),
                skills: ctx.text("team.skills"),
                achievements: ctx.text("team.achievements"),
                learn_more: ctx.text("team.learn_more"),
            },
            members,
            stats: ctx.list(|c| &c.team_stats),
            cta: ctx.call_to_action("team", vec![ctx.action("team.cta.button", SectionId::Contact)]),
        }
    }
}
