//! About section - stats, values, mission and vision

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::{Stat, TitledText};

/// Studio video teaser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoTeaser {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: String,
    pub description: String,
    pub stats: Vec<Stat>,
    pub values_title: String,
    pub values: Vec<TitledText>,
    pub mission: TitledText,
    pub vision: TitledText,
    pub video: VideoTeaser,
    pub cta: CallToAction,
}

impl AboutView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let titled = |prefix: &str| TitledText {
            title: ctx.text(&format!("{prefix}.title")),
            description: ctx.text(&format!("{prefix}.description")),
        };

        Self {
            title: ctx.text("about.title"),
            description: ctx.text("about.description"),
            stats: ctx.list(|c| &c.about_stats),
            values_title: ctx.text("about.values_title"),
            values: ctx.list(|c| &c.about_values),
            mission: titled("about.mission"),
            vision: titled("about.vision"),
            video: VideoTeaser {
                title: ctx.text("about.video.title"),
                subtitle: ctx.text("about.video.subtitle"),
                badge: ctx.text("about.video.badge"),
            },
            cta: ctx.call_to_action(
                "about",
                vec![
                    ctx.action("about.cta.primary", SectionId::Contact),
                    ctx.action("about.cta.secondary", SectionId::Services),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::views::testing::Fixture;

    #[test]
    fn about_carries_mission_and_values() {
        let fixture = Fixture::new(Locale::En);
        let about = AboutView::build(&fixture.ctx());
        assert_eq!(about.mission.title, "Our Mission");
        assert_eq!(about.values.len(), 3);
        assert_eq!(about.values[0].title, "Creativity");
        assert!(about.stats.iter().all(|stat| stat.description.is_some()));
        assert_eq!(about.cta.title, "Ready to Get Started?");
        assert_eq!(about.cta.actions[0].href, "#contact");
    }
}
