//! Partners showcase

use serde::Serialize;

use super::{CallToAction, SectionId, ViewContext};
use crate::domain::content::Partner;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnersView {
    pub title: String,
    pub subtitle: String,
    pub partners: Vec<Partner>,
    pub visit_website: String,
    pub cta: CallToAction,
}

impl PartnersView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self {
            title: ctx.text("partners.title"),
            subtitle: ctx.text("partners.subtitle"),
            partners: ctx.list(|c| &c.partner_list),
            visit_website: ctx.text("partners.visit_website"),
            cta: ctx.call_to_action(
                "partners",
                vec![ctx.action("partners.cta.button", SectionId::Contact)],
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
    fn partners_keep_names_across_locales() {
        for locale in Locale::ALL {
            let fixture = Fixture::new(locale);
            let view = PartnersView::build(&fixture.ctx());
            let names: Vec<&str> = view.partners.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, ["Tasiast", "Port de Tanit", "MAADEN", "edUKate Mauritanie"]);
        }
    }
}
