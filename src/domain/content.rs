//! Structured per-locale site content
//!
//! Lists that do not fit the flat key -> string table (service cards, news items,
//! team members, ...). Deserialized from the arrays-of-tables of each locale resource.

use serde::{Deserialize, Serialize};

/// A headline number with its label ("50+", "Projects Done")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A plain label (hero features, trust badges)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub label: String,
}

/// A titled value (company values)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

/// Metric shown on a service card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub author: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub website: String,
}

/// Client testimonial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: u32,
    pub text: String,
    pub author: String,
    pub position: String,
    pub company: String,
    /// Star rating, 1 to 5
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub featured: bool,
}

fn default_rating() -> u8 {
    5
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub experience: String,
    pub bio: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Kind of a contact channel, used by the view to pick an icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Phone,
    Email,
    Address,
    Hours,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub title: String,
    pub value: String,
}

/// Entry of the "service needed" select box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

/// Titled group of footer links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// All structured content of one locale resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleContent {
    pub hero_indicators: Vec<Stat>,
    pub hero_features: Vec<Label>,
    pub about_stats: Vec<Stat>,
    pub about_values: Vec<TitledText>,
    pub service_cards: Vec<ServiceCard>,
    pub news_items: Vec<NewsItem>,
    pub partner_list: Vec<Partner>,
    pub voice_list: Vec<Voice>,
    pub voice_stats: Vec<Stat>,
    pub team_members: Vec<TeamMember>,
    pub team_stats: Vec<Stat>,
    pub contact_items: Vec<ContactItem>,
    pub trust_badges: Vec<Label>,
    pub service_options: Vec<ServiceOption>,
    pub footer_columns: Vec<FooterColumn>,
    pub legal_links: Vec<String>,
}
