// src/types/website.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Minimal,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
            Theme::Dark => "dark",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Modern => "Clean and contemporary",
            Theme::Minimal => "Simple and elegant",
            Theme::Dark => "Bold and sleek",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub order: i32,
}

impl SectionConfig {
    pub fn new(id: &str, name: &str, order: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            visible: true,
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteConfig {
    pub theme: Theme,
    pub sections: Vec<SectionConfig>,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            sections: Self::default_sections(),
        }
    }
}

impl WebsiteConfig {
    /// The seven canonical sections, all visible, in render order.
    pub fn default_sections() -> Vec<SectionConfig> {
        [
            ("hero", "Hero"),
            ("about", "About"),
            ("skills", "Skills"),
            ("experience", "Experience"),
            ("projects", "Projects"),
            ("education", "Education"),
            ("contact", "Contact"),
        ]
        .iter()
        .zip(0..)
        .map(|((id, name), order)| SectionConfig::new(id, name, order))
        .collect()
    }

    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections sorted by order key. Ties keep their stored sequence.
    pub fn ordered_sections(&self) -> Vec<&SectionConfig> {
        let mut sections: Vec<&SectionConfig> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Visible sections in display order.
    pub fn visible_sections(&self) -> Vec<&SectionConfig> {
        self.ordered_sections()
            .into_iter()
            .filter(|s| s.visible)
            .collect()
    }
}
