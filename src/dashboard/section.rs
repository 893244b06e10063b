//! Dashboard sections and their placeholder content

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{AnalyticsPanel, ContentCard};

/// One of the mutually exclusive top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Analytics,
    Content,
    Team,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Analytics,
        Section::Content,
        Section::Team,
    ];

    /// Parse a section id, `None` if there is no such section
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "overview" => Some(Section::Overview),
            "analytics" => Some(Section::Analytics),
            "content" => Some(Section::Content),
            "team" => Some(Section::Team),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Analytics => "analytics",
            Section::Content => "content",
            Section::Team => "team",
        }
    }

    /// Heading shown in the navigation
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Analytics => "Analytics",
            Section::Content => "Content",
            Section::Team => "Team",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content loaded into sections when they are shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionPanels {
    pub analytics: Option<AnalyticsPanel>,
    pub content: Option<Vec<ContentCard>>,
    /// Team cards have had their detail handlers attached
    pub team_enhanced: bool,
}

impl SectionPanels {
    /// Load the placeholder content for `section`.
    ///
    /// Analytics and content are replaced on every load; team cards are
    /// enhanced once. Overview content is static.
    pub fn load(&mut self, section: Section) {
        match section {
            Section::Analytics => self.analytics = Some(AnalyticsPanel::sample()),
            Section::Content => self.content = Some(ContentCard::samples()),
            Section::Team => self.team_enhanced = true,
            Section::Overview => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_ids() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
        assert_eq!(Section::parse("settings"), None);
        assert_eq!(Section::parse("Overview"), None);
    }

    #[test]
    fn test_load_panels() {
        let mut panels = SectionPanels::default();
        panels.load(Section::Overview);
        assert_eq!(panels, SectionPanels::default());

        panels.load(Section::Analytics);
        panels.load(Section::Content);
        panels.load(Section::Team);

        assert_eq!(panels.analytics.as_ref().unwrap().traffic_sources.len(), 3);
        assert_eq!(panels.content.as_ref().unwrap().len(), 2);
        assert!(panels.team_enhanced);
    }
}
