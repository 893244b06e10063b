//! Placeholder section content and canned messages

use serde::Serialize;

use super::stats::CardKind;

/// Share of traffic from one source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficSource {
    pub name: &'static str,
    pub percentage: &'static str,
}

/// A piece of content with its view count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub title: &'static str,
    pub views: &'static str,
}

/// Content loaded into the analytics section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsPanel {
    pub traffic_sources: Vec<TrafficSource>,
    pub top_content: Vec<ContentItem>,
}

impl AnalyticsPanel {
    pub fn sample() -> Self {
        Self {
            traffic_sources: vec![
                TrafficSource {
                    name: "Direct",
                    percentage: "45%",
                },
                TrafficSource {
                    name: "Social Media",
                    percentage: "32%",
                },
                TrafficSource {
                    name: "Search",
                    percentage: "23%",
                },
            ],
            top_content: vec![
                ContentItem {
                    title: "How to Build a Media Empire",
                    views: "1.2M views",
                },
                ContentItem {
                    title: "Social Media Strategy 2024",
                    views: "890K views",
                },
                ContentItem {
                    title: "Content Creation Tips",
                    views: "654K views",
                },
            ],
        }
    }
}

/// A card in the content management section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    pub title: &'static str,
    pub count: &'static str,
    pub description: &'static str,
    pub actions: [&'static str; 2],
}

impl ContentCard {
    pub fn samples() -> Vec<Self> {
        vec![
            ContentCard {
                title: "Recent Posts",
                count: "24 posts",
                description: "Manage your latest blog posts, videos, and social media content.",
                actions: ["View All", "Create New"],
            },
            ContentCard {
                title: "Scheduled Content",
                count: "8 scheduled",
                description: "Review and manage your upcoming content releases.",
                actions: ["View Schedule", "Add Content"],
            },
        ]
    }
}

/// A member of the team roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

impl TeamMember {
    pub fn roster() -> Vec<Self> {
        vec![
            TeamMember {
                name: "Sarah Johnson",
                role: "Content Manager",
            },
            TeamMember {
                name: "Mike Chen",
                role: "Video Editor",
            },
            TeamMember {
                name: "Emily Davis",
                role: "Social Media Specialist",
            },
            TeamMember {
                name: "Alex Rodriguez",
                role: "Marketing Director",
            },
        ]
    }
}

/// Lines shown when the notifications header button is clicked
pub const INBOX_MESSAGES: [&str; 3] = [
    "New comment on your latest post",
    "Campaign performance report ready",
    "Team member Sarah uploaded new content",
];

/// Fallback when a card kind has no detail text
pub const DEFAULT_STATS_DETAILS: &str = "Stats details loaded successfully!";

/// Detail text shown when a stats card is clicked
pub fn stats_details(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Views => {
            "Detailed view analytics showing traffic sources, popular content, and user engagement patterns."
        }
        CardKind::Engagement => {
            "Comprehensive engagement metrics including likes, shares, comments, and interaction rates."
        }
        CardKind::Revenue => {
            "Revenue breakdown by source, including advertising, sponsorships, and direct sales."
        }
        CardKind::Campaigns => {
            "Active campaign performance with reach, conversion rates, and ROI analysis."
        }
        CardKind::General => DEFAULT_STATS_DETAILS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_sample_shares_sum_to_hundred() {
        let panel = AnalyticsPanel::sample();
        let total: u32 = panel
            .traffic_sources
            .iter()
            .map(|s| s.percentage.trim_end_matches('%').parse::<u32>().unwrap())
            .sum();
        assert_eq!(total, 100);
        assert_eq!(panel.top_content.len(), 3);
    }

    #[test]
    fn test_general_card_uses_fallback_details() {
        assert_eq!(stats_details(CardKind::General), DEFAULT_STATS_DETAILS);
        assert!(stats_details(CardKind::Revenue).starts_with("Revenue breakdown"));
    }
}
