//! Stats table keyed by time-range filter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-range selector for the stats cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Month,
    Week,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Month, Filter::Week];

    /// Parse a filter key, `None` if unrecognized
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Filter::All),
            "month" => Some(Filter::Month),
            "week" => Some(Filter::Week),
            _ => None,
        }
    }

    /// Resolve a filter key, falling back to `All`
    pub fn resolve(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Month => "month",
            Filter::Week => "week",
        }
    }

    /// The row of display values for this filter
    pub fn row(&self) -> StatsRow {
        match self {
            Filter::All => StatsRow {
                views: "2.4M",
                engagement: "8.7%",
                revenue: "$45.2K",
                campaigns: "12",
            },
            Filter::Month => StatsRow {
                views: "890K",
                engagement: "9.2%",
                revenue: "$18.7K",
                campaigns: "8",
            },
            Filter::Week => StatsRow {
                views: "210K",
                engagement: "10.1%",
                revenue: "$4.2K",
                campaigns: "3",
            },
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four display strings shown on the stats cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    pub views: &'static str,
    pub engagement: &'static str,
    pub revenue: &'static str,
    pub campaigns: &'static str,
}

impl StatsRow {
    /// Value for a card kind. `General` cards have no stat.
    pub fn value_for(&self, kind: CardKind) -> Option<&'static str> {
        match kind {
            CardKind::Views => Some(self.views),
            CardKind::Engagement => Some(self.engagement),
            CardKind::Revenue => Some(self.revenue),
            CardKind::Campaigns => Some(self.campaigns),
            CardKind::General => None,
        }
    }

    /// Values in card order
    pub fn values(&self) -> [&'static str; 4] {
        [self.views, self.engagement, self.revenue, self.campaigns]
    }
}

/// Category of a stats card, fixed when the card is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Views,
    Engagement,
    Revenue,
    Campaigns,
    General,
}

impl CardKind {
    /// Card order on the overview grid
    pub const STATS: [CardKind; 4] = [
        CardKind::Views,
        CardKind::Engagement,
        CardKind::Revenue,
        CardKind::Campaigns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Views => "Total Views",
            CardKind::Engagement => "Engagement Rate",
            CardKind::Revenue => "Revenue",
            CardKind::Campaigns => "Active Campaigns",
            CardKind::General => "Overview",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_rows() {
        assert_eq!(
            Filter::All.row().values(),
            ["2.4M", "8.7%", "$45.2K", "12"]
        );
        assert_eq!(
            Filter::Month.row().values(),
            ["890K", "9.2%", "$18.7K", "8"]
        );
        assert_eq!(
            Filter::Week.row().values(),
            ["210K", "10.1%", "$4.2K", "3"]
        );
    }

    #[test]
    fn test_unknown_filter_resolves_to_all() {
        assert_eq!(Filter::parse("year"), None);
        assert_eq!(Filter::resolve("year"), Filter::All);
        assert_eq!(Filter::resolve(""), Filter::All);
        assert_eq!(Filter::resolve("week"), Filter::Week);
    }

    #[test]
    fn test_value_for_card_kind() {
        let row = Filter::Week.row();
        assert_eq!(row.value_for(CardKind::Campaigns), Some("3"));
        assert_eq!(row.value_for(CardKind::General), None);
    }
}
