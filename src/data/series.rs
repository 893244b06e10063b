//! Chart series sample data

use serde::{Deserialize, Serialize};
use std::fmt;

/// Samples per series (one per month)
pub const SERIES_LEN: usize = 12;

const VIEWS: [f64; SERIES_LEN] = [
    1200.0, 1800.0, 1600.0, 2100.0, 2400.0, 2200.0, 2800.0, 3200.0, 2900.0, 3400.0, 3800.0, 4200.0,
];

const ENGAGEMENT: [f64; SERIES_LEN] = [
    5.2, 6.1, 5.8, 7.2, 8.1, 7.9, 8.7, 9.2, 8.8, 9.5, 10.1, 10.8,
];

const REVENUE: [f64; SERIES_LEN] = [
    12000.0, 18000.0, 16000.0, 21000.0, 24000.0, 22000.0, 28000.0, 32000.0, 29000.0, 34000.0,
    38000.0, 42000.0,
];

/// One of the named chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Views,
    Engagement,
    Revenue,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::Views,
        SeriesKind::Engagement,
        SeriesKind::Revenue,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "views" => Some(SeriesKind::Views),
            "engagement" => Some(SeriesKind::Engagement),
            "revenue" => Some(SeriesKind::Revenue),
            _ => None,
        }
    }

    /// Resolve a series name, falling back to `Views`
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::Views => "views",
            SeriesKind::Engagement => "engagement",
            SeriesKind::Revenue => "revenue",
        }
    }

    pub fn samples(&self) -> &'static [f64; SERIES_LEN] {
        match self {
            SeriesKind::Views => &VIEWS,
            SeriesKind::Engagement => &ENGAGEMENT,
            SeriesKind::Revenue => &REVENUE,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
