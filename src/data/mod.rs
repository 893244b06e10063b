//! Static Sample Data
//!
//! Everything the dashboard displays is hardcoded here:
//! - `stats`: the filter-keyed stats table and stat card kinds
//! - `series`: the three chart series
//! - `catalog`: placeholder section content, detail texts, team roster

pub mod catalog;
pub mod series;
pub mod stats;

pub use catalog::{
    stats_details, AnalyticsPanel, ContentCard, ContentItem, TeamMember, TrafficSource,
    INBOX_MESSAGES,
};
pub use series::SeriesKind;
pub use stats::{CardKind, Filter, StatsRow};
