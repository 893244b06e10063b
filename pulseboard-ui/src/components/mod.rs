//! UI Components

pub mod chart;
pub mod cta;
pub mod loading;
pub mod nav;
pub mod stats_card;
pub mod team_card;
pub mod toast;

pub use chart::Chart;
pub use cta::CtaButton;
pub use loading::LoadingOverlay;
pub use nav::{HeaderActions, Nav};
pub use stats_card::{FilterBar, StatsGrid};
pub use team_card::TeamGrid;
pub use toast::Toast;
