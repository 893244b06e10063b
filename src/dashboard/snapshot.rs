//! Serializable dashboard state

use serde::Serialize;

use super::controller::{ChartCanvas, StatCard, TeamCard};
use super::section::{Section, SectionPanels};
use crate::data::{Filter, SeriesKind};
use crate::notifications::Notification;

/// Point-in-time copy of everything a front-end needs to draw the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub now_ms: u64,
    pub current_section: Section,
    pub active_section: Option<Section>,
    pub highlighted_nav: Option<String>,
    /// Loading overlay visible
    pub busy: bool,
    pub filter: Filter,
    pub chart: String,
    pub series: SeriesKind,
    pub stats: Vec<StatCard>,
    pub team: Vec<TeamCard>,
    pub pressed_ctas: Vec<String>,
    pub panels: SectionPanels,
    pub canvas: Option<ChartCanvas>,
    pub notifications: Vec<Notification>,
    pub pending_timers: usize,
}

#[cfg(test)]
mod tests {
    use crate::dashboard::Dashboard;

    #[test]
    fn test_snapshot_json_shape() {
        let mut dashboard = Dashboard::default();
        dashboard.settle();
        dashboard.set_chart("revenue");

        let json = serde_json::to_value(dashboard.snapshot()).unwrap();
        assert_eq!(json["active_section"], "overview");
        assert_eq!(json["filter"], "all");
        assert_eq!(json["series"], "revenue");
        assert_eq!(json["stats"][0]["kind"], "views");
        assert_eq!(json["canvas"]["frame"]["title"], "Revenue Performance");
        assert_eq!(json["canvas"]["frame"]["vertices"].as_array().unwrap().len(), 12);
        assert!(json["canvas"].get("display").is_none());
        assert_eq!(json["pending_timers"], 0);
    }
}
