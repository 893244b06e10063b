//! Dashboard events
//!
//! `UiAction` is what a user can do (and what replay scripts contain);
//! `TimerEvent` is what the dashboard schedules on its timeline.

use serde::{Deserialize, Serialize};

use crate::notifications::{NotificationId, NotificationTimer};

/// Buttons in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
    Notifications,
    Profile,
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// Click on a navigation item
    Navigate { section: String },
    /// Section change without touching the nav highlight
    ShowSection { section: String },
    SetFilter { filter: String },
    SetChart { chart: String },
    ClickStatsCard { index: usize },
    ClickTeamCard { index: usize },
    ClickCta { label: String },
    ClickAction { button: HeaderAction },
    CloseNotification { id: NotificationId },
    ResizeCanvas { width: f64, height: f64 },
    /// Let time pass
    Wait { ms: u64 },
}

/// Something that gets pressed for a moment when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressTarget {
    StatsCard(usize),
    TeamCard(usize),
    Cta(String),
}

/// Delayed work scheduled by the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A section transition finishes; `target` is the raw requested id
    SectionReady { target: String },
    /// First chart draw after startup
    InitialChart,
    /// A pulsing stat card shows its new value
    StatSettled { slot: usize, value: &'static str },
    /// Click feedback ends
    Released(PressTarget),
    /// A call-to-action finishes
    CtaComplete { label: String },
    Notification(NotificationTimer),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_decode_from_json() {
        let script = r#"[
            {"action": "navigate", "section": "analytics"},
            {"action": "wait", "ms": 600},
            {"action": "set_filter", "filter": "week"},
            {"action": "click_action", "button": "profile"}
        ]"#;

        let actions: Vec<UiAction> = serde_json::from_str(script).unwrap();
        assert_eq!(
            actions,
            vec![
                UiAction::Navigate {
                    section: "analytics".to_string(),
                },
                UiAction::Wait { ms: 600 },
                UiAction::SetFilter {
                    filter: "week".to_string(),
                },
                UiAction::ClickAction {
                    button: HeaderAction::Profile,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<UiAction, _> = serde_json::from_str(r#"{"action": "dance"}"#);
        assert!(result.is_err());
    }
}
