//! Realtime Driver
//!
//! Maps wall-clock time onto the dashboard timeline with tokio timers, so a
//! session plays out at the pace a user would see it.

use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::dashboard::{Dashboard, UiAction};

/// Drives a dashboard in real time
pub struct RealtimeDriver<'a> {
    dashboard: &'a mut Dashboard,
    /// Wall-clock milliseconds per virtual millisecond
    pace: f64,
}

impl<'a> RealtimeDriver<'a> {
    pub fn new(dashboard: &'a mut Dashboard) -> Self {
        Self {
            dashboard,
            pace: 1.0,
        }
    }

    /// Play faster (< 1.0) or slower (> 1.0) than real time
    pub fn with_pace(mut self, pace: f64) -> Self {
        self.pace = pace.max(0.0);
        self
    }

    pub fn dashboard(&self) -> &Dashboard {
        &*self.dashboard
    }

    /// Let `ms` virtual milliseconds pass, sleeping between deadlines
    pub async fn wait(&mut self, ms: u64) {
        let until = self.dashboard.now().saturating_add(ms);

        loop {
            let now = self.dashboard.now();
            let step_to = match self.dashboard.next_deadline() {
                Some(due) if due <= until => due,
                _ => until,
            };

            self.sleep_for(step_to.saturating_sub(now)).await;
            self.log_transition(|d| d.advance(step_to.saturating_sub(now)));

            if self.dashboard.now() >= until {
                break;
            }
        }
    }

    /// Run until nothing is scheduled
    pub async fn settle(&mut self) {
        while let Some(due) = self.dashboard.next_deadline() {
            let wait = due.saturating_sub(self.dashboard.now());
            self.wait(wait).await;
        }
    }

    /// Play a script: `wait` actions sleep, everything else applies at once
    pub async fn play(&mut self, actions: &[UiAction]) {
        for action in actions {
            match action {
                UiAction::Wait { ms } => self.wait(*ms).await,
                other => self.log_transition(|d| d.dispatch(other)),
            }
        }
        self.settle().await;
    }

    async fn sleep_for(&self, virtual_ms: u64) {
        let real_ms = (virtual_ms as f64 * self.pace).round() as u64;
        if real_ms > 0 {
            sleep(Duration::from_millis(real_ms)).await;
        }
    }

    fn log_transition(&mut self, f: impl FnOnce(&mut Dashboard)) {
        let section_before = self.dashboard.active_section();
        let busy_before = self.dashboard.is_busy();
        let toasts_before = self.dashboard.notifications().len();

        f(&mut *self.dashboard);

        let d = &*self.dashboard;
        if d.active_section() != section_before {
            info!(
                t = d.now(),
                "Active section: {}",
                d.active_section().map(|s| s.as_str()).unwrap_or("none")
            );
        }
        if d.is_busy() != busy_before {
            info!(t = d.now(), "Loading overlay {}", if d.is_busy() { "shown" } else { "hidden" });
        }
        if d.notifications().len() > toasts_before {
            if let Some(toast) = d.notifications().last() {
                info!(t = d.now(), kind = ?toast.kind, "Notification: {}", toast.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Section;

    #[tokio::test(start_paused = true)]
    async fn test_wait_fires_due_events() {
        let mut dashboard = Dashboard::default();
        let mut driver = RealtimeDriver::new(&mut dashboard);

        driver.wait(499).await;
        assert_eq!(driver.dashboard().active_section(), None);
        driver.wait(1).await;
        assert_eq!(driver.dashboard().active_section(), Some(Section::Overview));
        assert_eq!(driver.dashboard().now(), 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_script() {
        let mut dashboard = Dashboard::default();
        let actions = vec![
            UiAction::Wait { ms: 500 },
            UiAction::Navigate {
                section: "team".to_string(),
            },
            UiAction::ClickTeamCard { index: 1 },
        ];

        RealtimeDriver::new(&mut dashboard)
            .with_pace(0.5)
            .play(&actions)
            .await;

        assert_eq!(dashboard.active_section(), Some(Section::Team));
        assert!(dashboard.notifications().is_empty());
        assert!(dashboard.next_deadline().is_none());
    }
}
