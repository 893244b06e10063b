//! Toast Notifications
//!
//! Lifecycle of the toasts shown in the top-right corner. A toast slides in
//! shortly after it is created, stays for a while, slides out, and is then
//! removed. The timing is driven by the owner through `NotificationTimer`
//! events; this module only decides what each event does.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Icon name shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Info => "info-circle",
        }
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Created but still off-screen
    Entering,
    Shown,
    /// Sliding out, removal pending
    Leaving,
}

pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: Phase,
}

/// Delayed follow-ups a notification needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTimer {
    SlideIn(NotificationId),
    Expire(NotificationId),
    Remove(NotificationId),
}

/// Delays for the notification lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub slide_in_ms: u64,
    pub dismiss_after_ms: u64,
    pub slide_out_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            slide_in_ms: 100,
            dismiss_after_ms: 5000,
            slide_out_ms: 300,
        }
    }
}

/// The live stack of notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    next_id: NotificationId,
    live: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 1,
            live: Vec::new(),
        }
    }

    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    /// Add a notification. Returns its id and the timers to schedule as
    /// `(delay_ms, timer)` pairs.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> (NotificationId, Vec<(u64, NotificationTimer)>) {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let message = message.into();
        debug!("Notification {} ({:?}): {}", id, kind, message);
        self.live.push(Notification {
            id,
            kind,
            message,
            phase: Phase::Entering,
        });

        let timers = vec![
            (self.timings.slide_in_ms, NotificationTimer::SlideIn(id)),
            (self.timings.dismiss_after_ms, NotificationTimer::Expire(id)),
        ];
        (id, timers)
    }

    /// Start dismissing a notification (close button).
    ///
    /// Returns the removal timer, or `None` when the notification is gone.
    pub fn close(&mut self, id: NotificationId) -> Option<(u64, NotificationTimer)> {
        let notification = self.live.iter_mut().find(|n| n.id == id)?;
        notification.phase = Phase::Leaving;
        Some((self.timings.slide_out_ms, NotificationTimer::Remove(id)))
    }

    /// Apply a fired timer. Returns a follow-up timer, if any.
    ///
    /// Timers for notifications that no longer exist do nothing.
    pub fn on_timer(&mut self, timer: NotificationTimer) -> Option<(u64, NotificationTimer)> {
        match timer {
            NotificationTimer::SlideIn(id) => {
                let notification = self.live.iter_mut().find(|n| n.id == id)?;
                if notification.phase == Phase::Entering {
                    notification.phase = Phase::Shown;
                }
                None
            }
            NotificationTimer::Expire(id) => self.close(id),
            NotificationTimer::Remove(id) => {
                self.live.retain(|n| n.id != id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(NotificationTimings::default())
    }

    #[test]
    fn test_push_schedules_slide_in_and_expiry() {
        let mut center = center();
        let (id, timers) = center.push(NotificationKind::Success, "Saved");

        assert_eq!(
            timers,
            vec![
                (100, NotificationTimer::SlideIn(id)),
                (5000, NotificationTimer::Expire(id)),
            ]
        );
        assert_eq!(center.get(id).unwrap().phase, Phase::Entering);
    }

    #[test]
    fn test_lifecycle() {
        let mut center = center();
        let (id, _) = center.push(NotificationKind::Info, "hello");

        assert_eq!(center.on_timer(NotificationTimer::SlideIn(id)), None);
        assert_eq!(center.get(id).unwrap().phase, Phase::Shown);

        let follow_up = center.on_timer(NotificationTimer::Expire(id));
        assert_eq!(follow_up, Some((300, NotificationTimer::Remove(id))));
        assert_eq!(center.get(id).unwrap().phase, Phase::Leaving);

        center.on_timer(NotificationTimer::Remove(id));
        assert!(center.live().is_empty());
    }

    #[test]
    fn test_timers_for_removed_notifications_are_ignored() {
        let mut center = center();
        let (id, _) = center.push(NotificationKind::Info, "bye");
        center.close(id);
        center.on_timer(NotificationTimer::Remove(id));

        assert_eq!(center.on_timer(NotificationTimer::SlideIn(id)), None);
        assert_eq!(center.on_timer(NotificationTimer::Expire(id)), None);
        assert_eq!(center.close(id), None);
    }

    #[test]
    fn test_late_slide_in_does_not_undo_close() {
        let mut center = center();
        let (id, _) = center.push(NotificationKind::Error, "oops");
        center.close(id);
        center.on_timer(NotificationTimer::SlideIn(id));

        assert_eq!(center.get(id).unwrap().phase, Phase::Leaving);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut center = center();
        let (a, _) = center.push(NotificationKind::Info, "a");
        let (b, _) = center.push(NotificationKind::Info, "b");
        assert_ne!(a, b);
        assert_eq!(center.live().len(), 2);
    }
}
