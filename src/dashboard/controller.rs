//! Dashboard Controller
//!
//! The single application-state object. Front-ends construct one at startup,
//! forward user interactions to it, and let time pass by calling `advance`.
//!
//! Section changes are serialized by a busy flag: a request that arrives while
//! a transition (or a call-to-action) is in progress is dropped, not queued.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::events::{HeaderAction, PressTarget, TimerEvent, UiAction};
use super::section::{Section, SectionPanels};
use super::snapshot::DashboardSnapshot;
use crate::chart::{ChartFrame, ChartRenderer, DisplayList};
use crate::config::{Config, TimingConfig};
use crate::data::{stats_details, CardKind, Filter, SeriesKind, TeamMember, INBOX_MESSAGES};
use crate::notifications::{
    Notification, NotificationCenter, NotificationId, NotificationKind, NotificationTimer,
};
use crate::timeline::Timeline;

/// A stats card on the overview grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub kind: CardKind,
    pub value: &'static str,
    /// Scale-pulse in progress, value about to change
    pub pulsing: bool,
    /// Click feedback in progress
    pub pressed: bool,
}

/// A team member card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub member: TeamMember,
    pub pressed: bool,
}

/// The chart canvas and what was last drawn on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartCanvas {
    pub width: f64,
    pub height: f64,
    /// Bumped on every redraw
    pub revision: u64,
    pub frame: Option<ChartFrame>,
    #[serde(skip)]
    pub display: DisplayList,
}

impl ChartCanvas {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            revision: 0,
            frame: None,
            display: DisplayList::new(),
        }
    }
}

/// Dashboard state machine
#[derive(Debug, Clone)]
pub struct Dashboard {
    timings: TimingConfig,
    renderer: ChartRenderer,
    timeline: Timeline<TimerEvent>,
    current_section: Section,
    active_section: Option<Section>,
    highlighted_nav: Option<String>,
    busy: bool,
    filter: Filter,
    chart_name: String,
    stat_cards: Vec<StatCard>,
    team: Vec<TeamCard>,
    pressed_ctas: BTreeSet<String>,
    panels: SectionPanels,
    canvas: Option<ChartCanvas>,
    notifications: NotificationCenter,
}

impl Dashboard {
    /// Build the dashboard and start it up.
    ///
    /// Startup requests the overview section and schedules the first chart
    /// draw; call `advance` or `settle` to let them complete.
    pub fn new(config: &Config) -> Self {
        let row = Filter::default().row();
        let stat_cards = CardKind::STATS
            .iter()
            .map(|&kind| StatCard {
                kind,
                value: row.value_for(kind).unwrap_or_default(),
                pulsing: false,
                pressed: false,
            })
            .collect();

        let team = TeamMember::roster()
            .into_iter()
            .map(|member| TeamCard {
                member,
                pressed: false,
            })
            .collect();

        let mut dashboard = Self {
            timings: config.timings,
            renderer: ChartRenderer::new(config.chart.style()),
            timeline: Timeline::new(),
            current_section: Section::Overview,
            active_section: None,
            highlighted_nav: Some(Section::Overview.as_str().to_string()),
            busy: false,
            filter: Filter::default(),
            chart_name: SeriesKind::default().as_str().to_string(),
            stat_cards,
            team,
            pressed_ctas: BTreeSet::new(),
            panels: SectionPanels::default(),
            canvas: Some(ChartCanvas::new(config.chart.width, config.chart.height)),
            notifications: NotificationCenter::new(config.timings.notifications()),
        };

        dashboard
            .timeline
            .schedule(dashboard.timings.chart_init_ms, TimerEvent::InitialChart);
        dashboard.show_section(Section::Overview.as_str());

        info!("Dashboard initialized");
        dashboard
    }

    // --- Sections ---

    /// Switch to the section `id`.
    ///
    /// Dropped while busy. Otherwise every section is deactivated at once and
    /// the target is activated after the section delay. An unknown id leaves
    /// no section active. Returns whether the request was accepted.
    pub fn show_section(&mut self, id: &str) -> bool {
        if self.busy {
            debug!("Dropping transition to {:?}: busy", id);
            return false;
        }

        self.busy = true;
        self.active_section = None;
        self.timeline.schedule(
            self.timings.section_delay_ms,
            TimerEvent::SectionReady {
                target: id.to_string(),
            },
        );
        debug!("Transition to {:?} started", id);
        true
    }

    /// Navigation item click: highlight the item, then request the section.
    ///
    /// The highlight moves even when the transition itself is dropped.
    pub fn navigate(&mut self, id: &str) -> bool {
        self.highlighted_nav = Some(id.to_string());
        self.show_section(id)
    }

    fn finish_transition(&mut self, target: &str) {
        match Section::parse(target) {
            Some(section) => {
                self.active_section = Some(section);
                self.current_section = section;
                self.panels.load(section);
                info!("Section changed to: {}", section);
            }
            None => debug!("No section named {:?}, nothing activated", target),
        }
        self.busy = false;
    }

    // --- Stats ---

    /// Select a time-range filter. Unknown keys select `all`.
    ///
    /// Every stat card pulses and shows its new value after the pulse delay.
    pub fn set_filter(&mut self, key: &str) {
        self.filter = Filter::resolve(key);
        let row = self.filter.row();

        for (slot, card) in self.stat_cards.iter_mut().enumerate() {
            if let Some(value) = row.value_for(card.kind) {
                card.pulsing = true;
                self.timeline
                    .schedule(self.timings.pulse_ms, TimerEvent::StatSettled { slot, value });
            }
        }

        info!("Filter changed to: {}", self.filter);
    }

    // --- Chart ---

    /// Select the chart series and redraw. Unknown names draw `views` data.
    pub fn set_chart(&mut self, name: &str) {
        self.chart_name = name.to_string();
        self.redraw_chart();
        info!("Chart changed to: {}", name);
    }

    /// Attach (or replace) the chart canvas and draw on it
    pub fn attach_canvas(&mut self, width: f64, height: f64) {
        self.canvas = Some(ChartCanvas::new(width, height));
        self.redraw_chart();
    }

    /// Drop the canvas; chart redraws are skipped until one is attached
    pub fn detach_canvas(&mut self) {
        self.canvas = None;
    }

    /// Canvas size changed. Redraws only while the overview is current.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        canvas.width = width;
        canvas.height = height;

        if self.current_section == Section::Overview {
            self.redraw_chart();
        }
    }

    fn redraw_chart(&mut self) {
        let name = self.chart_name.clone();
        self.draw_chart(&name);
    }

    /// Render `name` onto the canvas without touching the selected chart
    fn draw_chart(&mut self, name: &str) {
        let Some(canvas) = self.canvas.as_mut() else {
            debug!("No chart canvas, skipping redraw");
            return;
        };

        let mut display = DisplayList::new();
        let frame = self
            .renderer
            .render(&mut display, name, canvas.width, canvas.height);
        canvas.display = display;
        canvas.frame = Some(frame);
        canvas.revision += 1;
    }

    // --- Cards and buttons ---

    /// Stats card click: press feedback and a notification with the card's
    /// details. Out-of-range indexes are ignored.
    pub fn click_stats_card(&mut self, index: usize) -> Option<NotificationId> {
        let card = self.stat_cards.get_mut(index)?;
        card.pressed = true;
        let details = stats_details(card.kind);

        self.timeline.schedule(
            self.timings.press_ms,
            TimerEvent::Released(PressTarget::StatsCard(index)),
        );
        Some(self.notify(NotificationKind::Info, details))
    }

    /// Team card click: press feedback and a notification naming the member.
    ///
    /// Once the team section has loaded, cards carry a second details
    /// handler, so each click shows the details notification twice.
    pub fn click_team_card(&mut self, index: usize) -> Option<NotificationId> {
        let card = self.team.get_mut(index)?;
        card.pressed = true;
        let message = format!(
            "Viewing details for {} ({})",
            card.member.name, card.member.role
        );

        self.timeline.schedule(
            self.timings.press_ms,
            TimerEvent::Released(PressTarget::TeamCard(index)),
        );
        let id = self.notify(NotificationKind::Info, message.clone());
        if self.panels.team_enhanced {
            self.notify(NotificationKind::Info, message);
        }
        Some(id)
    }

    /// Call-to-action click.
    ///
    /// Shows the loading overlay (which sets the busy flag) for the CTA
    /// latency, then reports success.
    pub fn click_cta(&mut self, label: &str) {
        let label = label.trim().to_string();
        self.pressed_ctas.insert(label.clone());
        self.timeline.schedule(
            self.timings.press_ms,
            TimerEvent::Released(PressTarget::Cta(label.clone())),
        );

        self.busy = true;
        self.timeline
            .schedule(self.timings.cta_ms, TimerEvent::CtaComplete { label });
    }

    /// Header button click
    pub fn click_action(&mut self, action: HeaderAction) -> NotificationId {
        match action {
            HeaderAction::Notifications => {
                self.notify(NotificationKind::Info, INBOX_MESSAGES.join("\n"))
            }
            HeaderAction::Profile => self.notify(NotificationKind::Info, "Profile settings opened"),
        }
    }

    // --- Notifications ---

    /// Show a toast
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let (id, timers) = self.notifications.push(kind, message);
        for (delay, timer) in timers {
            self.timeline.schedule(delay, TimerEvent::Notification(timer));
        }
        id
    }

    /// Close button on a toast
    pub fn close_notification(&mut self, id: NotificationId) {
        if let Some((delay, timer)) = self.notifications.close(id) {
            self.timeline.schedule(delay, TimerEvent::Notification(timer));
        }
    }

    // --- Time ---

    /// Let `ms` milliseconds pass, firing every event that falls due
    pub fn advance(&mut self, ms: u64) {
        let until = self.timeline.now().saturating_add(ms);
        while let Some((_, event)) = self.timeline.pop_due(until) {
            self.on_timer(event);
        }
        self.timeline.advance_clock(until);
    }

    /// Run until nothing is scheduled
    pub fn settle(&mut self) {
        while let Some(due) = self.timeline.next_deadline() {
            let wait = due.saturating_sub(self.timeline.now());
            self.advance(wait);
        }
    }

    /// Virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    /// When the next scheduled event is due
    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    fn on_timer(&mut self, event: TimerEvent) {
        debug!("Timer fired at t={}ms: {:?}", self.timeline.now(), event);
        match event {
            TimerEvent::SectionReady { target } => self.finish_transition(&target),
            // the startup draw is always the default series
            TimerEvent::InitialChart => self.draw_chart(SeriesKind::default().as_str()),
            TimerEvent::StatSettled { slot, value } => {
                if let Some(card) = self.stat_cards.get_mut(slot) {
                    card.value = value;
                    card.pulsing = false;
                }
            }
            TimerEvent::Released(target) => self.release(target),
            TimerEvent::CtaComplete { label } => {
                self.busy = false;
                self.notify(
                    NotificationKind::Success,
                    format!("{} action completed!", label),
                );
            }
            TimerEvent::Notification(timer) => self.on_notification_timer(timer),
        }
    }

    fn release(&mut self, target: PressTarget) {
        match target {
            PressTarget::StatsCard(index) => {
                if let Some(card) = self.stat_cards.get_mut(index) {
                    card.pressed = false;
                }
            }
            PressTarget::TeamCard(index) => {
                if let Some(card) = self.team.get_mut(index) {
                    card.pressed = false;
                }
            }
            PressTarget::Cta(label) => {
                self.pressed_ctas.remove(&label);
            }
        }
    }

    fn on_notification_timer(&mut self, timer: NotificationTimer) {
        if let Some((delay, next)) = self.notifications.on_timer(timer) {
            self.timeline.schedule(delay, TimerEvent::Notification(next));
        }
    }

    // --- Actions ---

    /// Apply a user interaction
    pub fn dispatch(&mut self, action: &UiAction) {
        match action {
            UiAction::Navigate { section } => {
                self.navigate(section);
            }
            UiAction::ShowSection { section } => {
                self.show_section(section);
            }
            UiAction::SetFilter { filter } => self.set_filter(filter),
            UiAction::SetChart { chart } => self.set_chart(chart),
            UiAction::ClickStatsCard { index } => {
                self.click_stats_card(*index);
            }
            UiAction::ClickTeamCard { index } => {
                self.click_team_card(*index);
            }
            UiAction::ClickCta { label } => self.click_cta(label),
            UiAction::ClickAction { button } => {
                self.click_action(*button);
            }
            UiAction::CloseNotification { id } => self.close_notification(*id),
            UiAction::ResizeCanvas { width, height } => self.resize_canvas(*width, *height),
            UiAction::Wait { ms } => self.advance(*ms),
        }
    }

    // --- Accessors ---

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    /// The section currently shown, `None` during a transition
    pub fn active_section(&self) -> Option<Section> {
        self.active_section
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == Some(section)
    }

    pub fn highlighted_nav(&self) -> Option<&str> {
        self.highlighted_nav.as_deref()
    }

    /// Busy flag; the loading overlay is shown exactly while this is set
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Chart name as last requested
    pub fn chart_name(&self) -> &str {
        &self.chart_name
    }

    /// Series actually plotted for the current chart name
    pub fn series(&self) -> SeriesKind {
        SeriesKind::resolve(&self.chart_name)
    }

    pub fn stat_cards(&self) -> &[StatCard] {
        &self.stat_cards
    }

    /// Displayed stat values in card order
    pub fn stat_values(&self) -> Vec<&'static str> {
        self.stat_cards.iter().map(|card| card.value).collect()
    }

    pub fn team(&self) -> &[TeamCard] {
        &self.team
    }

    pub fn is_cta_pressed(&self, label: &str) -> bool {
        self.pressed_ctas.contains(label.trim())
    }

    pub fn panels(&self) -> &SectionPanels {
        &self.panels
    }

    pub fn canvas(&self) -> Option<&ChartCanvas> {
        self.canvas.as_ref()
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.live()
    }

    /// Serializable view of the whole state
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            now_ms: self.now(),
            current_section: self.current_section,
            active_section: self.active_section,
            highlighted_nav: self.highlighted_nav.clone(),
            busy: self.busy,
            filter: self.filter,
            chart: self.chart_name.clone(),
            series: self.series(),
            stats: self.stat_cards.clone(),
            team: self.team.clone(),
            pressed_ctas: self.pressed_ctas.iter().cloned().collect(),
            panels: self.panels.clone(),
            canvas: self.canvas.clone(),
            notifications: self.notifications.live().to_vec(),
            pending_timers: self.timeline.pending(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Phase;

    /// A dashboard that has finished starting up
    fn ready() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.settle();
        dashboard
    }

    #[test]
    fn test_startup() {
        let mut dashboard = Dashboard::default();
        assert!(dashboard.is_busy());
        assert_eq!(dashboard.active_section(), None);
        assert_eq!(dashboard.canvas().unwrap().revision, 0);

        dashboard.advance(100);
        assert_eq!(dashboard.canvas().unwrap().revision, 1);
        assert!(dashboard.is_busy());

        dashboard.advance(400);
        assert!(!dashboard.is_busy());
        assert_eq!(dashboard.active_section(), Some(Section::Overview));
        assert_eq!(dashboard.stat_values(), vec!["2.4M", "8.7%", "$45.2K", "12"]);
    }

    #[test]
    fn test_every_section_becomes_the_only_active_one() {
        for section in Section::ALL {
            let mut dashboard = ready();
            assert!(dashboard.show_section(section.as_str()));
            assert!(dashboard.is_busy());
            assert_eq!(dashboard.active_section(), None);

            dashboard.settle();
            let active: Vec<_> = Section::ALL
                .iter()
                .filter(|s| dashboard.is_active(**s))
                .collect();
            assert_eq!(active, vec![&section]);
            assert_eq!(dashboard.current_section(), section);
            assert!(!dashboard.is_busy());
        }
    }

    #[test]
    fn test_transition_waits_for_section_delay() {
        let mut dashboard = ready();
        dashboard.show_section("analytics");

        dashboard.advance(499);
        assert_eq!(dashboard.active_section(), None);
        dashboard.advance(1);
        assert_eq!(dashboard.active_section(), Some(Section::Analytics));
    }

    #[test]
    fn test_second_request_while_busy_is_dropped() {
        let mut dashboard = ready();
        assert!(dashboard.show_section("analytics"));
        dashboard.advance(200);
        assert!(!dashboard.show_section("team"));

        dashboard.settle();
        assert_eq!(dashboard.active_section(), Some(Section::Analytics));
        assert!(!dashboard.panels().team_enhanced);
    }

    #[test]
    fn test_navigate_highlights_even_when_dropped() {
        let mut dashboard = ready();
        dashboard.navigate("content");
        assert!(!dashboard.navigate("team"));

        assert_eq!(dashboard.highlighted_nav(), Some("team"));
        dashboard.settle();
        assert_eq!(dashboard.current_section(), Section::Content);
    }

    #[test]
    fn test_unknown_section_leaves_nothing_active() {
        let mut dashboard = ready();
        dashboard.show_section("analytics");
        dashboard.settle();

        assert!(dashboard.show_section("billing"));
        dashboard.settle();

        assert_eq!(dashboard.active_section(), None);
        assert_eq!(dashboard.current_section(), Section::Analytics);
        assert!(!dashboard.is_busy());
    }

    #[test]
    fn test_section_content_is_loaded() {
        let mut dashboard = ready();
        assert!(dashboard.panels().analytics.is_none());

        dashboard.show_section("analytics");
        dashboard.settle();
        let analytics = dashboard.panels().analytics.as_ref().unwrap();
        assert_eq!(analytics.top_content[0].title, "How to Build a Media Empire");

        dashboard.show_section("content");
        dashboard.settle();
        assert_eq!(dashboard.panels().content.as_ref().unwrap()[1].count, "8 scheduled");

        dashboard.show_section("team");
        dashboard.settle();
        assert!(dashboard.panels().team_enhanced);
    }

    #[test]
    fn test_set_filter_updates_every_card() {
        for filter in Filter::ALL {
            let mut dashboard = ready();
            dashboard.set_filter(filter.as_str());
            assert!(dashboard.stat_cards().iter().all(|c| c.pulsing));

            dashboard.advance(100);
            assert_eq!(dashboard.stat_values(), filter.row().values().to_vec());
            assert!(dashboard.stat_cards().iter().all(|c| !c.pulsing));
            assert_eq!(dashboard.filter(), filter);
        }
    }

    #[test]
    fn test_week_filter_shows_three_campaigns() {
        let mut dashboard = ready();
        dashboard.set_filter("week");

        dashboard.advance(99);
        assert_eq!(dashboard.stat_cards()[3].value, "12");
        dashboard.advance(1);
        assert_eq!(dashboard.stat_cards()[3].value, "3");
    }

    #[test]
    fn test_unknown_filter_shows_all_row() {
        let mut dashboard = ready();
        dashboard.set_filter("week");
        dashboard.settle();

        dashboard.set_filter("decade");
        dashboard.settle();
        // the resolved filter is kept, not the raw key
        assert_eq!(dashboard.filter(), Filter::All);
        assert_eq!(dashboard.snapshot().filter, Filter::All);
        let json = serde_json::to_value(dashboard.snapshot()).unwrap();
        assert_eq!(json["filter"], "all");
        assert_eq!(dashboard.stat_values(), vec!["2.4M", "8.7%", "$45.2K", "12"]);
    }

    #[test]
    fn test_set_chart_redraws() {
        let mut dashboard = ready();
        let before = dashboard.canvas().unwrap().revision;

        dashboard.set_chart("engagement");
        let canvas = dashboard.canvas().unwrap();
        let frame = canvas.frame.as_ref().unwrap();

        assert_eq!(canvas.revision, before + 1);
        assert_eq!(frame.series, SeriesKind::Engagement);
        assert!(frame.title.contains("Engagement"));
        assert!(frame.title.ends_with("Performance"));
        assert!(canvas.display.texts().any(|t| t == "Engagement Performance"));
    }

    #[test]
    fn test_initial_draw_is_views_whatever_is_selected() {
        let mut dashboard = Dashboard::default();
        dashboard.set_chart("revenue");
        assert_eq!(
            dashboard.canvas().unwrap().frame.as_ref().unwrap().series,
            SeriesKind::Revenue
        );

        dashboard.advance(100);
        let canvas = dashboard.canvas().unwrap();
        assert_eq!(canvas.revision, 2);
        assert_eq!(canvas.frame.as_ref().unwrap().series, SeriesKind::Views);
        assert!(canvas.display.texts().any(|t| t == "Views Performance"));
        // the selection itself is untouched
        assert_eq!(dashboard.chart_name(), "revenue");
        assert_eq!(dashboard.series(), SeriesKind::Revenue);
    }

    #[test]
    fn test_unknown_chart_renders_views() {
        let mut dashboard = ready();
        dashboard.set_chart("followers");

        assert_eq!(dashboard.chart_name(), "followers");
        assert_eq!(dashboard.series(), SeriesKind::Views);
        let frame = dashboard.canvas().unwrap().frame.as_ref().unwrap();
        assert_eq!(frame.vertices.len(), 12);
        assert_eq!(frame.series, SeriesKind::Views);
    }

    #[test]
    fn test_missing_canvas_skips_redraw() {
        let mut dashboard = ready();
        dashboard.detach_canvas();
        dashboard.set_chart("revenue");
        dashboard.resize_canvas(100.0, 100.0);

        assert!(dashboard.canvas().is_none());
        assert_eq!(dashboard.chart_name(), "revenue");
    }

    #[test]
    fn test_resize_redraws_only_on_overview() {
        let mut dashboard = ready();
        dashboard.resize_canvas(600.0, 300.0);
        assert_eq!(dashboard.canvas().unwrap().revision, 2);
        assert_eq!(dashboard.canvas().unwrap().frame.as_ref().unwrap().plot.width, 520.0);

        dashboard.show_section("team");
        dashboard.settle();
        dashboard.resize_canvas(500.0, 300.0);
        assert_eq!(dashboard.canvas().unwrap().revision, 2);
        assert_eq!(dashboard.canvas().unwrap().width, 500.0);
    }

    #[test]
    fn test_stats_card_click() {
        let mut dashboard = ready();
        let id = dashboard.click_stats_card(2).unwrap();

        assert!(dashboard.stat_cards()[2].pressed);
        let notification = dashboard.notifications().iter().find(|n| n.id == id).unwrap();
        assert!(notification.message.starts_with("Revenue breakdown"));

        dashboard.advance(150);
        assert!(!dashboard.stat_cards()[2].pressed);
        assert!(dashboard.click_stats_card(9).is_none());
    }

    #[test]
    fn test_team_card_click() {
        let mut dashboard = ready();
        dashboard.click_team_card(0).unwrap();

        assert_eq!(
            dashboard.notifications()[0].message,
            "Viewing details for Sarah Johnson (Content Manager)"
        );
        assert_eq!(dashboard.notifications().len(), 1);
        assert!(dashboard.team()[0].pressed);
        dashboard.advance(150);
        assert!(!dashboard.team()[0].pressed);
    }

    #[test]
    fn test_team_card_click_after_team_loaded_notifies_twice() {
        let mut dashboard = ready();
        dashboard.show_section("team");
        dashboard.settle();
        assert!(dashboard.panels().team_enhanced);

        let id = dashboard.click_team_card(1).unwrap();
        let messages: Vec<_> = dashboard
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Viewing details for Mike Chen (Video Editor)",
                "Viewing details for Mike Chen (Video Editor)",
            ]
        );
        assert_eq!(dashboard.notifications()[0].id, id);

        // one press, released once
        dashboard.advance(150);
        assert!(!dashboard.team()[1].pressed);
    }

    #[test]
    fn test_cta_blocks_transitions_until_complete() {
        let mut dashboard = ready();
        dashboard.click_cta("  Create Campaign ");
        assert!(dashboard.is_busy());
        assert!(dashboard.is_cta_pressed("Create Campaign"));
        assert!(!dashboard.show_section("analytics"));

        dashboard.advance(150);
        assert!(!dashboard.is_cta_pressed("Create Campaign"));

        dashboard.advance(850);
        assert!(!dashboard.is_busy());
        let last = dashboard.notifications().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, "Create Campaign action completed!");

        assert!(dashboard.show_section("analytics"));
    }

    #[test]
    fn test_header_actions() {
        let mut dashboard = ready();
        dashboard.click_action(HeaderAction::Notifications);
        dashboard.click_action(HeaderAction::Profile);

        let messages: Vec<_> = dashboard
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages[0].lines().count(), 3);
        assert!(messages[0].contains("Campaign performance report ready"));
        assert_eq!(messages[1], "Profile settings opened");
    }

    #[test]
    fn test_notification_auto_dismiss() {
        let mut dashboard = ready();
        let id = dashboard.notify(NotificationKind::Info, "hello");

        dashboard.advance(100);
        assert_eq!(dashboard.notifications()[0].phase, Phase::Shown);

        dashboard.advance(4900);
        assert_eq!(dashboard.notifications()[0].phase, Phase::Leaving);

        dashboard.advance(299);
        assert_eq!(dashboard.notifications().len(), 1);
        dashboard.advance(1);
        assert!(dashboard.notifications().iter().all(|n| n.id != id));
    }

    #[test]
    fn test_closed_notification_ignores_auto_dismiss() {
        let mut dashboard = ready();
        let id = dashboard.notify(NotificationKind::Error, "failed");
        dashboard.close_notification(id);
        dashboard.advance(300);
        assert!(dashboard.notifications().is_empty());

        dashboard.settle();
        assert!(dashboard.notifications().is_empty());
    }

    #[test]
    fn test_dispatch_script() {
        let mut dashboard = ready();
        let script = vec![
            UiAction::SetChart {
                chart: "engagement".to_string(),
            },
            UiAction::Navigate {
                section: "analytics".to_string(),
            },
            UiAction::Navigate {
                section: "team".to_string(),
            },
            UiAction::Wait { ms: 500 },
            UiAction::SetFilter {
                filter: "week".to_string(),
            },
            UiAction::Wait { ms: 100 },
        ];
        for action in &script {
            dashboard.dispatch(action);
        }

        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.active_section, Some(Section::Analytics));
        assert_eq!(snapshot.highlighted_nav.as_deref(), Some("team"));
        assert_eq!(snapshot.stats[3].value, "3");
        assert_eq!(snapshot.series, SeriesKind::Engagement);
    }
}
