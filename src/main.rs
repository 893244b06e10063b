//! Pulseboard demo session
//!
//! Plays a short scripted user session against the dashboard in real time
//! and logs what a user would see.

use pulseboard::{init_logging, Config, Dashboard, HeaderAction, RealtimeDriver, UiAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Pulseboard v{}", env!("CARGO_PKG_VERSION"));

    let mut dashboard = Dashboard::new(&config);
    let session = demo_session();

    RealtimeDriver::new(&mut dashboard).play(&session).await;

    let snapshot = dashboard.snapshot();
    tracing::info!(
        "Session finished at t={}ms: section={:?}, filter={}, chart={}",
        snapshot.now_ms,
        snapshot.active_section,
        snapshot.filter,
        snapshot.chart
    );
    tracing::info!("Stats: {}", dashboard.stat_values().join(" | "));

    Ok(())
}

fn demo_session() -> Vec<UiAction> {
    vec![
        UiAction::Wait { ms: 600 },
        UiAction::SetFilter {
            filter: "month".to_string(),
        },
        UiAction::SetChart {
            chart: "revenue".to_string(),
        },
        UiAction::Wait { ms: 300 },
        UiAction::ClickStatsCard { index: 1 },
        UiAction::Navigate {
            section: "analytics".to_string(),
        },
        // dropped: the analytics transition is still in progress
        UiAction::Navigate {
            section: "team".to_string(),
        },
        UiAction::Wait { ms: 600 },
        UiAction::Navigate {
            section: "team".to_string(),
        },
        UiAction::Wait { ms: 600 },
        UiAction::ClickTeamCard { index: 0 },
        UiAction::ClickCta {
            label: "Create Campaign".to_string(),
        },
        UiAction::ClickAction {
            button: HeaderAction::Notifications,
        },
    ]
}
