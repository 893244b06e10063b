//! Global Application State
//!
//! One `Dashboard` in a signal, plus the browser timer that keeps its
//! timeline in step with wall-clock time.

use leptos::*;
use pulseboard::{Config, Dashboard};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The dashboard state machine
    pub dashboard: RwSignal<Dashboard>,
    /// `performance.now()` at the last timeline sync
    synced_at: StoredValue<f64>,
    /// Bumped whenever a timer is armed; older timers fire as no-ops
    timer_generation: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dashboard: create_rw_signal(Dashboard::new(&Config::default())),
        synced_at: store_value(performance_now()),
        timer_generation: store_value(0),
    };
    state.arm_timer();

    provide_context(state);
}

impl GlobalState {
    /// Apply a user interaction at the current wall-clock time
    pub fn act(&self, f: impl FnOnce(&mut Dashboard)) {
        self.sync();
        self.dashboard.update(f);
        self.arm_timer();
    }

    /// Advance the timeline by the wall-clock time since the last sync
    fn sync(&self) {
        let now = performance_now();
        let last = self.synced_at.get_value();
        let elapsed = (now - last).max(0.0).floor();
        if elapsed < 1.0 {
            return;
        }

        self.synced_at.set_value(last + elapsed);
        self.dashboard.update(|d| d.advance(elapsed as u64));
    }

    /// Arm a browser timeout for the next timeline deadline
    fn arm_timer(&self) {
        let generation = self.timer_generation.get_value() + 1;
        self.timer_generation.set_value(generation);

        let delay = self
            .dashboard
            .with_untracked(|d| d.next_deadline().map(|due| due.saturating_sub(d.now())));
        let Some(delay) = delay else {
            return;
        };

        let state = *self;
        gloo_timers::callback::Timeout::new(delay.min(u32::MAX as u64) as u32, move || {
            if state.timer_generation.get_value() != generation {
                return;
            }
            state.sync();
            state.arm_timer();
        })
        .forget();
    }
}

fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
