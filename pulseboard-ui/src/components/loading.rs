//! Loading Component
//!
//! Full-screen overlay shown while the dashboard is busy.

use leptos::*;

use crate::state::GlobalState;

/// Loading overlay, visible exactly while the busy flag is set
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let busy = create_memo(move |_| state.dashboard.with(|d| d.is_busy()));

    view! {
        <div
            id="loadingOverlay"
            class=move || if busy.get() { "loading-overlay active" } else { "loading-overlay" }
        >
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
