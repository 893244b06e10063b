//! Toast Notification Component
//!
//! Renders the dashboard's live notifications.

use leptos::*;
use pulseboard::{Notification, NotificationKind, Phase};

use crate::state::GlobalState;

/// Toast notification stack
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let live = create_memo(move |_| state.dashboard.with(|d| d.notifications().to_vec()));

    view! {
        <div class="fixed top-5 right-5 z-50 space-y-2">
            <For
                each=move || live.get()
                key=|n| (n.id, n.phase as u8)
                children=move |notification| view! { <ToastMessage notification=notification /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(notification: Notification) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = notification.id;

    let bg_class = match notification.kind {
        NotificationKind::Success => "bg-green-600",
        NotificationKind::Error => "bg-red-600",
        NotificationKind::Info => "bg-blue-600",
    };
    let position = match notification.phase {
        Phase::Shown => "translate-x-0",
        Phase::Entering | Phase::Leaving => "translate-x-full",
    };

    let class = format!(
        "notification notification-{:?} flex items-center space-x-3 {} {} text-white px-4 py-3 \
         rounded-lg shadow-lg transform transition-all duration-300 ease-out",
        notification.kind, bg_class, position
    )
    .to_lowercase();
    let icon = format!("fas fa-{}", notification.kind.icon());

    view! {
        <div class=class>
            <i class=icon></i>
            <span class="text-sm font-medium whitespace-pre-line">{notification.message}</span>
            <button
                class="notification-close"
                on:click=move |_| state.act(|d| d.close_notification(id))
            >
                "✕"
            </button>
        </div>
    }
}
