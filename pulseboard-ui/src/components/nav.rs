//! Navigation Component
//!
//! Sidebar navigation with one item per section, plus the header buttons.

use leptos::*;
use pulseboard::{HeaderAction, Section};

use crate::state::GlobalState;

/// Navigation sidebar component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="sidebar">
            // Logo and brand
            <div class="logo">
                <span class="text-2xl">"📈"</span>
                <span class="text-xl font-bold">"Pulseboard"</span>
            </div>

            // Navigation items
            <ul class="nav-menu">
                {Section::ALL.into_iter().map(|section| view! { <NavItem section=section /> }).collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation item
#[component]
fn NavItem(section: Section) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = section.as_str();

    let is_highlighted = create_memo(move |_| {
        state.dashboard.with(|d| d.highlighted_nav() == Some(id))
    });

    view! {
        <li>
            <a
                href="#"
                data-section=id
                class=move || if is_highlighted.get() { "nav-item active" } else { "nav-item" }
                on:click=move |ev| {
                    ev.prevent_default();
                    state.act(|d| {
                        d.navigate(id);
                    });
                }
            >
                {section.title()}
            </a>
        </li>
    }
}

/// Header buttons for notifications and profile
#[component]
pub fn HeaderActions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let click = move |action: HeaderAction| {
        state.act(|d| {
            d.click_action(action);
        })
    };

    view! {
        <div class="header-actions">
            <button class="action-btn notification-btn" on:click=move |_| click(HeaderAction::Notifications)>
                "🔔"
            </button>
            <button class="action-btn profile-btn" on:click=move |_| click(HeaderAction::Profile)>
                "👤"
            </button>
        </div>
    }
}
