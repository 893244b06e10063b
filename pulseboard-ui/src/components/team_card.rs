//! Team Card Component

use leptos::*;

use crate::state::GlobalState;

/// Team roster grid
#[component]
pub fn TeamGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let count = state.dashboard.with_untracked(|d| d.team().len());

    view! {
        <div class="team-grid grid grid-cols-1 md:grid-cols-2 gap-6">
            {(0..count).map(|index| view! { <TeamCard index=index /> }).collect_view()}
        </div>
    }
}

#[component]
fn TeamCard(index: usize) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let card = create_memo(move |_| state.dashboard.with(|d| d.team().get(index).cloned()));

    let clickable = create_memo(move |_| state.dashboard.with(|d| d.panels().team_enhanced));

    view! {
        <div
            class=move || {
                let pressed = card.get().map(|c| c.pressed).unwrap_or(false);
                if pressed { "team-member dashboard-card pressed" } else { "team-member dashboard-card" }
            }
            style:cursor=move || if clickable.get() { "pointer" } else { "default" }
            on:click=move |_| state.act(|d| {
                d.click_team_card(index);
            })
        >
            <h4 class="font-semibold">{move || card.get().map(|c| c.member.name)}</h4>
            <p class="text-sm text-gray-500">{move || card.get().map(|c| c.member.role)}</p>
        </div>
    }
}
