//! Stats Card Components
//!
//! The four headline stat cards and the filter bar that drives them.

use leptos::*;
use pulseboard::Filter;

use crate::state::GlobalState;

/// Row of stat cards
#[component]
pub fn StatsGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let count = state.dashboard.with_untracked(|d| d.stat_cards().len());

    view! {
        <div class="stats-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {(0..count).map(|index| view! { <StatsCard index=index /> }).collect_view()}
        </div>
    }
}

/// Single stat card, pulses while its value is being replaced
#[component]
fn StatsCard(index: usize) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let card = create_memo(move |_| state.dashboard.with(|d| d.stat_cards().get(index).cloned()));

    let class = move || {
        let mut class = String::from("stats-card dashboard-card");
        if let Some(card) = card.get() {
            if card.pulsing {
                class.push_str(" pulse");
            }
            if card.pressed {
                class.push_str(" pressed");
            }
        }
        class
    };

    view! {
        <div
            class=class
            on:click=move |_| state.act(|d| {
                d.click_stats_card(index);
            })
        >
            <h3 class="text-sm text-gray-500">{move || card.get().map(|c| c.kind.label())}</h3>
            <div class="stat-number text-3xl font-bold">{move || card.get().map(|c| c.value)}</div>
        </div>
    }
}

/// Time range selector for the stats row
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <div class="filter-bar flex space-x-2">
            {Filter::ALL.into_iter().map(|filter| view! { <FilterButton filter=filter /> }).collect_view()}
        </div>
    }
}

#[component]
fn FilterButton(filter: Filter) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_active = create_memo(move |_| state.dashboard.with(|d| d.filter() == filter));

    let label = match filter {
        Filter::All => "All Time",
        Filter::Month => "This Month",
        Filter::Week => "This Week",
    };

    view! {
        <button
            class=move || if is_active.get() { "filter-btn active" } else { "filter-btn" }
            data-filter=filter.as_str()
            on:click=move |_| state.act(|d| d.set_filter(filter.as_str()))
        >
            {label}
        </button>
    }
}
