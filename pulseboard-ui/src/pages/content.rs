//! Content Page

use leptos::*;
use pulseboard::Section;

use super::SectionView;
use crate::components::CtaButton;
use crate::state::GlobalState;

#[component]
pub fn Content() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let cards = create_memo(move |_| state.dashboard.with(|d| d.panels().content.clone()));

    view! {
        <SectionView section=Section::Content>
            <h2 class="text-2xl font-bold mb-6">"Content Management"</h2>
            <div class="content-grid grid grid-cols-1 md:grid-cols-2 gap-6">
                {move || cards.get().unwrap_or_default().into_iter().map(|card| view! {
                    <div class="dashboard-card">
                        <div class="flex items-center justify-between mb-2">
                            <h3 class="font-semibold">{card.title}</h3>
                            <span class="text-sm text-gray-500">{card.count}</span>
                        </div>
                        <p class="text-gray-600 mb-4">{card.description}</p>
                        <div class="flex space-x-2">
                            <CtaButton label=card.actions[0] secondary=true />
                            <CtaButton label=card.actions[1] />
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </SectionView>
    }
}
