//! Analytics Page
//!
//! Traffic sources and top content, loaded when the section is first shown.

use leptos::*;
use pulseboard::Section;

use super::SectionView;
use crate::state::GlobalState;

#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let panel = create_memo(move |_| state.dashboard.with(|d| d.panels().analytics.clone()));

    view! {
        <SectionView section=Section::Analytics>
            <h2 class="text-2xl font-bold mb-6">"Analytics"</h2>
            {move || match panel.get() {
                Some(panel) => view! {
                    <div class="analytics-grid grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="dashboard-card">
                            <h3 class="font-semibold mb-4">"Traffic Sources"</h3>
                            <ul>
                                {panel.traffic_sources.into_iter().map(|source| view! {
                                    <li class="flex justify-between py-1">
                                        <span>{source.name}</span>
                                        <span class="font-medium">{source.percentage}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                        <div class="dashboard-card">
                            <h3 class="font-semibold mb-4">"Top Performing Content"</h3>
                            <ul>
                                {panel.top_content.into_iter().map(|item| view! {
                                    <li class="flex justify-between py-1">
                                        <span>{item.title}</span>
                                        <span class="text-gray-500">{item.views}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </div>
                }.into_view(),
                None => view! {
                    <div class="flex items-center justify-center py-12">
                        <div class="loading-spinner w-8 h-8" />
                    </div>
                }.into_view(),
            }}
        </SectionView>
    }
}
