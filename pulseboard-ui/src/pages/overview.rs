//! Overview Page
//!
//! Headline stats, the performance chart and the quick actions.

use leptos::*;
use pulseboard::Section;

use super::SectionView;
use crate::components::{Chart, CtaButton, FilterBar, StatsGrid};

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <SectionView section=Section::Overview>
            <div class="section-header flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold">"Dashboard Overview"</h2>
                <FilterBar />
            </div>

            <StatsGrid />

            <div class="mt-8">
                <Chart />
            </div>

            <div class="quick-actions flex space-x-4 mt-8">
                <CtaButton label="Create Campaign" />
                <CtaButton label="Schedule Post" secondary=true />
            </div>
        </SectionView>
    }
}
