//! Team Page

use leptos::*;
use pulseboard::Section;

use super::SectionView;
use crate::components::{CtaButton, TeamGrid};

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <SectionView section=Section::Team>
            <div class="section-header flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold">"Team"</h2>
                <CtaButton label="Invite Member" />
            </div>
            <TeamGrid />
        </SectionView>
    }
}
