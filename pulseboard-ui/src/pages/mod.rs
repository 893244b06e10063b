//! Pages
//!
//! One component per dashboard section. All sections stay mounted; the
//! dashboard decides which one is visible.

pub mod analytics;
pub mod content;
pub mod overview;
pub mod team;

pub use analytics::Analytics;
pub use content::Content;
pub use overview::Overview;
pub use team::Team;

use leptos::*;
use pulseboard::Section;

use crate::state::GlobalState;

/// Wrapper that shows its children only while `section` is active
#[component]
pub fn SectionView(section: Section, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_active = create_memo(move |_| state.dashboard.with(|d| d.is_active(section)));

    view! {
        <section
            id=section.as_str()
            class=move || if is_active.get() { "content-section active" } else { "content-section" }
        >
            {children()}
        </section>
    }
}
