//! Call-to-Action Button

use leptos::*;

use crate::state::GlobalState;

/// Button that runs a simulated action and reports completion in a toast
#[component]
pub fn CtaButton(label: &'static str, #[prop(optional)] secondary: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let pressed = create_memo(move |_| state.dashboard.with(|d| d.is_cta_pressed(label)));

    let base = if secondary { "btn-secondary" } else { "btn-primary" };

    view! {
        <button
            class=move || if pressed.get() { format!("{} pressed", base) } else { base.to_string() }
            on:click=move |_| state.act(|d| d.click_cta(label))
        >
            {label}
        </button>
    }
}
