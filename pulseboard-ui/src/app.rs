//! App Root Component
//!
//! Main application layout with the global state provider.

use leptos::*;

use crate::components::{HeaderActions, LoadingOverlay, Nav, Toast};
use crate::pages::{Analytics, Content, Overview, Team};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen flex">
            // Navigation sidebar
            <Nav />

            <div class="flex-1 flex flex-col">
                <header class="header flex items-center justify-between px-6 py-4">
                    <h1 class="text-xl font-semibold">"Creator Dashboard"</h1>
                    <HeaderActions />
                </header>

                // Main content area, one section visible at a time
                <main class="flex-1 px-6 py-8">
                    <Overview />
                    <Analytics />
                    <Content />
                    <Team />
                </main>
            </div>

            <LoadingOverlay />

            // Toast notifications
            <Toast />
        </div>
    }
}
