//! Pulseboard Dashboard
//!
//! Creator media dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Section navigation with a loading overlay
//! - Time-range filter over the stats cards
//! - Performance chart with selectable series
//! - Toast notifications for card and button interactions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in one `pulseboard::Dashboard`; components
//! read it through a signal and forward clicks to it.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
