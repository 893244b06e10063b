//! State Management
//!
//! The dashboard state machine and the timer pump that drives it.

pub mod global;

pub use global::{provide_global_state, GlobalState};
