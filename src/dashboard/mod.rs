//! Dashboard View Controller
//!
//! - `controller`: the `Dashboard` state machine
//! - `section`: section ids and their placeholder content
//! - `events`: user actions and timer events
//! - `snapshot`: serializable state for front-ends

pub mod controller;
pub mod events;
pub mod section;
pub mod snapshot;

pub use controller::{ChartCanvas, Dashboard, StatCard, TeamCard};
pub use events::{HeaderAction, PressTarget, TimerEvent, UiAction};
pub use section::{Section, SectionPanels};
pub use snapshot::DashboardSnapshot;
