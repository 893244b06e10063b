//! # Pulseboard
//!
//! Creator media dashboard controller: a deterministic view state machine for
//! a single-page dashboard plus a small line-chart renderer. All data is
//! static sample data.
//!
//! ## Modules
//!
//! - [`dashboard`]: the `Dashboard` controller (sections, filters, chart,
//!   cards, call-to-actions)
//! - [`chart`]: the line-chart renderer and drawing surfaces
//! - [`timeline`]: the virtual clock that sequences delayed UI work
//! - [`notifications`]: toast lifecycle
//! - [`data`]: static stats, series and placeholder content
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use pulseboard::{Config, Dashboard, Section};
//!
//! let mut dashboard = Dashboard::new(&Config::default());
//! dashboard.settle();
//!
//! dashboard.navigate("analytics");
//! dashboard.advance(500);
//! assert_eq!(dashboard.active_section(), Some(Section::Analytics));
//!
//! dashboard.set_filter("week");
//! dashboard.advance(100);
//! assert_eq!(dashboard.stat_cards()[3].value, "3");
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod data;
#[cfg(feature = "cli")]
pub mod driver;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod notifications;
pub mod script;
pub mod timeline;

pub use chart::{
    ChartFrame, ChartRenderer, ChartStyle, Color, DisplayList, DrawOp, Font, Point, Rect, Stroke,
    Surface, SvgSurface, TextAlign,
};

pub use config::{
    generate_default_config, ChartConfig, Config, ConfigError, LoggingConfig, TimingConfig,
};

pub use dashboard::{
    Dashboard, DashboardSnapshot, HeaderAction, Section, SectionPanels, StatCard, TeamCard,
    UiAction,
};

pub use data::{CardKind, Filter, SeriesKind, StatsRow};

#[cfg(feature = "cli")]
pub use driver::RealtimeDriver;

#[cfg(feature = "cli")]
pub use logging::init_logging;

pub use error::{PulseError, PulseResult};

pub use notifications::{Notification, NotificationId, NotificationKind, Phase};

pub use timeline::{Timeline, TimerId};
