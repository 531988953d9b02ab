//! marquee-app - Application state and orchestration for Marquee
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the film table, the tooltip controller, chart focus and
//! selection, settings loading and the background dataset load. It has no
//! terminal dependency; the TUI converts its input into [`InputKey`] and
//! [`PointerEvent`] values at the boundary.

pub mod actions;
pub mod config;
pub mod dashboard;
pub mod handler;
pub mod input;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod table_view;
pub mod tooltip;

// Re-export primary types
pub use dashboard::Dashboard;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input::{InputKey, PointerEvent, PointerKind};
pub use message::Message;
pub use state::{AppPhase, AppState, ChartSlot, Focus, Region, ScreenRegions, UiMode};
pub use table_view::{SortOrder, TableRow, TableView};
pub use tooltip::{Placement, RowBounds, TooltipContent, TooltipController, TooltipState};
