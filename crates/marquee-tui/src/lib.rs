//! marquee-tui - Terminal UI for Marquee
//!
//! This crate provides the ratatui-based dashboard. It drives the TEA loop
//! from marquee-app and adds terminal rendering, keyboard and mouse event
//! polling, and the widgets for stats, charts, the film table and the row
//! tooltip.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
