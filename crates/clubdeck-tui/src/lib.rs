//! clubdeck-tui - Terminal UI for ClubDeck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! setup, event polling, the screen layout, the theme, and one widget per
//! dashboard view. State and behavior live in clubdeck-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
