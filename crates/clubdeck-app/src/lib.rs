//! clubdeck-app - Application state and orchestration for ClubDeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, a pure-ish [`update`] function over
//! [`AppState`], and the widget state machines the demo is built from
//! (wheel picker, date range picker, countdown banner, feature carousel,
//! pricing reveal). It contains no terminal code and can be driven
//! headlessly.

pub mod carousel;
pub mod config;
pub mod countdown;
pub mod date_range;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod pricing;
pub mod state;
pub mod tabs;
pub mod wheel;

// Re-export primary types
pub use config::{load_settings, DemoSettings, Settings};
pub use handler::{handle_key, update, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, TipTarget};
pub use state::{AppPhase, AppState, BookingState, Overlay};
pub use tabs::DemoTab;

// Re-export core types the TUI needs alongside the app
pub use clubdeck_core::{Role, RoleContext, DEMO_ROLES};
