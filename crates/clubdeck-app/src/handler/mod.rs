//! Handler module - TEA update function and key routing
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI context

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// Result of processing one message: an optional follow-up message for the
/// event loop to feed back in.
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
        }
    }
}
