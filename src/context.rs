//! Card configuration context for the demo app.
//!
//! The configuration resolved from the command line is provided once by
//! `App` and read by every page that renders cards.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(get_card_config()));
//!
//! // In child components
//! let config = use_card_config();
//! ```

use dioxus::prelude::*;
use tiltcard_core::CardConfig;

/// Get the card configuration resolved at startup.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Hook to access the card configuration from context.
pub fn use_card_config() -> Signal<CardConfig> {
    use_context::<Signal<CardConfig>>()
}
