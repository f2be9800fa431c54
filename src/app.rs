use dioxus::prelude::*;
use tiltcard_core::CardConfig;
use tiltcard_ui::TILT_CARD_STYLES;

use crate::context::get_card_config;
use crate::pages::{Compare, Showcase};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - A single card to drag around
/// - `/compare` - Both motion models side by side
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Showcase {},
    #[route("/compare")]
    Compare {},
}

/// Root application component.
///
/// Provides global styles, the card configuration and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<CardConfig> = use_signal(get_card_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {TILT_CARD_STYLES} }
        Router::<Route> {}
    }
}
