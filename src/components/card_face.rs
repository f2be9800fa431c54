//! Card Face - demo content placed on a tilt card.

use dioxus::prelude::*;

use crate::theme::colors::CYAN;

/// Glowing circle above a title and subtitle.
#[component]
pub fn CardFace(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "card-face__circle", style: "background: {CYAN};" }
        h1 { class: "card-face__title", "{title}" }
        p { class: "card-face__subtitle", "{subtitle}" }
    }
}
