//! Showcase page - one card in the middle of the window.

use dioxus::prelude::*;
use tiltcard_ui::TiltCard;

use crate::components::{CardFace, NavHeader, NavLocation};
use crate::context::use_card_config;

#[component]
pub fn Showcase() -> Element {
    let config = use_card_config();

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Showcase }
            main { class: "stage",
                TiltCard { config: config(),
                    CardFace { title: "3D Card", subtitle: "Drag me!" }
                }
            }
        }
    }
}
