//! Sheen layer: a wide gradient that slides across the card as it tilts.

use dioxus::prelude::*;
use tiltcard_core::SheenStyle;

/// Light reflection over the card content.
///
/// The gradient is oversized (180%) and scaled so its edges never show while
/// it slides. It ignores pointer events so drags reach the card.
#[component]
pub fn Sheen(sheen: SheenStyle) -> Element {
    let css = sheen.to_css();

    rsx! {
        div { class: "tilt-card__sheen", "aria-hidden": "true",
            div { class: "tilt-card__sheen-inner", style: "{css}" }
        }
    }
}
