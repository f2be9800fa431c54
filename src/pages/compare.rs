//! Compare page - the two motion models next to each other.
//!
//! Left card follows the finger rigidly and only springs on release; right
//! card chases the finger with a spring the whole time.

use dioxus::prelude::*;
use tiltcard_core::{CardConfig, MotionModel};
use tiltcard_ui::TiltCard;

use crate::components::{CardFace, NavHeader, NavLocation};
use crate::context::use_card_config;

/// Copy of the shared configuration with a different motion model, scaled
/// down so two cards fit side by side.
fn variant(base: &CardConfig, motion: MotionModel) -> CardConfig {
    CardConfig {
        motion,
        width: base.width * 0.8,
        height: base.height * 0.8,
        ..base.clone()
    }
}

#[component]
pub fn Compare() -> Element {
    let config = use_card_config();
    let rigid = variant(&config.read(), MotionModel::ReleaseOnly);
    let weighted = variant(&config.read(), MotionModel::Continuous);

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Compare }
            main { class: "stage stage--split",
                div { class: "stage__column",
                    TiltCard { config: rigid,
                        CardFace { title: "Rigid", subtitle: "springs on release" }
                    }
                }
                div { class: "stage__column",
                    TiltCard { config: weighted,
                        CardFace { title: "Weighted", subtitle: "springs all the time" }
                    }
                }
            }
        }
    }
}
