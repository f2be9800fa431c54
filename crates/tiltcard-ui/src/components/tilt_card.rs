//! Tilt Card Component
//!
//! A card that tilts in 3D under a drag and springs back when released.
//! Pointer events feed a [`TiltController`]; while its springs are moving a
//! frame task ticks it every [`FRAME_INTERVAL`] and stops once it settles.

use std::time::Duration;

use dioxus::prelude::*;
use tiltcard_core::{CardConfig, CardTransform, PanEvent, TiltController, FRAME_INTERVAL};
use tokio::time::Instant;

use super::Sheen;

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    /// Full configuration; the single-value props below override it
    #[props(default)]
    pub config: Option<CardConfig>,
    /// Card width in pixels (default: 300)
    #[props(default)]
    pub width: Option<f32>,
    /// Card height in pixels (default: 450)
    #[props(default)]
    pub height: Option<f32>,
    /// Maximum tilt in degrees (default: 12)
    #[props(default)]
    pub max_angle: Option<f32>,
    /// Content counter-shift at full tilt in pixels (default: 2)
    #[props(default)]
    pub parallax_offset: Option<f32>,
    /// Extra inline CSS for the card container
    #[props(default)]
    pub style: Option<String>,
    /// Extra CSS classes for the card container
    #[props(default)]
    pub class: Option<String>,
    /// Content rendered on the parallax layer
    pub children: Element,
}

/// Merge the explicit props over the base configuration.
pub fn resolve_config(props: &TiltCardProps) -> CardConfig {
    let mut config = props.config.clone().unwrap_or_default();
    if let Some(width) = props.width {
        config.width = width;
    }
    if let Some(height) = props.height {
        config.height = height;
    }
    if let Some(max_angle) = props.max_angle {
        config.max_angle = max_angle;
    }
    if let Some(parallax_offset) = props.parallax_offset {
        config.parallax_offset = parallax_offset;
    }
    config
}

/// Inline style of the outer container.
///
/// Caller styles come before the transform so they can't cancel the tilt.
pub fn container_style(config: &CardConfig, card: &CardTransform, extra: Option<&str>) -> String {
    let extra = extra.map(str::trim).unwrap_or("");
    let mut css = format!("width: {}px; height: {}px;", config.width, config.height);
    if !extra.is_empty() {
        css.push(' ');
        css.push_str(extra);
        if !extra.ends_with(';') {
            css.push(';');
        }
    }
    css.push(' ');
    css.push_str(&card.to_css());
    css
}

/// Call `tick` with the elapsed time every [`FRAME_INTERVAL`] until it
/// returns `false`. Returns the number of frames driven.
pub async fn run_frames(mut tick: impl FnMut(Duration) -> bool) -> u32 {
    let mut last = Instant::now();
    let mut frames = 0u32;
    loop {
        tokio::time::sleep(FRAME_INTERVAL).await;
        let now = Instant::now();
        let dt = now - last;
        last = now;
        frames += 1;
        if !tick(dt) {
            return frames;
        }
    }
}

/// Drag-to-tilt card with spring return and light sheen
///
/// The configuration is read when the card mounts. Give the card a new
/// `key` to rebuild it with different settings.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TiltCard {
///         width: 320.0,
///         height: 480.0,
///         max_angle: 15.0,
///         div { class: "circle" }
///         h1 { "3D Card" }
///     }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let initial = resolve_config(&props);
    let mut controller = use_signal(move || TiltController::new(initial));
    let mut animating = use_signal(|| false);

    // Frame driver: runs only while the springs are moving.
    let mut start_frames = move || {
        if *animating.peek() {
            return;
        }
        animating.set(true);
        spawn(async move {
            tracing::trace!("frame driver started");
            let frames = run_frames(|dt| controller.write().tick(dt)).await;
            tracing::trace!(frames, "frame driver stopped");
            animating.set(false);
        });
    };

    let mut pan = move |event: PanEvent| {
        if controller.write().handle(event) {
            start_frames();
        }
    };

    let (style, config, dragging) = {
        let ctl = controller.read();
        (ctl.style(), ctl.config().clone(), ctl.is_dragging())
    };

    let container_css = container_style(&config, &style.card, props.style.as_deref());
    let content_css = style.content.to_css();
    let extra_class = props.class.as_deref().unwrap_or("");
    let dragging_class = if dragging { "dragging" } else { "" };

    rsx! {
        div {
            class: "tilt-card {dragging_class} {extra_class}",
            style: "{container_css}",
            onpointerdown: move |evt: PointerEvent| {
                let point = evt.client_coordinates();
                pan(PanEvent::Begin {
                    pointer_id: evt.pointer_id(),
                    x: point.x as f32,
                    y: point.y as f32,
                });
            },
            onpointermove: move |evt: PointerEvent| {
                let point = evt.client_coordinates();
                pan(PanEvent::Update {
                    pointer_id: evt.pointer_id(),
                    x: point.x as f32,
                    y: point.y as f32,
                });
            },
            onpointerup: move |evt: PointerEvent| {
                pan(PanEvent::End { pointer_id: evt.pointer_id() });
            },
            onpointercancel: move |evt: PointerEvent| {
                pan(PanEvent::Cancel { pointer_id: evt.pointer_id() });
            },
            // Without pointer capture the card stops seeing the pointer once it leaves
            onpointerleave: move |evt: PointerEvent| {
                pan(PanEvent::Cancel { pointer_id: evt.pointer_id() });
            },

            div { class: "tilt-card__inner",
                div { class: "tilt-card__content", style: "{content_css}",
                    {props.children}
                }
                Sheen { sheen: style.sheen }
            }
        }
    }
}
