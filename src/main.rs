#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use tiltcard_core::{CardConfig, MotionModel};

/// Card configuration, resolved once from the command line
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (set from command line or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MotionArg {
    /// Follow the finger rigidly, spring back on release
    ReleaseOnly,
    /// Chase the finger with a spring at all times
    Continuous,
}

impl From<MotionArg> for MotionModel {
    fn from(arg: MotionArg) -> Self {
        match arg {
            MotionArg::ReleaseOnly => MotionModel::ReleaseOnly,
            MotionArg::Continuous => MotionModel::Continuous,
        }
    }
}

/// Tilt Card - drag a card, watch it tilt
#[derive(Parser, Debug)]
#[command(name = "tiltcard-desktop")]
#[command(about = "Tilt Card - a 3D card that tilts under the pointer")]
struct Args {
    /// JSON preset (defaults to <config dir>/tiltcard/card.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum tilt in degrees
    #[arg(long)]
    max_angle: Option<f32>,

    /// Content counter-shift at full tilt, in pixels
    #[arg(long)]
    parallax_offset: Option<f32>,

    /// Card width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Card height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// Motion model
    #[arg(short, long, value_enum)]
    motion: Option<MotionArg>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

/// Preset from `--config`, else the default preset file, else defaults.
fn load_preset(path: Option<&PathBuf>) -> anyhow::Result<CardConfig> {
    if let Some(path) = path {
        return CardConfig::from_json_file(path)
            .with_context(|| format!("failed to load preset {}", path.display()));
    }
    match CardConfig::default_path() {
        Some(path) if path.exists() => {
            tracing::info!("Using preset {:?}", path);
            CardConfig::from_json_file(&path)
                .with_context(|| format!("failed to load preset {}", path.display()))
        }
        _ => Ok(CardConfig::default()),
    }
}

fn resolve_config(args: &Args) -> anyhow::Result<CardConfig> {
    let mut config = load_preset(args.config.as_ref())?;
    if let Some(max_angle) = args.max_angle {
        config.max_angle = max_angle;
    }
    if let Some(parallax_offset) = args.parallax_offset {
        config.parallax_offset = parallax_offset;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(motion) = args.motion {
        config.motion = motion.into();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tiltcard_core::init_logging(&args.log);

    let config = resolve_config(&args)?;
    if let Err(e) = config.validate() {
        tracing::warn!("Configuration problem, falling back to safe values: {}", e);
    }
    let config = config.sanitized();

    tracing::info!(
        "Starting with {}x{} card, max angle {}°, {} motion (damping ratio {:.2})",
        config.width,
        config.height,
        config.max_angle,
        config.motion,
        config.spring.damping_ratio()
    );
    let _ = CARD_CONFIG.set(config);

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tilt Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(800.0, 700.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
