#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "folio=info,folio_core=info,folio_ui=info";

/// Site configuration, loaded once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// The loaded site configuration (built-in content if none was set)
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - an animated personal portfolio")]
struct Args {
    /// Site config JSON (default: <config dir>/folio/site.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG (e.g. "debug" or "folio_core=trace")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// The config file to read: the explicit flag, else the per-user default
/// if it exists.
fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("site.json"))
            .filter(|path| path.is_file())
    })
}

fn load_config(path: &Path) -> anyhow::Result<SiteConfig> {
    SiteConfig::load(path).with_context(|| format!("loading site config {}", path.display()))
}

fn main() {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (config, source) = match config_path(args.config) {
        Some(path) => match load_config(&path) {
            Ok(config) => (config, path.display().to_string()),
            Err(e) => {
                tracing::warn!("{:#}; using built-in content", e);
                (SiteConfig::default(), "built-in".to_string())
            }
        },
        None => (SiteConfig::default(), "built-in".to_string()),
    };

    let title = format!("{} - Portfolio", config.owner);
    let _ = SITE_CONFIG.set(config);

    tracing::info!(config = %source, "Starting folio");

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
