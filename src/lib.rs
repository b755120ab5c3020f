//! nightswitch library
//!
//! Wires configuration, logging and the night-mode controller to either the
//! terminal UI or the headless commands.

pub mod headless;

pub use headless::{HeadlessCommand, HeadlessEvent};

use std::path::{Path, PathBuf};

use nightswitch_app::config::{
    default_config_dir, init_config_dir, load_settings, Settings, CONFIG_FILENAME,
};
use nightswitch_app::{open_app_controller, AppState, SharedThemeService};
use nightswitch_core::prelude::*;

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Explicit `config.toml`; its directory becomes the config directory
    pub config: Option<PathBuf>,
    /// Explicit preference file, wins over `[store] path`
    pub store: Option<PathBuf>,
    /// Log directory, wins over `$NIGHTSWITCH_LOG_DIR`
    pub log_dir: Option<PathBuf>,
}

/// Settings resolved for one run
#[derive(Debug, Clone)]
pub struct Startup {
    pub settings: Settings,
    pub config_dir: PathBuf,
}

/// Resolve the config directory, load `config.toml` and apply overrides.
///
/// The default config directory is created with a commented `config.toml`
/// on first run; an explicit `--config` file is only read.
pub fn load_startup(options: &Options) -> Result<Startup> {
    let (config_dir, config_path) = match &options.config {
        Some(path) => (config_dir_of(path), path.clone()),
        None => {
            let dir = default_config_dir()?;
            if let Err(e) = init_config_dir(&dir) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!("Could not initialize {:?}: {}", dir, e);
            }
            let path = dir.join(CONFIG_FILENAME);
            (dir, path)
        }
    };

    let mut settings = load_settings(&config_path);
    if let Some(store) = &options.store {
        settings.store.path = store.to_string_lossy().into_owned();
    }

    Ok(Startup {
        settings,
        config_dir,
    })
}

fn config_dir_of(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Open the switch screen
pub async fn run(options: &Options) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    nightswitch_core::logging::init(options.log_dir.as_deref())?;

    let startup = load_startup(options)?;
    let themes = SharedThemeService::default();
    let theme_rx = themes.subscribe();
    let controller = open_app_controller(&startup.settings, &startup.config_dir, themes);
    let state = AppState::new(startup.settings, controller);

    let result = nightswitch_tui::run(state, theme_rx).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("nightswitch exiting");
    result
}

/// Run one headless command and print its event
pub fn run_headless(options: &Options, command: HeadlessCommand) -> Result<HeadlessEvent> {
    nightswitch_core::logging::init(options.log_dir.as_deref())?;

    info!("nightswitch headless: {:?}", command);

    let startup = load_startup(options)?;
    let mut controller = open_app_controller(
        &startup.settings,
        &startup.config_dir,
        SharedThemeService::default(),
    );

    let event = headless::execute(&mut controller, command);
    event.emit().context("Failed to write headless event")?;
    Ok(event)
}
