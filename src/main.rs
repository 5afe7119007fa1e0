//! Hanoi - Towers of Hanoi desktop puzzle
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! This binary crate provides the Slint GUI frontend. It initializes:
//! - Logging infrastructure (daily file rotation + console output)
//! - Launch configuration ([`ConfigManager`])
//! - The menu model seeded from the launch settings
//! - GUI controller ([`GuiController`] - drives the program loop from a frame timer)
//!
//! Everything runs on the main thread: the Slint event loop fires the frame timer,
//! and each tick processes one frame of input.
//!
//! # Configuration
//!
//! Optional, read from `config/hanoi.yaml`:
//! - `Settings`: initial theme, resolution and difficulty
//! - `Tutorial Slides`: number of tutorial slides
//! - `Frame Rate`: frames per second of the main loop

use anyhow::{Context, Result};
use hanoi::logging::{LOG_DIR, LOG_PREFIX};
use hanoi::ui::GuiController;
use hanoi::{APP_NAME, ConfigManager, MenuModel, VERSION};

/// Main entry point for the Hanoi GUI application
///
/// # Errors
///
/// This function can fail if:
/// - Logging initialization fails (disk space, permissions)
/// - The launch configuration is unreadable, invalid YAML, or out of range
/// - Slint UI initialization fails (graphics drivers, display)
fn main() -> Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = hanoi::logging::setup_logging_with_console(LOG_DIR, LOG_PREFIX, false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::default();
    let config = config_manager.load_launch_config()?;

    let menu = MenuModel::new(config.settings, config.tutorial_slides)
        .context("Failed to create menu from launch config")?;

    let gui_controller = GuiController::new(menu, &config)?;

    tracing::info!("GUI controller initialized, launching window");

    // Blocks until the window is closed or Exit is clicked
    let result = gui_controller.run();

    tracing::info!("GUI closed, shutting down");
    gui_controller.log_metrics();

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
