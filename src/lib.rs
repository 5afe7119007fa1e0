// Hanoi - Towers of Hanoi puzzle with a menu shell
//
// This is the library crate containing the models, the input state machine and
// the frame loop. The binary crate (main.rs) provides the GUI entry point.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod program_loop;
pub mod scene;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::{ConfigError, GameError};
pub use models::{GameModel, LaunchConfig, MenuModel, SettingsSnapshot};
pub use program_loop::{LoopControl, ProgramLoop, RawInput, Renderer, Viewport};
pub use scene::Scene;
pub use state::{ActiveModel, Controller, Transition, UserInput};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
