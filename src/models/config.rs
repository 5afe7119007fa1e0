use crate::error::ConfigError;
use crate::models::menu::DEFAULT_TUTORIAL_SLIDES;
use crate::models::settings::SettingsSnapshot;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Launch configuration from `hanoi.yaml`
///
/// Read once at startup. The settings here only seed the menu; changes made in
/// the options screen are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(rename = "Settings", default)]
    pub settings: SettingsSnapshot,

    #[serde(rename = "Tutorial Slides", default = "default_tutorial_slides")]
    pub tutorial_slides: usize,

    #[serde(rename = "Frame Rate", default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            settings: SettingsSnapshot::default(),
            tutorial_slides: default_tutorial_slides(),
            frame_rate: default_frame_rate(),
        }
    }
}

fn default_tutorial_slides() -> usize {
    DEFAULT_TUTORIAL_SLIDES
}

fn default_frame_rate() -> u32 {
    60
}

impl LaunchConfig {
    /// Check the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tutorial_slides == 0 {
            return Err(ConfigError::NoTutorialSlides);
        }
        if !(1..=240).contains(&self.frame_rate) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }

    /// Time between two frames of the main loop.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}
