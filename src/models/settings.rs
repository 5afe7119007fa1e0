use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme used to select the asset package.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Standard,
    Red,
    Blue,
}

impl Theme {
    /// Every theme, in cycling order.
    pub const ALL: [Theme; 3] = [Theme::Standard, Theme::Red, Theme::Blue];

    /// Next theme in the cycle, wrapping after the last one.
    pub fn next(self) -> Self {
        match self {
            Theme::Standard => Theme::Red,
            Theme::Red => Theme::Blue,
            Theme::Blue => Theme::Standard,
        }
    }

    /// Position of this theme in [`Theme::ALL`].
    pub fn index(self) -> usize {
        match self {
            Theme::Standard => 0,
            Theme::Red => 1,
            Theme::Blue => 2,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Standard => "Standard",
            Theme::Red => "Red",
            Theme::Blue => "Blue",
        };
        f.write_str(name)
    }
}

/// Physical window resolution. Only the five sizes sharing the canvas 3:2 ratio are offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Resolution {
    R720x480,
    R864x576,
    #[default]
    R960x640,
    R1080x720,
    R1296x864,
}

impl Resolution {
    /// Every resolution, in cycling order.
    pub const ALL: [Resolution; 5] = [
        Resolution::R720x480,
        Resolution::R864x576,
        Resolution::R960x640,
        Resolution::R1080x720,
        Resolution::R1296x864,
    ];

    /// Width and height in physical pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Resolution::R720x480 => (720, 480),
            Resolution::R864x576 => (864, 576),
            Resolution::R960x640 => (960, 640),
            Resolution::R1080x720 => (1080, 720),
            Resolution::R1296x864 => (1296, 864),
        }
    }

    pub fn width(self) -> u32 {
        self.dimensions().0
    }

    pub fn height(self) -> u32 {
        self.dimensions().1
    }

    /// Next resolution in the cycle, wrapping after the largest.
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Look up the supported resolution with exactly these dimensions.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|r| r.dimensions() == (width, height))
            .ok_or(ConfigError::UnsupportedResolution { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{}x{}", width, height)
    }
}

impl TryFrom<String> for Resolution {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (width, height) = value
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ConfigError::InvalidResolutionFormat(value.clone()))?;

        let width = width
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidResolutionFormat(value.clone()))?;
        let height = height
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidResolutionFormat(value.clone()))?;

        Self::from_dimensions(width, height)
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.to_string()
    }
}

/// Number of discs in play, always within 3..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 5;

    /// Validate a disc count.
    pub fn new(discs: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&discs) {
            Ok(Self(discs))
        } else {
            Err(ConfigError::DiscCount(discs as usize))
        }
    }

    /// Number of discs.
    pub fn discs(self) -> usize {
        self.0 as usize
    }

    /// Next difficulty in the cycle, wrapping from 5 back to 3.
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} discs", self.0)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// A complete set of user settings.
///
/// [`MenuModel`](crate::models::MenuModel) keeps two of these: the committed
/// snapshot that the rest of the program uses, and the staged snapshot edited on
/// the options screen. Both are plain values, so copying one never aliases the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(rename = "Theme", default)]
    pub theme: Theme,

    #[serde(rename = "Resolution", default)]
    pub resolution: Resolution,

    #[serde(rename = "Difficulty", default)]
    pub difficulty: Difficulty,
}

impl SettingsSnapshot {
    /// Advance one field to the next value of its cyclic domain.
    pub fn cycle(&mut self, field: SettingField) {
        match field {
            SettingField::Theme => self.theme = self.theme.next(),
            SettingField::Resolution => self.resolution = self.resolution.next(),
            SettingField::Difficulty => self.difficulty = self.difficulty.next(),
        }
    }

    /// Compare against another snapshot field by field.
    pub fn diff(&self, other: &SettingsSnapshot) -> SettingsDiff {
        SettingsDiff {
            theme_changed: self.theme != other.theme,
            resolution_changed: self.resolution != other.resolution,
            difficulty_changed: self.difficulty != other.difficulty,
        }
    }
}

/// A settings field that can be cycled on the options screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingField {
    Theme,
    Resolution,
    Difficulty,
}

impl SettingField {
    /// Number of values in this field's cyclic domain.
    pub fn domain_size(self) -> usize {
        match self {
            SettingField::Theme => Theme::ALL.len(),
            SettingField::Resolution => Resolution::ALL.len(),
            SettingField::Difficulty => (Difficulty::MAX - Difficulty::MIN + 1) as usize,
        }
    }
}

/// Which fields changed when staged settings were committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsDiff {
    pub theme_changed: bool,
    pub resolution_changed: bool,
    pub difficulty_changed: bool,
}

impl SettingsDiff {
    pub fn is_empty(&self) -> bool {
        !(self.theme_changed || self.resolution_changed || self.difficulty_changed)
    }
}
