// Domain errors
//
// GameError covers rule violations raised by the puzzle engine; ConfigError covers
// values outside the declared settings domains. Neither ever terminates the frame
// loop: the caller rejects the operation and carries on.

use thiserror::Error;

/// Errors raised by the Towers of Hanoi rule engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move from peg {from} to peg {to}")]
    IllegalMove { from: usize, to: usize },

    #[error("Peg index {0} is out of range")]
    PegOutOfRange(usize),
}

/// Errors raised when a setting or launch parameter falls outside its domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Disc count {0} outside supported range 3..=5")]
    DiscCount(usize),

    #[error("Unsupported resolution {width}x{height}")]
    UnsupportedResolution { width: u32, height: u32 },

    #[error("Invalid resolution format: {0}")]
    InvalidResolutionFormat(String),

    #[error("Tutorial needs at least one slide")]
    NoTutorialSlides,

    #[error("Frame rate {0} outside supported range 1..=240")]
    InvalidFrameRate(u32),
}
