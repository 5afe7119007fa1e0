//! Data models for the Towers of Hanoi game.
//!
//! This module contains the state the rest of the program reads and mutates:
//! - [`GameModel`]: The puzzle board, peg selection, notification and move counter
//! - [`MenuModel`]: Committed and staged settings, current menu screen, tutorial position
//! - [`SettingsSnapshot`]: Theme, resolution and difficulty as one copyable value
//! - [`ButtonEntity`]: Static button catalog for each screen, see [`buttons_for`]
//! - [`LaunchConfig`]: Read-only startup configuration loaded from `hanoi.yaml`
//!
//! # Architecture Note
//!
//! Models never talk to the renderer or the window. The
//! [`Controller`](crate::state::Controller) mutates them in response to input, and
//! the [`ProgramLoop`](crate::program_loop::ProgramLoop) turns them into a
//! read-only [`Scene`](crate::scene::Scene) for drawing.

pub mod buttons;
pub mod config;
pub mod game;
pub mod menu;
pub mod settings;

pub use buttons::{
    ButtonContext, ButtonEntity, ButtonKind, CANVAS_HEIGHT, CANVAS_WIDTH, Point, Rect,
    buttons_for, hit_test,
};
pub use config::LaunchConfig;
pub use game::{Disc, GameModel, MoveOutcome, Notification, PEG_COUNT, PegSet, SelectOutcome};
pub use menu::{MenuModel, MenuScreen};
pub use settings::{Difficulty, Resolution, SettingField, SettingsDiff, SettingsSnapshot, Theme};

/// Shared contract of the two models the controller can drive.
///
/// Both expose the buttons currently on screen and a highlight slot, which is all
/// the controller needs to track hover state without knowing which model is active.
pub trait Interactive {
    fn active_buttons(&self) -> &'static [ButtonEntity];
    fn highlighted(&self) -> Option<ButtonKind>;
    fn set_highlighted(&mut self, highlighted: Option<ButtonKind>);

    /// Whether hover tracking runs this frame.
    fn accepts_hover(&self) -> bool {
        true
    }
}

impl Interactive for MenuModel {
    fn active_buttons(&self) -> &'static [ButtonEntity] {
        MenuModel::active_buttons(self)
    }

    fn highlighted(&self) -> Option<ButtonKind> {
        MenuModel::highlighted(self)
    }

    fn set_highlighted(&mut self, highlighted: Option<ButtonKind>) {
        MenuModel::set_highlighted(self, highlighted)
    }
}

impl Interactive for GameModel {
    fn active_buttons(&self) -> &'static [ButtonEntity] {
        GameModel::active_buttons(self)
    }

    fn highlighted(&self) -> Option<ButtonKind> {
        GameModel::highlighted(self)
    }

    fn set_highlighted(&mut self, highlighted: Option<ButtonKind>) {
        GameModel::set_highlighted(self, highlighted)
    }

    // A notification covers the board until it is clicked away.
    fn accepts_hover(&self) -> bool {
        self.notification().is_none()
    }
}
