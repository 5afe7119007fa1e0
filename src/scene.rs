//! Read-only projection of the active model for a renderer.
//!
//! A [`Scene`] is an owned snapshot: building one copies everything a frontend
//! needs to draw a frame, so renderers never hold a reference into the models
//! and cannot mutate them.

use crate::models::{
    ButtonEntity, ButtonKind, GameModel, Interactive, MenuModel, MenuScreen, Notification, Rect,
    Theme,
};

/// X coordinate of each peg's centre on the virtual canvas.
pub const PEG_CENTERS: [f32; 3] = [192.0, 480.0, 768.0];

/// Half the width of the smallest disc.
pub const BASE_DISC_HALF_WIDTH: f32 = 43.0;

/// How much each rank adds to a disc's half width.
pub const DISC_WIDTH_INCREMENT: f32 = 21.0;

pub const DISC_HEIGHT: f32 = 69.0;

/// Top edge of the bottom disc on every peg.
pub const BASE_Y: f32 = 516.0;

/// A button as it should be drawn this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub kind: ButtonKind,
    pub rect: Rect,
    pub label: &'static str,
    pub highlighted: bool,
}

/// A disc with its canvas geometry already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscView {
    pub rank: usize,
    pub peg: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Top disc of the selected peg.
    pub highlighted: bool,
}

impl DiscView {
    /// Place disc `rank` at `level` (0 = bottom) of `peg`.
    pub fn place(rank: usize, peg: usize, level: usize, highlighted: bool) -> Self {
        let size_step = rank.saturating_sub(1) as f32;
        let half_width = BASE_DISC_HALF_WIDTH + DISC_WIDTH_INCREMENT * size_step;
        let center = PEG_CENTERS.get(peg).copied().unwrap_or(PEG_CENTERS[1]);

        Self {
            rank,
            peg,
            x: center - half_width,
            y: BASE_Y - DISC_HEIGHT * level as f32,
            width: half_width * 2.0,
            height: DISC_HEIGHT,
            highlighted,
        }
    }
}

/// Settings captions shown on the options screen, taken from the staged settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsLabels {
    pub theme: String,
    pub resolution: String,
    pub difficulty: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuScene {
    pub screen: MenuScreen,
    pub theme: Theme,
    pub buttons: Vec<ButtonView>,
    pub settings: SettingsLabels,
    pub tutorial_slide: usize,
    pub tutorial_slides: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameScene {
    pub theme: Theme,
    pub buttons: Vec<ButtonView>,
    pub discs: Vec<DiscView>,
    pub selected: Option<usize>,
    pub notification: Option<Notification>,
    pub moves: u32,
    pub minimum_moves: u32,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    Menu(MenuScene),
    Game(GameScene),
}

impl Scene {
    pub fn from_menu(menu: &MenuModel) -> Self {
        let staged = menu.staged();

        Scene::Menu(MenuScene {
            screen: menu.screen(),
            theme: menu.committed().theme,
            buttons: button_views(menu),
            settings: SettingsLabels {
                theme: staged.theme.to_string(),
                resolution: staged.resolution.to_string(),
                difficulty: staged.difficulty.to_string(),
            },
            tutorial_slide: menu.tutorial_slide(),
            tutorial_slides: menu.tutorial_slides(),
        })
    }

    /// Project a game; the theme comes from the committed menu settings.
    pub fn from_game(game: &GameModel, theme: Theme) -> Self {
        let mut discs = Vec::with_capacity(game.disc_count());
        for (peg, stack) in game.pegs().iter().enumerate() {
            let top = stack.len().checked_sub(1);
            for (level, &rank) in stack.iter().enumerate() {
                let highlighted = game.selected() == Some(peg) && top == Some(level);
                discs.push(DiscView::place(rank, peg, level, highlighted));
            }
        }

        Scene::Game(GameScene {
            theme,
            buttons: button_views(game),
            discs,
            selected: game.selected(),
            notification: game.notification(),
            moves: game.moves(),
            minimum_moves: game.minimum_moves(),
        })
    }

    pub fn theme(&self) -> Theme {
        match self {
            Scene::Menu(menu) => menu.theme,
            Scene::Game(game) => game.theme,
        }
    }

    pub fn buttons(&self) -> &[ButtonView] {
        match self {
            Scene::Menu(menu) => &menu.buttons,
            Scene::Game(game) => &game.buttons,
        }
    }
}

fn button_views<M: Interactive>(model: &M) -> Vec<ButtonView> {
    let highlighted = model.highlighted();
    model
        .active_buttons()
        .iter()
        .map(|&ButtonEntity { kind, rect }| ButtonView {
            kind,
            rect,
            label: kind.label(),
            highlighted: highlighted == Some(kind),
        })
        .collect()
}

/// Top edge of a notification banner on the virtual canvas.
pub fn notification_top(notification: Notification) -> f32 {
    match notification {
        Notification::IllegalMove => 20.0,
        Notification::Victory => 160.0,
    }
}
