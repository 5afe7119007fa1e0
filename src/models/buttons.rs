//! Static catalog of clickable regions on the 960×640 virtual canvas.
//!
//! Buttons are plain values built at compile time. The registry hands out the
//! slice belonging to a [`ButtonContext`]; nothing here holds state.

use std::fmt;

/// Width of the virtual canvas that all hit-testing and layout uses.
pub const CANVAS_WIDTH: f32 = 960.0;

/// Height of the virtual canvas.
pub const CANVAS_HEIGHT: f32 = 640.0;

const STANDARD_SIZE: (i32, i32) = (200, 80);
const SMALL_SIZE: (i32, i32) = (75, 75);

/// A pointer position in virtual canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in integer canvas units.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Build a rectangle of the given size centred on `(cx, cy)`.
    pub const fn centered(cx: i32, cy: i32, size: (i32, i32)) -> Self {
        Self {
            x: cx - size.0 / 2,
            y: cy - size.1 / 2,
            width: size.0,
            height: size.1,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as f32
            && point.x < self.right() as f32
            && point.y >= self.y as f32
            && point.y < self.bottom() as f32
    }
}

/// Every kind of button the program knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    // Main menu
    Play,
    Options,
    Exit,
    Tutorial,
    Credits,

    // Options menu
    DifficultyToggle,
    ResolutionToggle,
    ThemeToggle,
    AcceptSettings,

    // Shared by the options menu (as cancel) and the game board
    BackToMain,

    // Game board
    ResetBoard,
}

impl ButtonKind {
    /// Caption shown by the frontend.
    pub fn label(self) -> &'static str {
        match self {
            ButtonKind::Play => "Play",
            ButtonKind::Options => "Options",
            ButtonKind::Exit => "Exit",
            ButtonKind::Tutorial => "Tutorial",
            ButtonKind::Credits => "Credits",
            ButtonKind::DifficultyToggle => "Difficulty",
            ButtonKind::ResolutionToggle => "Resolution",
            ButtonKind::ThemeToggle => "Theme",
            ButtonKind::AcceptSettings => "Accept",
            ButtonKind::BackToMain => "Back",
            ButtonKind::ResetBoard => "Reset",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A button: its kind and its collision rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEntity {
    pub kind: ButtonKind,
    pub rect: Rect,
}

impl ButtonEntity {
    const fn standard(kind: ButtonKind, cx: i32, cy: i32) -> Self {
        Self {
            kind,
            rect: Rect::centered(cx, cy, STANDARD_SIZE),
        }
    }

    const fn small(kind: ButtonKind, cx: i32, cy: i32) -> Self {
        Self {
            kind,
            rect: Rect::centered(cx, cy, SMALL_SIZE),
        }
    }
}

/// Which set of buttons is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonContext {
    MainMenu,
    OptionsMenu,
    Game,
    /// Tutorial and credits screens: the whole screen is the click target.
    None,
}

const BACK_TO_MAIN: ButtonEntity = ButtonEntity::small(ButtonKind::BackToMain, 60, 60);

const MAIN_MENU: [ButtonEntity; 5] = [
    ButtonEntity::standard(ButtonKind::Play, 480, 300),
    ButtonEntity::standard(ButtonKind::Options, 480, 400),
    ButtonEntity::standard(ButtonKind::Exit, 480, 500),
    ButtonEntity::standard(ButtonKind::Tutorial, 140, 570),
    ButtonEntity::standard(ButtonKind::Credits, 820, 570),
];

const OPTIONS_MENU: [ButtonEntity; 5] = [
    ButtonEntity::standard(ButtonKind::DifficultyToggle, 400, 220),
    ButtonEntity::standard(ButtonKind::ResolutionToggle, 400, 340),
    ButtonEntity::standard(ButtonKind::ThemeToggle, 400, 460),
    ButtonEntity::standard(ButtonKind::AcceptSettings, 480, 560),
    BACK_TO_MAIN,
];

const GAME_BOARD: [ButtonEntity; 2] = [
    ButtonEntity::small(ButtonKind::ResetBoard, 900, 60),
    BACK_TO_MAIN,
];

/// Buttons active in the given context.
pub fn buttons_for(context: ButtonContext) -> &'static [ButtonEntity] {
    match context {
        ButtonContext::MainMenu => &MAIN_MENU,
        ButtonContext::OptionsMenu => &OPTIONS_MENU,
        ButtonContext::Game => &GAME_BOARD,
        ButtonContext::None => &[],
    }
}

/// First button in `buttons` whose rectangle contains `point`.
pub fn hit_test(buttons: &[ButtonEntity], point: Point) -> Option<ButtonKind> {
    buttons
        .iter()
        .find(|button| button.rect.contains(point))
        .map(|button| button.kind)
}
