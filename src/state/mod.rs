// State machine module
//
// This module provides the Controller, which turns one frame of normalized input
// into mutations of the active model, a transition request, and change flags for
// the program loop.

use crate::models::{
    ButtonKind, GameModel, Interactive, MenuModel, MenuScreen, Notification, Point,
    SelectOutcome, SettingField, hit_test,
};

/// Right edge of the left peg's click column on the virtual canvas.
pub const LEFT_PEG_BOUNDARY: f32 = 320.0;

/// Left edge of the right peg's click column on the virtual canvas.
pub const RIGHT_PEG_BOUNDARY: f32 = 640.0;

/// One frame of input, already mapped onto the virtual canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UserInput {
    pub position: Point,
    pub clicked: bool,
}

impl UserInput {
    pub fn hover(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            clicked: false,
        }
    }

    pub fn click(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            clicked: true,
        }
    }
}

/// A request to swap the active model, consumed by the program loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    EnterGame,
    EnterMenu,
}

/// The model the controller drives this frame.
///
/// The program loop owns both models and lends one of them out per frame, so the
/// controller never keeps a reference across a transition.
#[derive(Debug)]
pub enum ActiveModel<'a> {
    Menu(&'a mut MenuModel),
    Game(&'a mut GameModel),
}

type MenuHandler = fn(&mut Controller, &mut MenuModel);
type GameHandler = fn(&mut Controller, &mut GameModel);

/// Menu button handlers, keyed by button kind.
const MENU_HANDLERS: &[(ButtonKind, MenuHandler)] = &[
    (ButtonKind::Play, Controller::start_game),
    (ButtonKind::Options, Controller::enter_options),
    (ButtonKind::Exit, Controller::exit_program),
    (ButtonKind::Tutorial, Controller::open_tutorial),
    (ButtonKind::Credits, Controller::open_credits),
    (ButtonKind::DifficultyToggle, Controller::cycle_difficulty),
    (ButtonKind::ResolutionToggle, Controller::cycle_resolution),
    (ButtonKind::ThemeToggle, Controller::cycle_theme),
    (ButtonKind::AcceptSettings, Controller::accept_settings),
    (ButtonKind::BackToMain, Controller::cancel_settings),
];

/// Game board button handlers, keyed by button kind.
const GAME_HANDLERS: &[(ButtonKind, GameHandler)] = &[
    (ButtonKind::BackToMain, Controller::leave_game),
    (ButtonKind::ResetBoard, Controller::reset_board),
];

/// Processes user input and updates the active model
///
/// Every call to [`handle_input`](Self::handle_input) starts by clearing all flags,
/// so each flag describes exactly one frame:
/// - `model_updated`: the visible state of the model changed and needs redrawing
/// - `next_state`: a requested switch between menu and game
/// - `exit_flag`: the player asked to quit
/// - `asset_package_updated` / `resolution_updated`: committed settings that need
///   the renderer or display rebuilt
#[derive(Debug, Default)]
pub struct Controller {
    model_updated: bool,
    next_state: Option<Transition>,
    exit_flag: bool,
    asset_package_updated: bool,
    resolution_updated: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame of input against the active model.
    pub fn handle_input(&mut self, input: UserInput, model: ActiveModel<'_>) {
        self.begin_frame();

        match model {
            ActiveModel::Menu(menu) => {
                let before = menu.clone();
                Self::update_highlight(menu, input.position);
                if input.clicked {
                    self.resolve_menu_click(menu);
                }
                self.model_updated = *menu != before;
            }
            ActiveModel::Game(game) => {
                let before = game.clone();
                Self::update_highlight(game, input.position);
                if input.clicked {
                    self.resolve_game_click(game, input.position);
                }
                self.model_updated = *game != before;
            }
        }
    }

    fn begin_frame(&mut self) {
        self.model_updated = false;
        self.next_state = None;
        self.exit_flag = false;
        self.asset_package_updated = false;
        self.resolution_updated = false;
    }

    /// Highlight the first active button under the pointer, or none.
    fn update_highlight<M: Interactive>(model: &mut M, position: Point) {
        if !model.accepts_hover() {
            return;
        }
        let hovered = hit_test(model.active_buttons(), position);
        if hovered != model.highlighted() {
            model.set_highlighted(hovered);
        }
    }

    fn resolve_menu_click(&mut self, menu: &mut MenuModel) {
        match menu.screen() {
            MenuScreen::Credits => {
                menu.go_to_main();
                return;
            }
            MenuScreen::Tutorial => {
                if menu.is_last_slide() {
                    menu.rewind_tutorial();
                    menu.go_to_main();
                } else {
                    menu.advance_tutorial(1);
                }
                return;
            }
            MenuScreen::Main | MenuScreen::Options => {}
        }

        let Some(kind) = menu.highlighted() else {
            return;
        };

        match MENU_HANDLERS.iter().find(|(k, _)| *k == kind) {
            Some((_, handler)) => {
                tracing::debug!("Menu button clicked: {}", kind);
                handler(self, menu);
            }
            None => tracing::debug!("No menu handler for button {}", kind),
        }
    }

    fn resolve_game_click(&mut self, game: &mut GameModel, position: Point) {
        match game.notification() {
            Some(Notification::Victory) => {
                self.next_state = Some(Transition::EnterMenu);
                return;
            }
            Some(Notification::IllegalMove) => {
                game.acknowledge_notification();
                return;
            }
            None => {}
        }

        if let Some(kind) = game.highlighted() {
            match GAME_HANDLERS.iter().find(|(k, _)| *k == kind) {
                Some((_, handler)) => {
                    tracing::debug!("Game button clicked: {}", kind);
                    handler(self, game);
                }
                None => tracing::debug!("No game handler for button {}", kind),
            }
            return;
        }

        let peg = Self::peg_at(position);
        match game.select_peg(peg) {
            Ok(SelectOutcome::Attempted(Err(e))) => tracing::debug!("Move rejected: {}", e),
            Ok(outcome) => tracing::trace!("Peg {} clicked: {:?}", peg, outcome),
            Err(e) => tracing::warn!("Peg click ignored: {}", e),
        }
    }

    /// Map a canvas position to the peg column under it.
    pub fn peg_at(position: Point) -> usize {
        if position.x < LEFT_PEG_BOUNDARY {
            0
        } else if position.x > RIGHT_PEG_BOUNDARY {
            2
        } else {
            1
        }
    }

    // Menu handlers

    fn start_game(&mut self, _menu: &mut MenuModel) {
        self.next_state = Some(Transition::EnterGame);
    }

    fn enter_options(&mut self, menu: &mut MenuModel) {
        menu.enter_options();
    }

    fn exit_program(&mut self, menu: &mut MenuModel) {
        if menu.screen() == MenuScreen::Main {
            tracing::info!("Exit requested");
            self.exit_flag = true;
        }
    }

    fn open_tutorial(&mut self, menu: &mut MenuModel) {
        menu.go_to_tutorial();
    }

    fn open_credits(&mut self, menu: &mut MenuModel) {
        menu.go_to_credits();
    }

    fn cycle_difficulty(&mut self, menu: &mut MenuModel) {
        menu.stage_cycle(SettingField::Difficulty);
    }

    fn cycle_resolution(&mut self, menu: &mut MenuModel) {
        menu.stage_cycle(SettingField::Resolution);
    }

    fn cycle_theme(&mut self, menu: &mut MenuModel) {
        menu.stage_cycle(SettingField::Theme);
    }

    fn accept_settings(&mut self, menu: &mut MenuModel) {
        let diff = menu.commit_staged();
        self.asset_package_updated = diff.theme_changed;
        self.resolution_updated = diff.resolution_changed;
        menu.go_to_main();
    }

    fn cancel_settings(&mut self, menu: &mut MenuModel) {
        menu.cancel_staged();
        menu.go_to_main();
    }

    // Game handlers

    fn leave_game(&mut self, _game: &mut GameModel) {
        self.next_state = Some(Transition::EnterMenu);
    }

    fn reset_board(&mut self, game: &mut GameModel) {
        game.restart();
    }

    // Flag access for the program loop

    pub fn model_updated(&self) -> bool {
        self.model_updated
    }

    /// Force a redraw, used after the active model was swapped.
    pub fn mark_updated(&mut self) {
        self.model_updated = true;
    }

    pub fn reset_render_flag(&mut self) {
        self.model_updated = false;
    }

    /// Consume the pending transition. A second call returns `None`.
    pub fn take_next_state(&mut self) -> Option<Transition> {
        self.next_state.take()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_flag
    }

    pub fn asset_package_updated(&self) -> bool {
        self.asset_package_updated
    }

    pub fn resolution_updated(&self) -> bool {
        self.resolution_updated
    }

    /// Clear the settings flags once the program loop has acted on them.
    pub fn reset_settings_update_flags(&mut self) {
        self.asset_package_updated = false;
        self.resolution_updated = false;
    }
}
