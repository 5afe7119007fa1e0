//! Integration tests for the Controller state machine
//!
//! Each test drives one row of the transition table with canvas coordinates,
//! the same way the program loop does, and checks the model mutation and the
//! flags raised for that frame.

use hanoi::models::{
    ButtonKind, Difficulty, MenuScreen, Notification, Resolution, SettingField, SettingsSnapshot,
    Theme,
};
use hanoi::{ActiveModel, Controller, GameModel, MenuModel, Transition, UserInput};

const PLAY: (f32, f32) = (480.0, 300.0);
const OPTIONS: (f32, f32) = (480.0, 400.0);
const EXIT: (f32, f32) = (480.0, 500.0);
const TUTORIAL: (f32, f32) = (140.0, 570.0);
const CREDITS: (f32, f32) = (820.0, 570.0);
const DIFFICULTY: (f32, f32) = (400.0, 220.0);
const RESOLUTION: (f32, f32) = (400.0, 340.0);
const THEME: (f32, f32) = (400.0, 460.0);
const ACCEPT: (f32, f32) = (480.0, 560.0);
const BACK: (f32, f32) = (60.0, 60.0);
const RESET: (f32, f32) = (900.0, 60.0);

const LEFT_PEG: (f32, f32) = (192.0, 400.0);
const MIDDLE_PEG: (f32, f32) = (480.0, 400.0);
const RIGHT_PEG: (f32, f32) = (768.0, 400.0);

fn click_menu(controller: &mut Controller, menu: &mut MenuModel, at: (f32, f32)) {
    controller.handle_input(UserInput::click(at.0, at.1), ActiveModel::Menu(menu));
}

fn click_game(controller: &mut Controller, game: &mut GameModel, at: (f32, f32)) {
    controller.handle_input(UserInput::click(at.0, at.1), ActiveModel::Game(game));
}

fn new_game() -> GameModel {
    GameModel::new(Difficulty::default())
}

// Main menu

#[test]
fn test_play_requests_game() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();

    click_menu(&mut controller, &mut menu, PLAY);

    assert_eq!(controller.take_next_state(), Some(Transition::EnterGame));
    assert_eq!(menu.screen(), MenuScreen::Main);
}

#[test]
fn test_exit_sets_exit_flag() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();

    click_menu(&mut controller, &mut menu, EXIT);

    assert!(controller.exit_requested());
    assert_eq!(controller.take_next_state(), None);
}

#[test]
fn test_options_opens_options_screen() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();

    click_menu(&mut controller, &mut menu, OPTIONS);

    assert_eq!(menu.screen(), MenuScreen::Options);
    assert_eq!(menu.staged(), menu.committed());
    assert!(controller.model_updated());
}

#[test]
fn test_tutorial_and_credits_switch_screens() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();

    click_menu(&mut controller, &mut menu, TUTORIAL);
    assert_eq!(menu.screen(), MenuScreen::Tutorial);

    let mut menu = MenuModel::default();
    click_menu(&mut controller, &mut menu, CREDITS);
    assert_eq!(menu.screen(), MenuScreen::Credits);
}

#[test]
fn test_click_on_empty_space_does_nothing() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();

    click_menu(&mut controller, &mut menu, (20.0, 20.0));

    assert_eq!(menu, MenuModel::default());
    assert!(!controller.model_updated());
    assert_eq!(controller.take_next_state(), None);
}

// Options menu

#[test]
fn test_toggles_stage_each_field() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.enter_options();

    click_menu(&mut controller, &mut menu, DIFFICULTY);
    click_menu(&mut controller, &mut menu, RESOLUTION);
    click_menu(&mut controller, &mut menu, THEME);

    assert_eq!(menu.staged().difficulty, Difficulty::new(4).unwrap());
    assert_eq!(menu.staged().resolution, Resolution::R1080x720);
    assert_eq!(menu.staged().theme, Theme::Red);
    assert_eq!(menu.committed(), &SettingsSnapshot::default());
    assert_eq!(menu.screen(), MenuScreen::Options);
}

#[test]
fn test_accept_commits_and_flags_rebuilds() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.enter_options();

    click_menu(&mut controller, &mut menu, RESOLUTION);
    click_menu(&mut controller, &mut menu, THEME);
    click_menu(&mut controller, &mut menu, ACCEPT);

    assert!(controller.asset_package_updated());
    assert!(controller.resolution_updated());
    assert_eq!(menu.committed().resolution, Resolution::R1080x720);
    assert_eq!(menu.committed().theme, Theme::Red);
    assert_eq!(menu.screen(), MenuScreen::Main);
}

#[test]
fn test_accept_difficulty_only_raises_no_rebuild() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.enter_options();

    click_menu(&mut controller, &mut menu, DIFFICULTY);
    click_menu(&mut controller, &mut menu, ACCEPT);

    assert!(!controller.asset_package_updated());
    assert!(!controller.resolution_updated());
    assert_eq!(menu.committed().difficulty, Difficulty::new(4).unwrap());
}

#[test]
fn test_back_from_options_cancels() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.enter_options();

    for _ in 0..5 {
        click_menu(&mut controller, &mut menu, RESOLUTION);
    }
    assert_eq!(menu.staged().resolution, Resolution::R960x640);
    click_menu(&mut controller, &mut menu, THEME);
    click_menu(&mut controller, &mut menu, BACK);

    assert_eq!(menu.screen(), MenuScreen::Main);
    assert_eq!(menu.staged(), menu.committed());
    assert_eq!(menu.committed().theme, Theme::Standard);
    assert!(!controller.asset_package_updated());
}

#[test]
fn test_exit_button_area_in_options_is_not_exit() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.enter_options();

    click_menu(&mut controller, &mut menu, EXIT);

    assert!(!controller.exit_requested());
}

// Credits and tutorial

#[test]
fn test_any_click_leaves_credits() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::default();
    menu.go_to_credits();

    click_menu(&mut controller, &mut menu, (5.0, 630.0));

    assert_eq!(menu.screen(), MenuScreen::Main);
    assert!(controller.model_updated());
}

#[test]
fn test_tutorial_steps_through_slides_then_returns() {
    let mut controller = Controller::new();
    let mut menu = MenuModel::new(Default::default(), 3).unwrap();
    click_menu(&mut controller, &mut menu, TUTORIAL);

    click_menu(&mut controller, &mut menu, PLAY);
    assert_eq!(menu.tutorial_slide(), 1);
    assert_eq!(controller.take_next_state(), None);

    click_menu(&mut controller, &mut menu, PLAY);
    assert_eq!(menu.tutorial_slide(), 2);
    assert_eq!(menu.screen(), MenuScreen::Tutorial);

    click_menu(&mut controller, &mut menu, PLAY);
    assert_eq!(menu.tutorial_slide(), 0);
    assert_eq!(menu.screen(), MenuScreen::Main);
}

// Game

#[test]
fn test_victory_click_returns_to_menu() {
    let mut controller = Controller::new();
    let mut game = new_game();
    for (from, to) in [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)] {
        game.move_disc(from, to).unwrap();
    }
    assert_eq!(game.notification(), Some(Notification::Victory));

    click_game(&mut controller, &mut game, LEFT_PEG);

    assert_eq!(controller.take_next_state(), Some(Transition::EnterMenu));
    assert_eq!(game.notification(), Some(Notification::Victory));
}

#[test]
fn test_illegal_move_notification_is_acknowledged_by_click() {
    let mut controller = Controller::new();
    let mut game = new_game();

    click_game(&mut controller, &mut game, LEFT_PEG);
    click_game(&mut controller, &mut game, RIGHT_PEG);
    click_game(&mut controller, &mut game, LEFT_PEG);
    click_game(&mut controller, &mut game, RIGHT_PEG);
    assert_eq!(game.notification(), Some(Notification::IllegalMove));
    let pegs = game.pegs().clone();

    // The click only dismisses, even on a peg
    click_game(&mut controller, &mut game, MIDDLE_PEG);

    assert_eq!(game.notification(), None);
    assert_eq!(game.selected(), None);
    assert_eq!(game.pegs(), &pegs);
    assert!(controller.model_updated());
}

#[test]
fn test_notification_freezes_highlight() {
    let mut controller = Controller::new();
    let mut game = new_game();
    game.move_disc(2, 0).unwrap_err();

    controller.handle_input(UserInput::hover(RESET.0, RESET.1), ActiveModel::Game(&mut game));

    assert_eq!(game.highlighted(), None);
    assert!(!controller.model_updated());
}

#[test]
fn test_back_button_leaves_game() {
    let mut controller = Controller::new();
    let mut game = new_game();

    click_game(&mut controller, &mut game, BACK);

    assert_eq!(controller.take_next_state(), Some(Transition::EnterMenu));
    assert_eq!(game.highlighted(), Some(ButtonKind::BackToMain));
}

#[test]
fn test_reset_button_restarts_board() {
    let mut controller = Controller::new();
    let mut game = new_game();
    game.move_disc(0, 1).unwrap();
    game.move_disc(0, 2).unwrap();

    click_game(&mut controller, &mut game, RESET);

    assert_eq!(game.pegs()[0], vec![3, 2, 1]);
    assert_eq!(game.moves(), 0);
    assert_eq!(controller.take_next_state(), None);
}

#[test]
fn test_peg_clicks_move_discs() {
    let mut controller = Controller::new();
    let mut game = new_game();

    click_game(&mut controller, &mut game, LEFT_PEG);
    assert_eq!(game.selected(), Some(0));
    click_game(&mut controller, &mut game, MIDDLE_PEG);

    assert_eq!(game.pegs()[1], vec![1]);
    assert_eq!(game.selected(), None);
    assert!(controller.model_updated());
}

#[test]
fn test_highlight_tracks_hover_in_game() {
    let mut controller = Controller::new();
    let mut game = new_game();

    controller.handle_input(UserInput::hover(RESET.0, RESET.1), ActiveModel::Game(&mut game));
    assert_eq!(game.highlighted(), Some(ButtonKind::ResetBoard));
    assert!(controller.model_updated());

    controller.handle_input(UserInput::hover(RESET.0, RESET.1), ActiveModel::Game(&mut game));
    assert!(!controller.model_updated());
}

#[test]
fn test_stage_cycle_through_controller_matches_model() {
    let mut controller = Controller::new();
    let mut via_controller = MenuModel::default();
    via_controller.enter_options();
    let mut direct = via_controller.clone();

    click_menu(&mut controller, &mut via_controller, THEME);
    direct.stage_cycle(SettingField::Theme);

    assert_eq!(via_controller.staged(), direct.staged());
}
