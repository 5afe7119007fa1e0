// Slint renderer
//
// Pushes each Scene into the MainWindow properties. Holds only a weak handle so
// the program loop never keeps the window alive.

use crate::models::{MenuScreen, Notification, Resolution, Theme};
use crate::program_loop::Renderer;
use crate::scene::{ButtonView, DiscView, GameScene, MenuScene, Scene, notification_top};
use crate::ui::controller::{ButtonItem, DiscItem, MainWindow};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

/// Screen index understood by `ui/main.slint`.
const GAME_SCREEN: i32 = 4;

const TUTORIAL_TEXT: [&str; 8] = [
    "Move every disc from the left peg onto another peg.",
    "Click a peg to pick up its top disc. The disc lights up.",
    "Click a second peg to drop the disc there.",
    "Click the same peg again to put the disc back down.",
    "A disc may only rest on an empty peg or on a larger disc.",
    "Breaking that rule shows a warning. Click to dismiss it.",
    "Use Reset to start over, or Back to return to the menu.",
    "More discs means more moves: 2^N - 1 at best. Good luck!",
];

pub struct SlintRenderer {
    ui: slint::Weak<MainWindow>,
}

impl SlintRenderer {
    pub fn new(ui: slint::Weak<MainWindow>) -> Self {
        Self { ui }
    }

    fn window(&self) -> Option<MainWindow> {
        let ui = self.ui.upgrade();
        if ui.is_none() {
            tracing::warn!("Main window is gone, dropping renderer request");
        }
        ui
    }

    fn push_menu(ui: &MainWindow, menu: &MenuScene) {
        ui.set_screen(screen_index(menu.screen));
        ui.set_discs(ModelRc::default());
        ui.set_notification_text(SharedString::new());
        ui.set_theme_label(menu.settings.theme.as_str().into());
        ui.set_resolution_label(menu.settings.resolution.as_str().into());
        ui.set_difficulty_label(menu.settings.difficulty.as_str().into());
        ui.set_tutorial_slide(to_i32(menu.tutorial_slide));
        ui.set_tutorial_slides(to_i32(menu.tutorial_slides));
        ui.set_tutorial_text(tutorial_text(menu.tutorial_slide).into());
    }

    fn push_game(ui: &MainWindow, game: &GameScene) {
        ui.set_screen(GAME_SCREEN);

        let discs: Vec<DiscItem> = game.discs.iter().map(disc_item).collect();
        ui.set_discs(ModelRc::new(VecModel::from(discs)));

        let status = format!("Moves: {}   Best possible: {}", game.moves, game.minimum_moves);
        ui.set_status_text(status.into());

        match game.notification {
            Some(notification) => {
                ui.set_notification_text(notification_text(notification, game.moves).into());
                ui.set_notification_top(notification_top(notification));
            }
            None => ui.set_notification_text(SharedString::new()),
        }
    }
}

impl Renderer for SlintRenderer {
    fn render(&mut self, scene: &Scene) {
        let Some(ui) = self.window() else {
            return;
        };

        let buttons: Vec<ButtonItem> = scene.buttons().iter().map(button_item).collect();
        ui.set_buttons(ModelRc::new(VecModel::from(buttons)));

        match scene {
            Scene::Menu(menu) => Self::push_menu(&ui, menu),
            Scene::Game(game) => Self::push_game(&ui, game),
        }
    }

    fn rebuild_assets(&mut self, theme: Theme) {
        if let Some(ui) = self.window() {
            tracing::debug!("Applying {} palette", theme);
            ui.set_theme(to_i32(theme.index()));
        }
    }

    fn rebuild_display(&mut self, resolution: Resolution) {
        if let Some(ui) = self.window() {
            let (width, height) = resolution.dimensions();
            tracing::debug!("Resizing window to {}", resolution);
            ui.window().set_size(slint::PhysicalSize::new(width, height));
        }
    }
}

fn button_item(button: &ButtonView) -> ButtonItem {
    ButtonItem {
        label: button.label.into(),
        x: button.rect.x as f32,
        y: button.rect.y as f32,
        width: button.rect.width as f32,
        height: button.rect.height as f32,
        highlighted: button.highlighted,
    }
}

fn disc_item(disc: &DiscView) -> DiscItem {
    DiscItem {
        x: disc.x,
        y: disc.y,
        width: disc.width,
        height: disc.height,
        rank: to_i32(disc.rank),
        highlighted: disc.highlighted,
    }
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn screen_index(screen: MenuScreen) -> i32 {
    match screen {
        MenuScreen::Main => 0,
        MenuScreen::Options => 1,
        MenuScreen::Tutorial => 2,
        MenuScreen::Credits => 3,
    }
}

fn tutorial_text(slide: usize) -> &'static str {
    TUTORIAL_TEXT
        .get(slide)
        .copied()
        .unwrap_or("Click to continue.")
}

fn notification_text(notification: Notification, moves: u32) -> String {
    match notification {
        Notification::IllegalMove => {
            "Illegal move! A disc can't sit on a smaller one. Click to continue.".to_string()
        }
        Notification::Victory => {
            format!("Solved in {} moves! Click to return to the menu.", moves)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_indices_are_distinct_from_game() {
        let indices = [
            MenuScreen::Main,
            MenuScreen::Options,
            MenuScreen::Tutorial,
            MenuScreen::Credits,
        ]
        .map(screen_index);
        assert_eq!(indices, [0, 1, 2, 3]);
        assert!(!indices.contains(&GAME_SCREEN));
    }

    #[test]
    fn test_tutorial_text_falls_back_past_last_slide() {
        assert!(tutorial_text(0).starts_with("Move every disc"));
        assert_eq!(tutorial_text(42), "Click to continue.");
    }

    #[test]
    fn test_victory_text_mentions_moves() {
        assert!(notification_text(Notification::Victory, 7).contains("7 moves"));
    }
}
