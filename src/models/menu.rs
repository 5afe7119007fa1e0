use crate::error::ConfigError;
use crate::models::buttons::{ButtonContext, ButtonEntity, ButtonKind, buttons_for};
use crate::models::settings::{SettingField, SettingsDiff, SettingsSnapshot};

/// Default number of tutorial slides.
pub const DEFAULT_TUTORIAL_SLIDES: usize = 8;

/// Which menu screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuScreen {
    #[default]
    Main,
    Options,
    Tutorial,
    Credits,
}

impl MenuScreen {
    pub fn button_context(self) -> ButtonContext {
        match self {
            MenuScreen::Main => ButtonContext::MainMenu,
            MenuScreen::Options => ButtonContext::OptionsMenu,
            MenuScreen::Tutorial | MenuScreen::Credits => ButtonContext::None,
        }
    }
}

/// Menu state that lives for the whole process.
///
/// Settings use a stage/commit protocol: the options screen edits `staged`,
/// and only [`commit_staged`](Self::commit_staged) copies it onto `committed`,
/// which the rest of the program reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuModel {
    committed: SettingsSnapshot,
    staged: SettingsSnapshot,
    screen: MenuScreen,
    tutorial_slide: usize,
    tutorial_slides: usize,
    highlighted: Option<ButtonKind>,
}

impl Default for MenuModel {
    fn default() -> Self {
        Self {
            committed: SettingsSnapshot::default(),
            staged: SettingsSnapshot::default(),
            screen: MenuScreen::Main,
            tutorial_slide: 0,
            tutorial_slides: DEFAULT_TUTORIAL_SLIDES,
            highlighted: None,
        }
    }
}

impl MenuModel {
    /// Create the menu with initial settings and a tutorial of `tutorial_slides` slides.
    pub fn new(settings: SettingsSnapshot, tutorial_slides: usize) -> Result<Self, ConfigError> {
        if tutorial_slides == 0 {
            return Err(ConfigError::NoTutorialSlides);
        }

        Ok(Self {
            committed: settings,
            staged: settings,
            tutorial_slides,
            ..Self::default()
        })
    }

    /// Advance one staged field to its next value.
    pub fn stage_cycle(&mut self, field: SettingField) {
        self.staged.cycle(field);
        tracing::debug!("Staged {:?} cycled: {:?}", field, self.staged);
    }

    /// Copy the staged settings onto the committed ones and report what changed.
    pub fn commit_staged(&mut self) -> SettingsDiff {
        let diff = self.staged.diff(&self.committed);
        self.committed = self.staged;

        if !diff.is_empty() {
            tracing::info!(
                "Settings committed: theme={}, resolution={}, difficulty={}",
                self.committed.theme,
                self.committed.resolution,
                self.committed.difficulty
            );
        }

        diff
    }

    /// Throw away staged edits.
    pub fn cancel_staged(&mut self) {
        self.staged = self.committed;
    }

    /// Start a fresh editing session and show the options screen.
    pub fn enter_options(&mut self) {
        self.staged = self.committed;
        self.screen = MenuScreen::Options;
    }

    /// Move the tutorial slide index by `delta`, clamped to the available slides.
    pub fn advance_tutorial(&mut self, delta: isize) -> usize {
        let last = self.tutorial_slides.saturating_sub(1);
        self.tutorial_slide = self.tutorial_slide.saturating_add_signed(delta).min(last);
        self.tutorial_slide
    }

    pub fn rewind_tutorial(&mut self) {
        self.tutorial_slide = 0;
    }

    pub fn is_last_slide(&self) -> bool {
        self.tutorial_slide + 1 >= self.tutorial_slides
    }

    pub fn go_to_main(&mut self) {
        self.screen = MenuScreen::Main;
    }

    pub fn go_to_tutorial(&mut self) {
        self.screen = MenuScreen::Tutorial;
    }

    pub fn go_to_credits(&mut self) {
        self.screen = MenuScreen::Credits;
    }

    pub fn committed(&self) -> &SettingsSnapshot {
        &self.committed
    }

    pub fn staged(&self) -> &SettingsSnapshot {
        &self.staged
    }

    pub fn screen(&self) -> MenuScreen {
        self.screen
    }

    pub fn tutorial_slide(&self) -> usize {
        self.tutorial_slide
    }

    pub fn tutorial_slides(&self) -> usize {
        self.tutorial_slides
    }

    pub fn active_buttons(&self) -> &'static [ButtonEntity] {
        buttons_for(self.screen.button_context())
    }

    pub fn highlighted(&self) -> Option<ButtonKind> {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: Option<ButtonKind>) {
        self.highlighted = highlighted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{Resolution, Theme};

    #[test]
    fn test_new_menu() {
        let menu = MenuModel::new(SettingsSnapshot::default(), 4).unwrap();
        assert_eq!(menu.screen(), MenuScreen::Main);
        assert_eq!(menu.staged(), menu.committed());
        assert_eq!(menu.tutorial_slides(), 4);
        assert_eq!(
            MenuModel::new(SettingsSnapshot::default(), 0),
            Err(ConfigError::NoTutorialSlides)
        );
    }

    #[test]
    fn test_stage_cycle_leaves_committed_alone() {
        let mut menu = MenuModel::default();
        menu.enter_options();
        menu.stage_cycle(SettingField::Theme);

        assert_eq!(menu.staged().theme, Theme::Red);
        assert_eq!(menu.committed().theme, Theme::Standard);
    }

    #[test]
    fn test_commit_reports_diff_and_keeps_staged() {
        let mut menu = MenuModel::default();
        menu.enter_options();
        menu.stage_cycle(SettingField::Resolution);
        let staged = *menu.staged();

        let diff = menu.commit_staged();
        assert!(diff.resolution_changed);
        assert!(!diff.theme_changed);
        assert_eq!(menu.committed(), &staged);
        assert_eq!(menu.staged(), &staged);
        assert_eq!(menu.committed().resolution, Resolution::R1080x720);
    }

    #[test]
    fn test_cancel_restores_staged() {
        let mut menu = MenuModel::default();
        menu.enter_options();
        menu.stage_cycle(SettingField::Difficulty);
        menu.stage_cycle(SettingField::Theme);
        menu.cancel_staged();

        assert_eq!(menu.staged(), menu.committed());
    }

    #[test]
    fn test_enter_options_discards_stale_staging() {
        let mut menu = MenuModel::default();
        menu.stage_cycle(SettingField::Theme);
        menu.enter_options();

        assert_eq!(menu.screen(), MenuScreen::Options);
        assert_eq!(menu.staged(), menu.committed());
    }

    #[test]
    fn test_tutorial_is_clamped() {
        let mut menu = MenuModel::new(SettingsSnapshot::default(), 3).unwrap();
        assert_eq!(menu.advance_tutorial(-1), 0);
        assert_eq!(menu.advance_tutorial(1), 1);
        assert_eq!(menu.advance_tutorial(1), 2);
        assert!(menu.is_last_slide());
        assert_eq!(menu.advance_tutorial(1), 2);
        assert_eq!(menu.advance_tutorial(-1), 1);

        menu.rewind_tutorial();
        assert_eq!(menu.tutorial_slide(), 0);
    }

    #[test]
    fn test_screen_switches_only_change_screen() {
        let mut menu = MenuModel::default();
        menu.advance_tutorial(2);
        let settings = *menu.committed();

        menu.go_to_tutorial();
        assert_eq!(menu.screen(), MenuScreen::Tutorial);
        menu.go_to_credits();
        assert_eq!(menu.screen(), MenuScreen::Credits);
        menu.go_to_main();
        assert_eq!(menu.screen(), MenuScreen::Main);

        assert_eq!(menu.tutorial_slide(), 2);
        assert_eq!(menu.committed(), &settings);
    }

    #[test]
    fn test_active_buttons_follow_screen() {
        let mut menu = MenuModel::default();
        assert_eq!(menu.active_buttons().len(), 5);
        menu.go_to_credits();
        assert!(menu.active_buttons().is_empty());
    }
}
