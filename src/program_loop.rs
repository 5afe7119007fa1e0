// Frame loop module
//
// ProgramLoop owns both models and the renderer. Each frame it maps raw pointer
// input onto the virtual canvas, lets the Controller act on the active model, then
// carries out whatever the Controller flagged: exit, asset or display rebuilds,
// model hand-off, and redraw.

use crate::metrics::Metrics;
use crate::models::{CANVAS_HEIGHT, CANVAS_WIDTH, GameModel, MenuModel, Point, Resolution, Theme};
use crate::scene::Scene;
use crate::state::{ActiveModel, Controller, Transition, UserInput};

/// Drawing backend driven by the program loop.
///
/// Implementations only read the scene they are given; rebuild requests replace
/// the renderer's own resources.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, scene: &Scene);

    /// Reload theme-dependent assets.
    fn rebuild_assets(&mut self, theme: Theme);

    /// Resize the output surface.
    fn rebuild_display(&mut self, resolution: Resolution);
}

/// Linear mapping between physical window pixels and the virtual canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    pub fn new(resolution: Resolution) -> Self {
        let (width, height) = resolution.dimensions();
        Self::with_size(width, height)
    }

    /// Viewport for a window of `width` x `height` physical pixels.
    ///
    /// Zero dimensions are clamped to one pixel.
    pub fn with_size(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            scale_x: CANVAS_WIDTH / width as f32,
            scale_y: CANVAS_HEIGHT / height as f32,
        }
    }

    /// Physical pixels to canvas units.
    pub fn to_virtual(&self, physical: Point) -> Point {
        Point::new(physical.x * self.scale_x, physical.y * self.scale_y)
    }

    /// Canvas units to physical pixels.
    pub fn to_physical(&self, canvas: Point) -> Point {
        Point::new(canvas.x / self.scale_x, canvas.y / self.scale_y)
    }

    /// Window size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }
}

/// One frame of input as the window reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawInput {
    /// Pointer position in physical pixels.
    pub position: Point,
    /// A mouse-down edge happened since the previous frame.
    pub clicked: bool,
    /// Live window size in physical pixels. `None` keeps the current viewport.
    pub window_size: Option<(u32, u32)>,
}

impl RawInput {
    pub fn new(x: f32, y: f32, clicked: bool) -> Self {
        Self {
            position: Point::new(x, y),
            clicked,
            window_size: None,
        }
    }

    /// Attach the window size measured this frame.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = Some((width, height));
        self
    }
}

/// Whether the frontend should keep ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Which model receives input. The menu is stored separately because it lives
/// for the whole process.
#[derive(Debug)]
enum Active {
    Menu,
    Game(GameModel),
}

#[derive(Debug)]
pub struct ProgramLoop<R: Renderer> {
    controller: Controller,
    menu: MenuModel,
    active: Active,
    viewport: Viewport,
    renderer: R,
    metrics: Metrics,
}

impl<R: Renderer> ProgramLoop<R> {
    pub fn new(menu: MenuModel, renderer: R) -> Self {
        let viewport = Viewport::new(menu.committed().resolution);
        Self {
            controller: Controller::new(),
            menu,
            active: Active::Menu,
            viewport,
            renderer,
            metrics: Metrics::new(),
        }
    }

    /// Build the display and assets for the committed settings and draw the first frame.
    pub fn start(&mut self) {
        let settings = *self.menu.committed();
        tracing::info!(
            "Starting program loop at {} with {} theme",
            settings.resolution,
            settings.theme
        );

        self.renderer.rebuild_display(settings.resolution);
        self.renderer.rebuild_assets(settings.theme);
        self.render();
    }

    /// Run one frame.
    pub fn step(&mut self, raw: RawInput) -> LoopControl {
        self.metrics.record_frame();
        self.track_window_size(raw.window_size);

        let input = UserInput {
            position: self.viewport.to_virtual(raw.position),
            clicked: raw.clicked,
        };
        let solved_before = self.game_solved();

        let model = match &mut self.active {
            Active::Menu => ActiveModel::Menu(&mut self.menu),
            Active::Game(game) => ActiveModel::Game(game),
        };
        self.controller.handle_input(input, model);

        if !solved_before && self.game_solved() {
            self.metrics.record_game_won();
        }

        if self.controller.exit_requested() {
            tracing::info!("Exit requested, stopping program loop");
            return LoopControl::Exit;
        }

        self.apply_settings_updates();

        if let Some(transition) = self.controller.take_next_state() {
            self.apply_transition(transition);
            self.controller.mark_updated();
        }

        if self.controller.model_updated() {
            self.render();
            self.controller.reset_render_flag();
        }

        LoopControl::Continue
    }

    // The user may resize the window, so the pointer is scaled by what is on screen
    fn track_window_size(&mut self, window_size: Option<(u32, u32)>) {
        let Some((width, height)) = window_size else {
            return;
        };
        if self.viewport.size() != (width, height) {
            tracing::debug!("Window is now {}x{}, updating viewport", width, height);
            self.viewport = Viewport::with_size(width, height);
        }
    }

    fn apply_settings_updates(&mut self) {
        let settings = *self.menu.committed();

        if self.controller.asset_package_updated() {
            tracing::info!("Rebuilding assets for {} theme", settings.theme);
            self.renderer.rebuild_assets(settings.theme);
            self.metrics.record_asset_rebuild();
        }

        if self.controller.resolution_updated() {
            tracing::info!("Rebuilding display at {}", settings.resolution);
            self.viewport = Viewport::new(settings.resolution);
            self.renderer.rebuild_display(settings.resolution);
            self.metrics.record_display_rebuild();
            self.controller.mark_updated();
        }

        self.controller.reset_settings_update_flags();
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::EnterGame => {
                let difficulty = self.menu.committed().difficulty;
                tracing::info!("Starting game with {}", difficulty);
                self.active = Active::Game(GameModel::new(difficulty));
                self.metrics.record_game_started();
            }
            Transition::EnterMenu => {
                if let Active::Game(game) = &self.active {
                    tracing::info!("Leaving game after {} moves", game.moves());
                    self.metrics.record_moves(game.moves());
                }
                self.active = Active::Menu;
                // The pointer moved while the game was showing
                self.menu.set_highlighted(None);
            }
        }
    }

    fn game_solved(&self) -> bool {
        matches!(&self.active, Active::Game(game) if game.is_solved())
    }

    fn render(&mut self) {
        let scene = self.scene();
        self.renderer.render(&scene);
        self.metrics.record_redraw();
    }

    /// Project the active model for drawing.
    pub fn scene(&self) -> Scene {
        match &self.active {
            Active::Menu => Scene::from_menu(&self.menu),
            Active::Game(game) => Scene::from_game(game, self.menu.committed().theme),
        }
    }

    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    /// The running game, if the game board is showing.
    pub fn game(&self) -> Option<&GameModel> {
        match &self.active {
            Active::Menu => None,
            Active::Game(game) => Some(game),
        }
    }

    pub fn in_game(&self) -> bool {
        matches!(self.active, Active::Game(_))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_identity_at_canvas_size() {
        let viewport = Viewport::new(Resolution::R960x640);
        assert_eq!(viewport.scale(), (1.0, 1.0));
        assert_eq!(viewport.to_virtual(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
    }

    #[test]
    fn test_viewport_scales_per_axis() {
        let viewport = Viewport::new(Resolution::R720x480);
        let canvas = viewport.to_virtual(Point::new(360.0, 240.0));
        assert!((canvas.x - 480.0).abs() < 1e-3);
        assert!((canvas.y - 320.0).abs() < 1e-3);
    }

    #[test]
    fn test_viewport_clamps_zero_size() {
        let viewport = Viewport::with_size(0, 0);
        assert_eq!(viewport.size(), (1, 1));
        assert_eq!(viewport.scale(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_viewport_round_trip_within_tolerance() {
        for resolution in Resolution::ALL {
            let viewport = Viewport::new(resolution);
            let physical = Point::new(resolution.width() as f32 - 1.0, 17.0);
            let back = viewport.to_physical(viewport.to_virtual(physical));
            assert!((back.x - physical.x).abs() < 1e-2, "{resolution}");
            assert!((back.y - physical.y).abs() < 1e-2, "{resolution}");
        }
    }
}
