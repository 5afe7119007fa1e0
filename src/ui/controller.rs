// GUI Controller - Drives the program loop from the Slint event loop
//
// This module contains the GuiController which coordinates between:
// - Slint UI (MainWindow)
// - ProgramLoop (models, Controller and renderer)
//
// It handles:
// - Latching mouse-down edges between frames
// - A repeating frame timer that samples the pointer and steps the loop
// - Quitting the event loop when the menu's Exit button is used

use crate::models::{LaunchConfig, MenuModel};
use crate::program_loop::{LoopControl, ProgramLoop, RawInput};
use crate::ui::renderer::SlintRenderer;
use anyhow::{Context, Result};
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

// Include the generated Slint code
slint::include_modules!();

type SharedLoop = Rc<RefCell<ProgramLoop<SlintRenderer>>>;

/// GUI Controller that wires up the Slint UI with the program loop
///
/// Everything runs on the Slint event loop thread: the frame timer, the pointer
/// callback, and the program loop itself.
///
/// # Example
/// ```ignore
/// let config = ConfigManager::default().load_launch_config()?;
/// let menu = MenuModel::new(config.settings, config.tutorial_slides)?;
/// let controller = GuiController::new(menu, &config)?;
/// controller.run()?;  // Blocks until the window is closed
/// ```
pub struct GuiController {
    /// The Slint UI window
    ui: MainWindow,

    /// Program loop shared with the frame timer
    program_loop: SharedLoop,

    /// Frame timer, stopped when the controller is dropped
    _frame_timer: Timer,
}

impl GuiController {
    /// Create a new GUI controller and draw the first frame
    pub fn new(menu: MenuModel, config: &LaunchConfig) -> Result<Self> {
        let ui = MainWindow::new().context("Failed to create Slint UI")?;

        let mut program_loop = ProgramLoop::new(menu, SlintRenderer::new(ui.as_weak()));
        program_loop.start();
        let program_loop = Rc::new(RefCell::new(program_loop));

        let pressed = Rc::new(Cell::new(false));
        Self::setup_callbacks(&ui, &pressed);

        let frame_timer = Timer::default();
        Self::start_frame_timer(
            &frame_timer,
            &ui,
            &program_loop,
            &pressed,
            config.frame_interval(),
        );

        tracing::info!(
            "GUI controller initialized, frame interval {:?}",
            config.frame_interval()
        );

        Ok(Self {
            ui,
            program_loop,
            _frame_timer: frame_timer,
        })
    }

    /// Run the GUI (blocks until window is closed)
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        tracing::info!("Starting GUI event loop");
        self.ui.run()
    }

    /// Log the session metrics collected by the program loop
    pub fn log_metrics(&self) {
        self.program_loop.borrow().metrics().log_summary();
    }

    fn setup_callbacks(ui: &MainWindow, pressed: &Rc<Cell<bool>>) {
        let pressed = Rc::clone(pressed);

        // Mouse-down edge, consumed by the next frame
        ui.on_pointer_pressed(move || {
            pressed.set(true);
        });

        ui.window().on_close_requested(|| {
            tracing::info!("Close requested - allowing window to close");
            slint::CloseRequestResponse::HideWindow
        });

        tracing::debug!("UI callbacks configured");
    }

    fn start_frame_timer(
        timer: &Timer,
        ui: &MainWindow,
        program_loop: &SharedLoop,
        pressed: &Rc<Cell<bool>>,
        interval: Duration,
    ) {
        let ui_weak = ui.as_weak();
        let program_loop = Rc::clone(program_loop);
        let pressed = Rc::clone(pressed);

        timer.start(TimerMode::Repeated, interval, move || {
            let Some(ui) = ui_weak.upgrade() else {
                return;
            };

            // Slint reports logical pixels; the loop expects physical ones
            let window = ui.window();
            let scale = window.scale_factor();
            let size = window.size();
            let input = RawInput::new(
                ui.get_pointer_x() * scale,
                ui.get_pointer_y() * scale,
                pressed.replace(false),
            )
            .with_window_size(size.width, size.height);

            let control = program_loop.borrow_mut().step(input);
            if control == LoopControl::Exit {
                if let Err(e) = slint::quit_event_loop() {
                    tracing::error!("Failed to quit event loop: {}", e);
                }
            }
        });
    }
}
