// UI module - Slint frontend
//
// This module contains:
// - GuiController: Owns the window and drives the program loop from a frame timer
// - SlintRenderer: Renderer implementation that pushes scenes into the window

pub mod controller;
pub mod renderer;

pub use controller::GuiController;
pub use renderer::SlintRenderer;
