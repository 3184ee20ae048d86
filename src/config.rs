//! Window and palette settings.

use egui::Color32;

use crate::game::GRID;

pub const WINDOW_TITLE: &str = "Tic Tac Toe";
pub const WINDOW_POSITION: [f32; 2] = [100.0, 100.0];

/// Size of the logical display, in pixels. Clicks and draw commands are expressed in this space.
pub const DISPLAY_WIDTH: u32 = 610;
pub const DISPLAY_HEIGHT: u32 = 610;

pub const CELL_WIDTH: u32 = DISPLAY_WIDTH / GRID as u32;
pub const CELL_HEIGHT: u32 = DISPLAY_HEIGHT / GRID as u32;

pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
pub const GRID_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
pub const PLAYER_X_COLOR: Color32 = Color32::from_rgb(255, 50, 50);
pub const PLAYER_O_COLOR: Color32 = Color32::from_rgb(50, 100, 255);
pub const TIE_COLOR: Color32 = Color32::from_rgb(100, 100, 100);

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Width of the grid lines, in display pixels.
pub const GRID_LINE_WIDTH: f32 = 2.0;
