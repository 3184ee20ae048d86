//! Turning clicks into board cells and the board into draw commands.
//!
//! Everything here works in display pixels: a fixed `DISPLAY_WIDTH` x `DISPLAY_HEIGHT` surface with
//! the origin at the top left. [`paint`] maps the commands onto the actual window.

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke};

use crate::config::{
    BACKGROUND_COLOR, CELL_HEIGHT, CELL_WIDTH, DISPLAY_HEIGHT, DISPLAY_WIDTH, GRID_COLOR,
    GRID_LINE_WIDTH, PLAYER_O_COLOR, PLAYER_X_COLOR, TIE_COLOR, WINDOW_TITLE,
};
use crate::game::{Board, Cell, Game, GameState, Player, GRID};
use crate::util::transforms::ScreenTransform;

/// Gap between a marker and the edges of its cell, as a fraction of the cell size.
const MARKER_INSET: f32 = 0.2;
/// Thickness of a marker's strokes, as a fraction of the cell size.
const MARKER_THICKNESS: f32 = 0.12;
/// Number of blocks along each diagonal of an X.
const X_STEPS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole frame.
    Clear(Color32),
    Line { from: Pos2, to: Pos2, color: Color32 },
    FillRect { rect: Rect, color: Color32 },
}

pub fn display_rect() -> Rect {
    Rect::from_min_max(
        Pos2::ZERO,
        Pos2::new(DISPLAY_WIDTH as f32, DISPLAY_HEIGHT as f32),
    )
}

/// Returns the `(row, col)` under a point on the display, by integer division with the cell size.
///
/// Points off the display give `None`. Points in the sliver left over after dividing the display
/// into cells give a row or column of `GRID`, which the game treats as off the board.
pub fn cell_at(p: Pos2) -> Option<(usize, usize)> {
    let on_display = (0.0..DISPLAY_WIDTH as f32).contains(&p.x)
        && (0.0..DISPLAY_HEIGHT as f32).contains(&p.y);
    if !on_display {
        return None;
    }
    let col = p.x as u32 / CELL_WIDTH;
    let row = p.y as u32 / CELL_HEIGHT;
    Some((row as usize, col as usize))
}

/// Forwards a pointer press at display position `p` to the game.
pub fn click(game: &mut Game, p: Pos2) {
    if let Some((row, col)) = cell_at(p) {
        game.handle_click(row, col);
    }
}

/// The window title for `game`, saying whose turn it is or how it ended.
pub fn title(game: &Game) -> String {
    match game.state() {
        GameState::Running => format!("{WINDOW_TITLE} - {} to move", game.current_player()),
        GameState::Won(winner) => format!("{WINDOW_TITLE} - {winner} wins, click to play again"),
        GameState::Tie => format!("{WINDOW_TITLE} - tie, click to play again"),
        GameState::Quit => WINDOW_TITLE.to_string(),
    }
}

/// Builds the draw commands for one frame of `game`.
pub fn frame(game: &Game) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(BACKGROUND_COLOR)];
    match game.state() {
        GameState::Running => {
            grid(&mut commands, GRID_COLOR);
            markers(&mut commands, game.board(), PLAYER_X_COLOR, PLAYER_O_COLOR);
        }
        GameState::Won(Player::X) => game_over(&mut commands, game.board(), PLAYER_X_COLOR),
        GameState::Won(Player::O) => game_over(&mut commands, game.board(), PLAYER_O_COLOR),
        GameState::Tie => game_over(&mut commands, game.board(), TIE_COLOR),
        GameState::Quit => {}
    }
    commands
}

fn game_over(commands: &mut Vec<DrawCommand>, board: &Board, color: Color32) {
    grid(commands, color);
    markers(commands, board, color, color);
}

fn grid(commands: &mut Vec<DrawCommand>, color: Color32) {
    let (width, height) = (DISPLAY_WIDTH as f32, DISPLAY_HEIGHT as f32);
    for i in 1..GRID as u32 {
        let x = (i * CELL_WIDTH) as f32;
        let y = (i * CELL_HEIGHT) as f32;
        commands.push(DrawCommand::Line {
            from: Pos2::new(x, 0.0),
            to: Pos2::new(x, height),
            color,
        });
        commands.push(DrawCommand::Line {
            from: Pos2::new(0.0, y),
            to: Pos2::new(width, y),
            color,
        });
    }
}

fn markers(commands: &mut Vec<DrawCommand>, board: &Board, x_color: Color32, o_color: Color32) {
    for (row, col, cell) in board.iter() {
        match cell {
            Cell::X => x_marker(commands, marker_box(row, col), x_color),
            Cell::O => o_marker(commands, marker_box(row, col), o_color),
            Cell::Empty => {}
        }
    }
}

/// The square a marker is drawn in: the cell shrunk by `MARKER_INSET` on each side.
fn marker_box(row: usize, col: usize) -> Rect {
    let (cell_w, cell_h) = (CELL_WIDTH as f32, CELL_HEIGHT as f32);
    let cell = Rect::from_min_size(
        Pos2::new(col as f32 * cell_w, row as f32 * cell_h),
        [cell_w, cell_h].into(),
    );
    cell.shrink2([cell_w * MARKER_INSET, cell_h * MARKER_INSET].into())
}

fn thickness() -> f32 {
    CELL_WIDTH.min(CELL_HEIGHT) as f32 * MARKER_THICKNESS
}

/// An X as two staircases of blocks running corner to corner.
fn x_marker(commands: &mut Vec<DrawCommand>, area: Rect, color: Color32) {
    let t = thickness();
    let step_x = (area.width() - t) / (X_STEPS - 1) as f32;
    let step_y = (area.height() - t) / (X_STEPS - 1) as f32;
    for i in 0..X_STEPS {
        let y = area.min.y + i as f32 * step_y;
        for j in [i, X_STEPS - 1 - i] {
            let x = area.min.x + j as f32 * step_x;
            commands.push(DrawCommand::FillRect {
                rect: Rect::from_min_size(Pos2::new(x, y), [t, t].into()),
                color,
            });
        }
    }
}

/// An O as a hollow square.
fn o_marker(commands: &mut Vec<DrawCommand>, area: Rect, color: Color32) {
    let t = thickness();
    let sides = [
        Rect::from_min_max(area.min, Pos2::new(area.max.x, area.min.y + t)),
        Rect::from_min_max(Pos2::new(area.min.x, area.max.y - t), area.max),
        Rect::from_min_max(area.min, Pos2::new(area.min.x + t, area.max.y)),
        Rect::from_min_max(Pos2::new(area.max.x - t, area.min.y), area.max),
    ];
    for rect in sides {
        commands.push(DrawCommand::FillRect { rect, color });
    }
}

/// Executes `commands` with `painter`, placing the display on screen with `to_screen`.
pub fn paint(painter: &Painter, to_screen: &ScreenTransform, commands: &[DrawCommand]) {
    for command in commands {
        match *command {
            DrawCommand::Clear(color) => {
                painter.rect_filled(painter.clip_rect(), Rounding::ZERO, color);
            }
            DrawCommand::Line { from, to, color } => {
                painter.line_segment(
                    [to_screen.map_point(from), to_screen.map_point(to)],
                    Stroke::new(GRID_LINE_WIDTH * to_screen.scale(), color),
                );
            }
            DrawCommand::FillRect { rect, color } => {
                painter.rect_filled(to_screen.map_rect(rect), Rounding::ZERO, color);
            }
        }
    }
}
