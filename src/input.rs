//! Reading one frame's worth of player input out of egui.

use egui::{Event, InputState, Key, Pos2};

use crate::game::Game;
use crate::render;
use crate::util::transforms::ScreenTransform;

/// The input gathered for a single frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Screen positions of every pointer button press, in the order they happened.
    pub presses: Vec<Pos2>,
    /// The window was asked to close, or Escape was pressed.
    pub quit: bool,
}

impl FrameInput {
    pub fn read(i: &InputState) -> Self {
        let presses = i
            .events
            .iter()
            .filter_map(|event| match event {
                Event::PointerButton {
                    pos, pressed: true, ..
                } => Some(*pos),
                _ => None,
            })
            .collect();
        let quit = i.viewport().close_requested() || i.key_pressed(Key::Escape);
        Self { presses, quit }
    }

    /// Plays the presses against `game`, then passes on the quit signal.
    pub fn apply(self, game: &mut Game, to_screen: &ScreenTransform) {
        if let Some(to_display) = to_screen.inverse() {
            for pos in self.presses {
                render::click(game, to_display.map_point(pos));
            }
        }
        if self.quit {
            game.quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameState};
    use egui::{
        Modifiers, PointerButton, RawInput, Rect, ViewportEvent, ViewportId, ViewportInfo,
    };

    fn raw_input(events: Vec<Event>, viewport_events: Vec<ViewportEvent>) -> RawInput {
        let mut raw = RawInput {
            events,
            ..Default::default()
        };
        raw.viewports.insert(
            ViewportId::ROOT,
            ViewportInfo {
                events: viewport_events,
                ..Default::default()
            },
        );
        raw
    }

    fn read(raw: RawInput) -> FrameInput {
        let ctx = egui::Context::default();
        let mut input = FrameInput::default();
        let _ = ctx.run(raw, |ctx| input = ctx.input(FrameInput::read));
        input
    }

    fn press(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        }
    }

    fn identity() -> ScreenTransform {
        ScreenTransform::letterboxed(render::display_rect(), render::display_rect())
    }

    #[test]
    fn collects_presses_and_skips_releases() {
        let raw = raw_input(
            vec![
                press(Pos2::new(10.0, 10.0)),
                Event::PointerButton {
                    pos: Pos2::new(20.0, 20.0),
                    button: PointerButton::Primary,
                    pressed: false,
                    modifiers: Modifiers::NONE,
                },
                press(Pos2::new(300.0, 300.0)),
            ],
            vec![],
        );
        let input = read(raw);
        assert_eq!(
            input.presses,
            vec![Pos2::new(10.0, 10.0), Pos2::new(300.0, 300.0)]
        );
        assert!(!input.quit);
    }

    #[test]
    fn close_request_is_a_quit() {
        let input = read(raw_input(vec![], vec![ViewportEvent::Close]));
        assert!(input.quit);
        assert!(input.presses.is_empty());
    }

    #[test]
    fn quit_ends_the_game_after_the_presses() {
        let mut game = Game::new();
        FrameInput {
            presses: vec![Pos2::new(10.0, 10.0)],
            quit: true,
        }
        .apply(&mut game, &identity());
        assert_eq!(game.board().get(0, 0), Some(Cell::X));
        assert_eq!(game.state(), GameState::Quit);
    }

    #[test]
    fn presses_are_mapped_back_to_display_pixels() {
        // The display drawn at double size, centered in a wide window.
        let to_screen = ScreenTransform::letterboxed(
            render::display_rect(),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(2440.0, 1220.0)),
        );
        let mut game = Game::new();
        FrameInput {
            presses: vec![Pos2::new(610.0 + 2.0 * 450.0, 2.0 * 20.0)],
            quit: false,
        }
        .apply(&mut game, &to_screen);
        assert_eq!(game.board().get(0, 2), Some(Cell::X));
    }
}
