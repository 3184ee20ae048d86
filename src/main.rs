mod config;
mod error;
mod game;
mod input;
mod render;
mod util;

use eframe::egui;
use error::StartupError;
use game::Game;
use input::FrameInput;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use util::transforms::ScreenTransform;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size([
                config::DISPLAY_WIDTH as f32,
                config::DISPLAY_HEIGHT as f32,
            ])
            .with_position(config::WINDOW_POSITION)
            .with_resizable(false),
        vsync: true,
        ..Default::default()
    };

    info!("opening game window");
    eframe::run_native(
        config::WINDOW_TITLE,
        native_options,
        Box::new(|cc| Box::new(TicTacToe::new(cc))),
    )
    .map_err(StartupError::from)
    .inspect_err(|err| error!(%err, "failed to start"))?;

    info!("game window closed");
    Ok(())
}

struct TicTacToe {
    game: Game,
    title: String,
}

impl TicTacToe {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            game: Game::new(),
            title: String::new(),
        }
    }

    fn play_frame(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let to_screen = ScreenTransform::letterboxed(render::display_rect(), rect);

        ctx.input(FrameInput::read).apply(&mut self.game, &to_screen);

        let painter = ui.painter_at(rect);
        render::paint(&painter, &to_screen, &render::frame(&self.game));
    }
}

impl eframe::App for TicTacToe {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.play_frame(ctx, ui));

        if self.game.is_quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let title = render::title(&self.game);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}
