use derive_more::{Display, Error};

/// The game window could not be brought up.
#[derive(Debug, Display, Error)]
pub enum StartupError {
    /// The window or its event loop could not be created.
    #[display("couldn't create the game window: {message}")]
    Window { message: String },
    /// The graphics context for drawing into the window could not be created.
    #[display("couldn't create the renderer: {message}")]
    Renderer { message: String },
}

/// `eframe::Error` mixes window and graphics failures; only the winit variants are about the
/// window itself.
impl From<eframe::Error> for StartupError {
    fn from(err: eframe::Error) -> Self {
        let message = err.to_string();
        match err {
            eframe::Error::Winit(_) | eframe::Error::WinitEventLoop(_) => {
                Self::Window { message }
            }
            _ => Self::Renderer { message },
        }
    }
}
