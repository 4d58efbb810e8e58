mod app;
mod links;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::FolioApp;
pub use message::Message;
pub use state::AppState;
