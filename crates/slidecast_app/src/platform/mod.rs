mod app;
mod effects;
mod logging;
mod ui;

pub use app::{run_app, AppArgs};
pub use logging::LogDestination;
