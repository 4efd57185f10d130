mod drag;
mod editor_session;
mod mode_loader;
mod run_console;
mod run_controller;

pub use drag::*;
pub use editor_session::*;
pub use mode_loader::*;
pub use run_console::*;
pub use run_controller::*;
