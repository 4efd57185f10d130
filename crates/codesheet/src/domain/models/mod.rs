mod editor;
mod errors;
mod event;
mod execution_client;
mod language;
mod mode_fetcher;
mod panel;
mod run;

pub use editor::*;
pub use errors::*;
pub use event::*;
pub use execution_client::*;
pub use language::*;
pub use mode_fetcher::*;
pub use panel::*;
pub use run::*;
