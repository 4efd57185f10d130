//! Application layer wiring the components together.
//!
//! `Codesheet` owns one editor session, run console and run controller and
//! translates host UI events into operations on them. `EventsService` drives
//! it from a channel so long-running work never blocks event handling.

mod app;
mod events;

pub use app::*;
pub use events::*;
