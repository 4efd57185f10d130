//! Editor session and run-lifecycle controller for an embeddable code runner.
//!
//! This crate keeps a code editor's language and syntax mode in step with the
//! user's selection, manages the draggable run console, and submits code to a
//! remote execution service, reporting its output back in the console. Hosts
//! bind their UI to it by sending `Event`s.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub mod test_utils;

pub use application::{Codesheet, CodesheetProps, EventsService};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Disposition, Event, LanguageId, RunResult, RunState};
pub use infrastructure::editors::MemoryEditor;
