//! Core domain logic for the code runner.
//!
//! This module holds the editor session, the run console and the run lifecycle,
//! independent of any page, terminal or HTTP implementation. Collaborators are
//! reached through the traits in `models`.

pub mod models;
pub mod services;
