//! Infrastructure layer providing external integrations.
//!
//! This module contains implementations of the domain collaborators: the
//! execution API client, the syntax mode fetcher, and an in-memory editor.

pub mod clients;
pub mod editors;
pub mod modes;
