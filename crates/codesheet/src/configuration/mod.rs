//! Configuration management for the code runner.
//!
//! This module provides centralized configuration for the execution API,
//! syntax mode assets, the starting language and console placement.

mod config;

pub use config::*;
