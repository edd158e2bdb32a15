//! Shared foundation for the Carve workspace: configuration, errors,
//! logging setup, and small utilities with minimal dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod util;
