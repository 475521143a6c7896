// Export modules for testing
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod state;

// Command modules
pub mod commands;

pub use error::{Error, Result};
