//! Configuration module
//!
//! This module persists the gator session record (database URL and logged-in user)
//! as JSON in the user's home directory.

pub mod loader;
pub mod schema;

// Re-exported for the library API; the binary only uses part of it
#[allow(unused_imports)]
pub use loader::{ConfigLocator, ConfigStore, FixedPathLocator, HomeDirLocator, CONFIG_FILE_NAME};
pub use schema::Config;
