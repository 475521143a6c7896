//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};

/// Persisted session record stored in `~/.gatorconfig.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Database connection string
    #[serde(default)]
    pub db_url: String,
    /// Name of the user logged in by the last `login`
    #[serde(default)]
    pub current_user_name: String,
}
