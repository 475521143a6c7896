//! Program state handed to every command handler

use crate::config::{Config, ConfigStore};
use crate::error::Result;

/// In-memory config plus the store it was read from
pub struct State {
    pub config: Config,
    pub store: ConfigStore,
}

impl State {
    #[must_use]
    pub const fn new(config: Config, store: ConfigStore) -> Self {
        Self { config, store }
    }

    /// Read the config through `store` and wrap both
    ///
    /// # Errors
    /// Returns an error if the config cannot be located, read or parsed
    pub fn load(store: ConfigStore) -> Result<Self> {
        let config = store.read()?;
        Ok(Self::new(config, store))
    }
}
