//! Configuration loading and persistence

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::schema::Config;
use crate::error::{Error, Result};

/// File name of the config record inside the home directory
pub const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

/// Resolves where the config file lives
pub trait ConfigLocator {
    /// # Errors
    /// Returns an error if the location cannot be determined
    fn config_path(&self) -> Result<PathBuf>;
}

/// `$HOME/.gatorconfig.json`, with no fallback when the home directory is unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeDirLocator;

impl ConfigLocator for HomeDirLocator {
    fn config_path(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::HomeDirectoryUnavailable)?;
        Ok(home.join(CONFIG_FILE_NAME))
    }
}

/// A path chosen up front (`--config`, tests)
#[derive(Debug, Clone)]
pub struct FixedPathLocator(PathBuf);

impl FixedPathLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl ConfigLocator for FixedPathLocator {
    fn config_path(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Reads and writes the config record at the location its locator resolves
///
/// Writes are plain truncate-and-write: there is no locking and no atomic replace, so
/// two processes updating the file concurrently can lose an update.
pub struct ConfigStore {
    locator: Box<dyn ConfigLocator>,
}

impl ConfigStore {
    pub fn new(locator: impl ConfigLocator + 'static) -> Self {
        Self {
            locator: Box::new(locator),
        }
    }

    /// Store backed by `$HOME/.gatorconfig.json`
    #[must_use]
    pub fn home() -> Self {
        Self::new(HomeDirLocator)
    }

    /// # Errors
    /// Returns [`Error::HomeDirectoryUnavailable`] if the home directory cannot be found
    pub fn locate_config_path(&self) -> Result<PathBuf> {
        self.locator.config_path()
    }

    /// Load the config record
    ///
    /// A missing file is an error, not an empty config.
    ///
    /// # Errors
    /// Returns [`Error::ConfigFileUnreadable`] if the file cannot be opened and
    /// [`Error::ConfigMalformed`] if it is not a JSON object of the expected shape
    pub fn read(&self) -> Result<Config> {
        let path = self.locate_config_path()?;
        Self::read_from(&path)
    }

    fn read_from(path: &Path) -> Result<Config> {
        let content = std::fs::read(path).map_err(|source| Error::ConfigFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&content).map_err(|source| Error::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the file contents with `config`
    ///
    /// # Errors
    /// Returns [`Error::ConfigFileUnwritable`] if the file cannot be created or written
    pub fn write(&self, config: &Config) -> Result<()> {
        let path = self.locate_config_path()?;
        Self::write_to(&path, config)
            .map_err(|source| Error::ConfigFileUnwritable { path, source })
    }

    fn write_to(path: &Path, config: &Config) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Set the current user on `config` and persist the whole record
    ///
    /// `config` must already reflect what is on disk; its `db_url` is written back as is.
    ///
    /// # Errors
    /// Returns whatever [`ConfigStore::write`] returns
    pub fn set_user(&self, config: &mut Config, user_name: &str) -> Result<()> {
        config.current_user_name = user_name.to_string();
        self.write(config)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::home()
    }
}
