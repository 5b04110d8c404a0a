// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::consts::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::crypto::Cipher;
use crate::error::{Result, VaultError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: Store,
    #[serde(default = "default_crypto")]
    pub crypto: Crypto,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Store {
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_store_file")]
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Crypto {
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            crypto: default_crypto(),
            logging: default_logging(),
        }
    }
}

impl Config {
    /// Resolve the store file. Relative names live inside `store.dir`.
    pub fn store_path(&self, file: Option<&str>) -> PathBuf {
        let file = Path::new(file.unwrap_or(self.store.file.as_str()));
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.store.dir.join(file)
        }
    }

    pub fn cipher(&self) -> Cipher {
        Cipher::with_iterations(self.crypto.kdf_iterations)
    }

    /// Create the store directory (mode 0700 on Unix) if it is missing
    pub fn ensure_store_dir(&self) -> Result<()> {
        let dir = &self.store.dir;
        if dir.exists() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            std::fs::DirBuilder::new()
                .recursive(true)
                .mode(0o700)
                .create(dir)?;
        }
        #[cfg(not(unix))]
        std::fs::create_dir_all(dir)?;

        debug!(dir = %dir.display(), "created store directory");
        Ok(())
    }
}

/// Load config from `$PWSTORE_CONFIG`, or `config.toml` in the default store directory
pub fn load() -> Result<Config> {
    let path = std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_store_dir().join(CONFIG_FILE_NAME));
    load_from(path)
}

/// Load config from an explicit path; a missing file yields the defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using built-in defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let conf: Config = toml::from_str(&content)?;
    if conf.crypto.kdf_iterations == 0 {
        return Err(VaultError::Config("crypto.kdf_iterations must be at least 1".into()));
    }
    Ok(conf)
}
