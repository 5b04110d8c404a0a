// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Crypto, Logging, Store};
use crate::consts::{DEFAULT_KDF_ITERATIONS, DEFAULT_LOG_FILTER, DEFAULT_STORE_DIR, DEFAULT_STORE_FILE};

pub fn default_store_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_STORE_DIR)
}

pub fn default_store_file() -> String {
    DEFAULT_STORE_FILE.into()
}

pub fn default_kdf_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_store() -> Store {
    Store {
        dir: default_store_dir(),
        file: default_store_file(),
    }
}

pub fn default_crypto() -> Crypto {
    Crypto {
        kdf_iterations: default_kdf_iterations(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: default_log_filter(),
    }
}
