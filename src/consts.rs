// src/consts.rs
//! Shared constants: key layout, reserved names, defaults

/// Length of the derived master key in bytes
pub const KEY_LEN: usize = 32;

/// Filler byte appended to the passphrase until it reaches `KEY_LEN`
pub const KEY_PAD_BYTE: u8 = b'a';

/// Name of the reserved record holding the encrypted master passphrase
pub const SELF_RECORD: &str = "self";

/// PBKDF2 iterations the AES Crypt v3 container applies to every secret
// ~0.2-0.4s per secret in release builds
pub const DEFAULT_KDF_ITERATIONS: u32 = 300_000;

/// Store file name used when `--file` is not given
pub const DEFAULT_STORE_FILE: &str = "Store";

/// Store directory name under `$HOME`
pub const DEFAULT_STORE_DIR: &str = ".pwstore";

/// Config file name inside the store directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Overrides the config file location
pub const CONFIG_ENV_VAR: &str = "PWSTORE_CONFIG";

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Header magic for AES-Crypt v3 files
pub const AESCRYPT_V3_HEADER: &[u8; 5] = b"AES\x03\x00";
