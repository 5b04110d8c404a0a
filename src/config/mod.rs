// src/config/mod.rs
//! Configuration system for pwstore
//!
//! TOML file with built-in defaults; loaded once in `main` and passed down.

pub use app::{load, load_from, Config, Crypto, Logging, Store};

mod app;
mod defaults;
