// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout pwstore.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // master key, padded from the passphrase

// Dynamic secrets
dynamic_alias!(Passphrase, String); // master passphrase as typed at the prompt
