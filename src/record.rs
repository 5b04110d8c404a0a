// src/record.rs
//! A single named credential as it is kept in memory and on disk

use serde::{Deserialize, Serialize};

use crate::consts::SELF_RECORD;

/// One credential entry. `secret` is always ciphertext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub user: String,
    #[serde(with = "base64_bytes")]
    pub secret: Vec<u8>,
}

impl Record {
    pub fn new(name: impl Into<String>, user: impl Into<String>, secret: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            secret,
        }
    }

    /// The reserved record whose secret is the encrypted master passphrase
    pub fn self_record(secret: Vec<u8>) -> Self {
        Self::new(SELF_RECORD, "", secret)
    }

    pub fn is_self(&self) -> bool {
        self.name == SELF_RECORD
    }
}

// Debug shows the secret length only.
impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("secret", &format_args!("<{} bytes>", self.secret.len()))
            .finish()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
