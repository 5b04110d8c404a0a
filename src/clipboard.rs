// src/clipboard.rs
//! Where revealed passwords go instead of stdout

use crate::error::Result;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, via `arboard`
#[cfg(feature = "cli")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "cli")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| crate::error::VaultError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "cli")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| crate::error::VaultError::Clipboard(e.to_string()))
    }
}
