// src/prompt.rs
//! Reading passphrases and usernames from the user

use std::io::{BufRead, Write};

use crate::error::{Result, VaultError};

/// Source of interactive input. The vault core only talks to this trait.
pub trait Prompter {
    /// Read a secret without echoing it
    fn prompt_secret(&mut self, label: &str) -> Result<String>;

    /// Read a plain line of text (trailing newline removed)
    fn prompt_line(&mut self, label: &str) -> Result<String>;
}

/// Prompter bound to the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt_secret(&mut self, label: &str) -> Result<String> {
        rpassword::prompt_password(label).map_err(|e| VaultError::Prompt(e.to_string()))
    }

    fn prompt_line(&mut self, label: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{label}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| VaultError::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(VaultError::Prompt("unexpected end of input".into()));
        }
        Ok(trim_newline(line))
    }
}

fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_newline_strips_lf_and_crlf_only() {
        assert_eq!(trim_newline("alice\n".into()), "alice");
        assert_eq!(trim_newline("alice\r\n".into()), "alice");
        assert_eq!(trim_newline("alice".into()), "alice");
        assert_eq!(trim_newline(" alice \n".into()), " alice ");
    }
}
