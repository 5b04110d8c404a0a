// src/cli.rs
//! Command-line surface

use clap::{ArgGroup, Parser};

use crate::commands::Action;

/// Local password store. Without arguments, lists all entries.
#[derive(Parser, Debug)]
#[command(name = "pwstore", version, about, long_about = None)]
#[command(group(ArgGroup::new("action").args(["add", "delete", "update", "name"]).multiple(false)))]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Password store file; relative names live in the store directory
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Add a password entry
    #[arg(short, long, value_name = "NAME")]
    pub add: Option<String>,

    /// Delete an entry
    #[arg(short, long, value_name = "NAME")]
    pub delete: Option<String>,

    /// Replace the username and password of an entry
    #[arg(short, long, value_name = "NAME")]
    pub update: Option<String>,

    /// Copy the password of NAME into the clipboard and print its username
    pub name: Option<String>,
}

const EXAMPLES: &str = "\
Examples:
  List entries:                 pwstore
  Add entry in MyPasswordStore: pwstore --file MyPasswordStore --add entry
  Delete entry:                 pwstore --delete entry
  Update entry:                 pwstore --update entry
  Copy password for entry:      pwstore entry";

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(name) = &self.add {
            Action::Add(name.clone())
        } else if let Some(name) = &self.delete {
            Action::Delete(name.clone())
        } else if let Some(name) = &self.update {
            Action::Update(name.clone())
        } else if let Some(name) = &self.name {
            Action::Get(name.clone())
        } else {
            Action::List
        }
    }
}
