// src/bin/pwstore.rs
//! pwstore — verify the master password, run one action, save the store

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pwstore::cli::Cli;
use pwstore::clipboard::{ClipboardSink, SystemClipboard};
use pwstore::commands::{self, Io};
use pwstore::config::{self, Config};
use pwstore::prompt::TerminalPrompter;
use pwstore::{RecordStore, VerificationFlow};

/// Connects to the desktop clipboard only when a password is actually copied
#[derive(Default)]
struct LazyClipboard(Option<SystemClipboard>);

impl ClipboardSink for LazyClipboard {
    fn write_text(&mut self, text: &str) -> pwstore::Result<()> {
        if self.0.is_none() {
            self.0 = Some(SystemClipboard::new()?);
        }
        if let Some(clipboard) = self.0.as_mut() {
            clipboard.write_text(text)?;
        }
        Ok(())
    }
}

fn init_tracing(config: &Config) {
    // RUST_LOG wins; the config filter applies otherwise. Logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().context("failed to load config")?;
    init_tracing(&config);
    config
        .ensure_store_dir()
        .context("failed to create store directory")?;

    let path = config.store_path(cli.file.as_deref());
    debug!(path = %path.display(), "using password store");

    let mut prompter = TerminalPrompter;
    let mut flow = VerificationFlow::new(config.cipher());
    let mut store = RecordStore::load(&path, &mut flow, &mut prompter)
        .context("error loading password store")?;

    // A store bootstrapped by this invocation is already unlocked
    if !flow.is_ready() {
        flow.unlock(&store, &mut prompter)?;
        println!("Password OK");
    }
    let session = flow.session().context("password store is locked")?;

    let mut clipboard = LazyClipboard::default();
    let mut stdout = std::io::stdout();
    let mut io = Io {
        prompter: &mut prompter,
        clipboard: &mut clipboard,
        out: &mut stdout,
    };
    commands::execute(&cli.action(), &mut store, session, &mut io)?;

    store
        .save(&path)
        .context("error saving password store")?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
