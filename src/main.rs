//! Decision Duck terminal session.
//!
//! Usage: `decision-duck [share-link]`

use std::error::Error;
use std::io;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use decision_duck::adapters::{
    run_session, CommandClipboard, FileKeyValueStore, InMemoryKeyValueStore, TerminalPresenter,
    UnavailableClipboard,
};
use decision_duck::application::DecisionController;
use decision_duck::config::{AppConfig, StorageBackend};
use decision_duck::ports::{Clipboard, KeyValueStore};

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.env_filter()?)
        .with_writer(io::stderr)
        .init();

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.directory)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };

    let clipboard: Arc<dyn Clipboard> = match config
        .clipboard
        .command
        .as_deref()
        .and_then(CommandClipboard::from_command_line)
    {
        Some(clipboard) => Arc::new(clipboard.with_timeout(config.clipboard.timeout())),
        None => Arc::new(UnavailableClipboard),
    };

    let link = std::env::args().nth(1);

    tracing::debug!(backend = ?config.storage.backend, "Starting session");
    let mut controller = DecisionController::start(
        store,
        clipboard,
        Box::new(StdRng::from_entropy()),
        config.session_settings(),
        link.as_deref(),
    );

    let mut presenter = TerminalPresenter::new(io::stdout());
    println!("Decision Duck. Type 'help' for commands.");
    run_session(io::stdin().lock(), &mut controller, &mut presenter)?;
    Ok(())
}
