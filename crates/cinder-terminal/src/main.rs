//! `cinder`: run a Cinder screen in the terminal

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::Mutex;

use cinder_app::{AppState, FsIntent, FsPath, Intent, Store};
use cinder_terminal::cli::{Cli, Commands};
use cinder_terminal::{logging, run_interactive, snapshot, App, Styles};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli
        .load_config()
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    logging::init_tracing(&config, cli.verbose)?;

    let platform = cli.platform(&config);
    let store = Store::shared(cli.command.initial_state()?);
    let deletes = record_deletes(&store);
    let mut app = App::new(store, platform, Styles::default())?;

    if let Commands::Snapshot { width, height, .. } = cli.command {
        print!("{}", snapshot::render_to_string(&app, width, height)?);
        return Ok(());
    }

    run_interactive(&mut app)?;

    // Nothing in this binary performs the delete; report what was requested.
    for path in deletes.lock().iter() {
        println!("Delete requested: {path}");
    }
    Ok(())
}

fn record_deletes(store: &Store) -> Arc<Mutex<Vec<FsPath>>> {
    let deletes = Arc::new(Mutex::new(Vec::new()));
    let sink = deletes.clone();
    store.subscribe(Arc::new(move |intent: &Intent, _: &AppState| {
        if let Intent::Fs(FsIntent::DeleteFile { path }) = intent {
            sink.lock().push(path.clone());
        }
    }));
    deletes
}
