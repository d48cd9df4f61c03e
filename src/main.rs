use anyhow::Result;
use basketry::api::HttpBackend;
use basketry::app::event::{MutationKind, StoreEvent};
use basketry::app::store::Store;
use basketry::config::{self, AppConfig};
use basketry::logging;
use basketry::ui::{self, commands};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional explicit config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = config::load_config(config_path.as_deref())?;
    logging::init(&cfg.logging)?;

    if let Err(e) = run(cfg).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cfg: AppConfig) -> Result<()> {
    let backend = HttpBackend::new(cfg.api.clone())?;
    let store = Arc::new(Store::new(&cfg, backend));
    tracing::info!(search = %cfg.api.search_url, fixtures = %cfg.api.fixture_dir.display(), "store ready");

    // Echo loading messages while requests are in flight
    let watcher = Arc::clone(&store);
    let mut events = store.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(StoreEvent::Committed(MutationKind::SetLoadingMessage)) => {
                    let message = watcher.read(|s| s.loading_message.clone());
                    if !message.is_empty() {
                        eprintln!("... {}", message);
                    }
                }
                Ok(_) | Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            }
        }
    });

    for line in commands::HELP {
        println!("{}", line);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = commands::parse_command(&line) else {
            println!("Unknown command. Type /help for the list.");
            continue;
        };
        match command {
            commands::ParsedCommand::Quit => break,
            commands::ParsedCommand::Help => {
                for line in commands::HELP {
                    println!("{}", line);
                }
                continue;
            }
            commands::ParsedCommand::Show => {}
            other => {
                if let Some(action) = other.into_action() {
                    store.dispatch(action).await;
                }
            }
        }
        for line in store.read(ui::render) {
            println!("{}", line);
        }
    }

    Ok(())
}
