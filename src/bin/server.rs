use std::process::ExitCode;
use std::sync::Arc;

use punchlist::config::Config;
use punchlist::server::{self, AppState};
use punchlist::store::FileStore;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    if let Err(e) = config.ensure_dirs() {
        log::error!("Failed to create data directories: {}", e);
        return ExitCode::FAILURE;
    }

    let store = FileStore::new(&config.data_file);
    if let Err(e) = store.ensure_seeded() {
        log::error!("Failed to seed {}: {}", config.data_file.display(), e);
        return ExitCode::FAILURE;
    }

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.listen_addr, e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Server is running on http://{}", config.listen_addr);

    let state = AppState { store: Arc::new(store) };
    if let Err(e) = server::serve(listener, state).await {
        log::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
