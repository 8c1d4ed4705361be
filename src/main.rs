use crate::api::BackendClient;
use crate::app_state::AppState;
use crate::config::Config;
use crate::router::serve_request;
use astra::{Request, Server};

mod api;
mod app_state;
mod config;
mod errors;
mod pricing;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Load configuration
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the backend client
    let client = match BackendClient::new(&cfg) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Backend client init failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(client);

    // 3️⃣ Start the server
    log::info!(
        "Starting server at http://{} (backend {})",
        cfg.bind_addr,
        cfg.api_base_url
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing shared state into closure
    let result = server.serve(move |req: Request, _info| serve_request(req, &state));

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
