use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chat_core::ChatLog;
use log::{error, info};
use summarizer_client::Summarizer;

use crate::controllers::{chat_controller, summarize_controller, system_controller};
use crate::middleware::TracingMiddleware;

/// Shared state handed to every request handler.
///
/// The chat log is an owned, injectable store, not a process global; the
/// summarizer sits behind its trait so tests can substitute a mock.
pub struct AppState {
    pub chat_log: ChatLog,
    pub summarizer: Arc<dyn Summarizer>,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(summarize_controller::config)
        .configure(chat_controller::config)
        .configure(system_controller::config);
}

pub async fn run(app_state: AppState, port: u16) -> Result<(), String> {
    info!("Starting web service...");

    let app_state = web::Data::new(app_state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingMiddleware)
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
