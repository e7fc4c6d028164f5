use actix_web::{
    web::{self, Data},
    HttpResponse, Responder,
};
use chat_core::ChatMessage;
use log::info;

use crate::{models::StatusResponse, server::AppState};

/// Full chat log in append order.
pub async fn list_messages(app_state: Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(app_state.chat_log.all())
}

/// Append a message to the log. Missing fields fall back to the
/// `ChatMessage` defaults (`"Unknown"` author, empty message).
pub async fn append_message(
    app_state: Data<AppState>,
    message: web::Json<ChatMessage>,
) -> impl Responder {
    let message = message.into_inner();
    info!("chat append from {}", message.author);
    app_state.chat_log.append(message);
    HttpResponse::Ok().json(StatusResponse::ok())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .route(web::get().to(list_messages))
            .route(web::post().to(append_message)),
    );
}
