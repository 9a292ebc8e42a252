use crate::clock::Clock;
use crate::handlers::time::current_time_message;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};

/// # Current Time Endpoint
///
/// Renders the request-time wall clock into a fixed sentence.
///
/// ## Example Response
///
/// ```text
/// L'heure actuelle est : 10/16/2026, 3:04:05 PM
/// ```
#[get("/")]
pub async fn current_time(clock: web::Data<dyn Clock>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(current_time_message(&clock.now()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(current_time);
}
