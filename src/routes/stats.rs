use crate::clock::Clock;
use crate::handlers::stats::current_stats;
use actix_web::{HttpResponse, Responder, get, web};

/// # Status Endpoint
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "uptime": 42.017
/// }
/// ```
#[get("/stats")]
pub async fn stats(clock: web::Data<dyn Clock>) -> impl Responder {
    HttpResponse::Ok().json(current_stats(clock.get_ref()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(stats);
}
