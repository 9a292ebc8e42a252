use actix_web::web;

/// # Current Time Endpoint
///
/// Returns a sentence containing the current wall-clock time.
///
/// ## Response
///
/// - **200 OK**
///   - Content-Type: `text/html; charset=utf-8`
///   - Body: `L'heure actuelle est : <M/D/YYYY, h:mm:ss AM|PM>`
pub mod time;

/// # Status Endpoint
///
/// Returns the service status and its uptime in seconds.
///
/// ## Response
///
/// - **200 OK**
///   - Content-Type: `application/json`
///   - Body: `{"status":"ok","uptime":<seconds>}`
pub mod stats;

/// # Route Configuration
///
/// Mounts both endpoints at the root of the application. Handlers expect a
/// `web::Data<dyn Clock>` in the app data.
///
/// ```text
/// GET /      - Current time sentence
/// GET /stats - Status and uptime
/// ```
///
/// Anything else falls through to actix-web's default 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(time::configure_routes)
        .configure(stats::configure_routes);
}
