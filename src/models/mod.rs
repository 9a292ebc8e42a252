/// # Status Payload
///
/// Fixed-shape JSON object returned by `GET /stats`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "uptime": 12.345678
/// }
/// ```
pub mod stats;

pub use stats::StatsResponse;
