use serde::{Deserialize, Serialize};
use std::time::Duration;

/// # Status Response
///
/// Liveness payload of the service.
///
/// ## Fields
/// - `status`: always `"ok"` while the process is serving requests
/// - `uptime`: seconds since process start, with sub-second precision
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub status: String,
    pub uptime: f64,
}

impl StatsResponse {
    pub fn ok(uptime: Duration) -> Self {
        Self {
            status: "ok".to_string(),
            uptime: uptime.as_secs_f64(),
        }
    }
}
