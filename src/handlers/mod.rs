/// Rendering of the current-time sentence served at `GET /`.
pub mod time;

/// Construction of the status payload served at `GET /stats`.
pub mod stats;
