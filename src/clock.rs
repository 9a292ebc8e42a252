use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Source of wall-clock time and process uptime for the request handlers.
///
/// Shared with every worker as `web::Data<dyn Clock>`.
pub trait Clock: Send + Sync {
    /// Current wall-clock time in the process's local timezone.
    fn now(&self) -> DateTime<Local>;

    /// Time elapsed since the process started.
    fn uptime(&self) -> Duration;
}

/// Clock backed by the operating system.
///
/// Uptime is measured against a monotonic [`Instant`] captured at startup, so
/// it never goes backwards even if the wall clock is adjusted.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> Self {
        Self { started }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}
